use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::EngineError;
use crate::models::EntityType;

/// The tax regime a liability is computed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyYear {
    /// Finance Act 2020 rules: CRA, legacy PIT bands, no development levy.
    #[serde(rename = "ACT_2024", alias = "2024_ACT")]
    Act2024,

    /// Nigeria Tax Act 2025 rules, effective 2026.
    #[default]
    #[serde(rename = "ACT_2026_PROPOSED", alias = "2026_PROPOSED")]
    Act2026Proposed,
}

impl PolicyYear {
    pub const ALL: [PolicyYear; 2] = [PolicyYear::Act2024, PolicyYear::Act2026Proposed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Act2024 => "ACT_2024",
            Self::Act2026Proposed => "ACT_2026_PROPOSED",
        }
    }

    /// Parses a policy code. The profile store spells the codes year-first,
    /// so both spellings are recognised.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "ACT_2024" | "2024_ACT" => Some(Self::Act2024),
            "ACT_2026_PROPOSED" | "2026_PROPOSED" => Some(Self::Act2026Proposed),
            _ => None,
        }
    }
}

impl fmt::Display for PolicyYear {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyYear {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| EngineError::InvalidPolicy(s.to_string()))
    }
}

/// Every combination of entity type and regime the engine knows how to assess.
///
/// Dispatch goes through this enum so that adding a regime forces every
/// calculator path to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assessment {
    PersonalLegacy,
    PersonalProposed2026,
    CorporateLegacy,
    CorporateProposed2026,
}

impl Assessment {
    pub fn select(
        entity: EntityType,
        policy: PolicyYear,
    ) -> Self {
        match (entity, policy) {
            (EntityType::Individual, PolicyYear::Act2024) => Self::PersonalLegacy,
            (EntityType::Individual, PolicyYear::Act2026Proposed) => Self::PersonalProposed2026,
            (EntityType::Company, PolicyYear::Act2024) => Self::CorporateLegacy,
            (EntityType::Company, PolicyYear::Act2026Proposed) => Self::CorporateProposed2026,
        }
    }

    pub fn entity(&self) -> EntityType {
        match self {
            Self::PersonalLegacy | Self::PersonalProposed2026 => EntityType::Individual,
            Self::CorporateLegacy | Self::CorporateProposed2026 => EntityType::Company,
        }
    }

    pub fn policy(&self) -> PolicyYear {
        match self {
            Self::PersonalLegacy | Self::CorporateLegacy => PolicyYear::Act2024,
            Self::PersonalProposed2026 | Self::CorporateProposed2026 => PolicyYear::Act2026Proposed,
        }
    }
}
