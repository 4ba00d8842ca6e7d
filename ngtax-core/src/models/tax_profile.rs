use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EntityType, PersonaType, PolicyYear, SubscriptionTier};

/// Taxpayer profile as supplied by the profile store.
///
/// Contributions marked monthly are annualised by the calculators. Fields the
/// engine does not read (state, assets, tier) are carried so that a profile
/// round-trips through the engine's callers unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxProfile {
    pub name: String,
    pub entity_type: EntityType,
    pub persona: PersonaType,
    pub state_of_residence: String,

    /// Self-declared annual gross income, used for individuals with an empty ledger.
    pub annual_gross_income: Decimal,

    /// Self-declared annual turnover, used for companies with an empty ledger.
    pub annual_turnover: Decimal,

    pub total_fixed_assets: Decimal,

    /// Monthly pension contribution.
    pub pension_contribution: Decimal,

    /// Monthly National Housing Fund contribution.
    pub nhf_contribution: Decimal,

    /// Annual rent paid on the principal residence.
    pub rent_paid: Decimal,

    /// Annual life insurance premium.
    pub life_insurance: Decimal,

    pub tier: SubscriptionTier,
    pub preferred_policy: PolicyYear,
}

impl TaxProfile {
    /// The declared income figure that stands in for an empty ledger.
    pub fn declared_income(&self) -> Decimal {
        match self.entity_type {
            EntityType::Company => self.annual_turnover,
            EntityType::Individual => self.annual_gross_income,
        }
    }
}
