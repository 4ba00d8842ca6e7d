//! TOML loader for taxpayer profiles.
//!
//! Keys mirror [`TaxProfile`] field names. Every key is optional; missing
//! amounts default to zero. Amounts may be TOML integers, floats or strings.
//!
//! ```toml
//! name = "Chiamaka Obi"
//! entity_type = "Individual"
//! persona = "salary"
//! state_of_residence = "Lagos"
//! annual_gross_income = 5000000
//! pension_contribution = 20000   # monthly
//! nhf_contribution = 5000        # monthly
//! rent_paid = 1200000            # annual
//! preferred_policy = "ACT_2026_PROPOSED"
//! ```

use std::path::Path;

use ngtax_core::TaxProfile;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ProfileLoadError {
    #[error("could not read profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },
}

/// Loader for profile TOML documents.
pub struct ProfileLoader;

impl ProfileLoader {
    /// Parses a profile document and checks that every amount is non-negative.
    pub fn load_from_str(input: &str) -> Result<TaxProfile, ProfileLoadError> {
        let profile: TaxProfile = toml::from_str(input)?;
        Self::validate(&profile)?;
        debug!(
            name = %profile.name,
            entity = profile.entity_type.as_str(),
            "Profile loaded"
        );
        Ok(profile)
    }

    pub fn load_from_file(path: &Path) -> Result<TaxProfile, ProfileLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    fn validate(profile: &TaxProfile) -> Result<(), ProfileLoadError> {
        let amounts = [
            ("annual_gross_income", profile.annual_gross_income),
            ("annual_turnover", profile.annual_turnover),
            ("total_fixed_assets", profile.total_fixed_assets),
            ("pension_contribution", profile.pension_contribution),
            ("nhf_contribution", profile.nhf_contribution),
            ("rent_paid", profile.rent_paid),
            ("life_insurance", profile.life_insurance),
        ];
        match amounts.into_iter().find(|(_, value)| *value < Decimal::ZERO) {
            Some((field, value)) => Err(ProfileLoadError::NegativeAmount { field, value }),
            None => Ok(()),
        }
    }
}
