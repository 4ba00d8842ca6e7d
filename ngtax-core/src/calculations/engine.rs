//! The orchestrator that turns a profile and ledger into a [`TaxResult`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::aggregator::FinancialAggregator;
use crate::calculations::corporate::CorporateTaxCalculator;
use crate::calculations::personal::PersonalTaxCalculator;
use crate::models::{Assessment, PolicyYear, TaxProfile, TaxResult, Transaction};

/// Errors raised at the engine boundary.
///
/// Computation itself cannot fail; only caller-supplied selectors are checked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The policy code is not one of the recognised regimes.
    #[error("invalid policy '{0}': expected ACT_2024 or ACT_2026_PROPOSED")]
    InvalidPolicy(String),
}

/// The same profile and ledger assessed under both regimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyComparison {
    pub legacy: TaxResult,
    pub proposed: TaxResult,
}

impl PolicyComparison {
    /// Legacy total minus 2026 total. Positive when the 2026 regime is cheaper.
    pub fn saving(&self) -> Decimal {
        self.legacy.total_tax_liability - self.proposed.total_tax_liability
    }
}

/// Entry point of the tax computation engine.
///
/// Every call is independent: inputs are borrowed immutably and a fresh
/// [`TaxResult`] is built each time, so the engine can be called on every
/// edit without caching or locking.
pub struct TaxEngine;

impl TaxEngine {
    /// Computes the liability for `profile` and `transactions` under `policy`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use ngtax_core::{EntityType, PolicyYear, TaxEngine, TaxProfile};
    ///
    /// let profile = TaxProfile {
    ///     entity_type: EntityType::Company,
    ///     annual_turnover: dec!(40000000),
    ///     ..TaxProfile::default()
    /// };
    ///
    /// let result = TaxEngine::calculate(&profile, &[], PolicyYear::Act2026Proposed);
    ///
    /// assert_eq!(result.income_tax_liability, dec!(0));
    /// assert_eq!(result.vat_payable, dec!(3000000));
    /// assert_eq!(result.compliance_flags.len(), 1);
    /// ```
    pub fn calculate(
        profile: &TaxProfile,
        transactions: &[Transaction],
        policy: PolicyYear,
    ) -> TaxResult {
        let financials = FinancialAggregator::aggregate(profile, transactions);
        let assessable_profit = financials.assessable_profit();
        let assessment = Assessment::select(profile.entity_type, policy);

        debug!(
            ?assessment,
            transactions = transactions.len(),
            gross_income = %financials.gross_income,
            assessable_profit = %assessable_profit,
            "Dispatching assessment"
        );

        match assessment {
            Assessment::PersonalLegacy | Assessment::PersonalProposed2026 => {
                PersonalTaxCalculator::calculate_pit(
                    profile,
                    financials.gross_income,
                    assessable_profit,
                    assessment.policy(),
                )
            }
            Assessment::CorporateLegacy | Assessment::CorporateProposed2026 => {
                CorporateTaxCalculator::calculate_cit(
                    profile,
                    financials.gross_income,
                    assessable_profit,
                    financials.allowable_expenses,
                    financials.input_vat_claims,
                    assessment.policy(),
                )
            }
        }
    }

    /// Like [`TaxEngine::calculate`], for callers holding a textual policy code.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] before any computation if `code`
    /// is not a recognised regime. There is no fallback regime.
    pub fn calculate_for_code(
        profile: &TaxProfile,
        transactions: &[Transaction],
        code: &str,
    ) -> Result<TaxResult, EngineError> {
        let policy: PolicyYear = code.parse()?;
        Ok(Self::calculate(profile, transactions, policy))
    }

    /// Assesses the same inputs under both regimes.
    pub fn compare(
        profile: &TaxProfile,
        transactions: &[Transaction],
    ) -> PolicyComparison {
        PolicyComparison {
            legacy: Self::calculate(profile, transactions, PolicyYear::Act2024),
            proposed: Self::calculate(profile, transactions, PolicyYear::Act2026Proposed),
        }
    }
}
