//! Reduction of a transaction ledger to the three figures the calculators need.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{non_negative, round_half_up};
use crate::calculations::schedule::VAT_RATE;
use crate::models::{TaxProfile, Transaction};

/// Ledger totals for one assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Financials {
    /// Ledger income, or the declared estimate when the ledger is empty.
    pub gross_income: Decimal,

    /// Expenses that pass the WREN test.
    pub allowable_expenses: Decimal,

    /// VAT embedded in VAT-inclusive expenses, rounded to kobo.
    pub input_vat_claims: Decimal,
}

impl Financials {
    /// Gross income less allowable expenses, never below zero.
    pub fn assessable_profit(&self) -> Decimal {
        non_negative(self.gross_income - self.allowable_expenses)
    }
}

/// Aggregates a ledger snapshot. Ordering of the ledger is irrelevant.
pub struct FinancialAggregator;

impl FinancialAggregator {
    /// Sums the ledger into [`Financials`].
    ///
    /// When the ledger is completely empty the profile's declared figure
    /// (turnover for companies, gross income for individuals) is used as gross
    /// income. Any logged entry at all switches the source to the ledger, even
    /// if no income has been recorded yet.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rust_decimal_macros::dec;
    /// use ngtax_core::{FinancialAggregator, TaxProfile, Transaction};
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    /// let ledger = vec![
    ///     Transaction::income(dec!(1000000), date, "Freelance Project"),
    ///     Transaction::expense(dec!(107.5), date, "Internet/Data").deductible().with_input_vat(),
    /// ];
    ///
    /// let financials = FinancialAggregator::aggregate(&TaxProfile::default(), &ledger);
    ///
    /// assert_eq!(financials.gross_income, dec!(1000000));
    /// assert_eq!(financials.allowable_expenses, dec!(107.5));
    /// assert_eq!(financials.input_vat_claims, dec!(7.5));
    /// ```
    pub fn aggregate(
        profile: &TaxProfile,
        transactions: &[Transaction],
    ) -> Financials {
        let ledger_income: Decimal = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();

        let gross_income = if ledger_income.is_zero() && transactions.is_empty() {
            debug!(
                entity = profile.entity_type.as_str(),
                declared = %profile.declared_income(),
                "Ledger is empty; using declared income estimate"
            );
            profile.declared_income()
        } else {
            ledger_income
        };

        let allowable_expenses = transactions
            .iter()
            .filter(|t| t.is_expense() && t.is_tax_deductible)
            .map(|t| t.amount)
            .sum();

        let input_vat: Decimal = transactions
            .iter()
            .filter(|t| t.is_expense() && t.has_input_vat)
            .map(|t| Self::extract_input_vat(t.amount))
            .sum();

        Financials {
            gross_income,
            allowable_expenses,
            input_vat_claims: round_half_up(input_vat),
        }
    }

    /// VAT component of a VAT-inclusive amount: `amount × 7.5 / 107.5`.
    ///
    /// This reverses the gross-up; it is not `amount × 7.5%`.
    pub fn extract_input_vat(vat_inclusive_amount: Decimal) -> Decimal {
        vat_inclusive_amount * VAT_RATE / (Decimal::ONE + VAT_RATE)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::EntityType;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn individual(declared: Decimal) -> TaxProfile {
        TaxProfile {
            annual_gross_income: declared,
            annual_turnover: dec!(99999999),
            ..TaxProfile::default()
        }
    }

    fn company(turnover: Decimal) -> TaxProfile {
        TaxProfile {
            entity_type: EntityType::Company,
            annual_gross_income: dec!(1),
            annual_turnover: turnover,
            ..TaxProfile::default()
        }
    }

    // =========================================================================
    // gross income tests
    // =========================================================================

    #[test]
    fn empty_ledger_falls_back_to_declared_gross_income() {
        let result = FinancialAggregator::aggregate(&individual(dec!(5000000)), &[]);

        assert_eq!(result.gross_income, dec!(5000000));
    }

    #[test]
    fn empty_ledger_falls_back_to_turnover_for_companies() {
        let result = FinancialAggregator::aggregate(&company(dec!(60000000)), &[]);

        assert_eq!(result.gross_income, dec!(60000000));
    }

    #[test]
    fn any_income_entry_replaces_the_estimate_entirely() {
        let ledger = vec![Transaction::income(dec!(1), date(), "Other")];

        let result = FinancialAggregator::aggregate(&individual(dec!(5000000)), &ledger);

        assert_eq!(result.gross_income, dec!(1));
    }

    #[test]
    fn expense_only_ledger_does_not_fall_back() {
        let ledger = vec![Transaction::expense(dec!(20000), date(), "Power/Diesel")];

        let result = FinancialAggregator::aggregate(&individual(dec!(5000000)), &ledger);

        assert_eq!(result.gross_income, Decimal::ZERO);
    }

    #[test]
    fn income_entries_are_summed() {
        let ledger = vec![
            Transaction::income(dec!(250000), date(), "Salary"),
            Transaction::income(dec!(125000.50), date(), "Freelance Project"),
            Transaction::expense(dec!(40000), date(), "Office Rent").deductible(),
        ];

        let result = FinancialAggregator::aggregate(&individual(Decimal::ZERO), &ledger);

        assert_eq!(result.gross_income, dec!(375000.50));
    }

    // =========================================================================
    // allowable expense tests
    // =========================================================================

    #[test]
    fn only_deductible_expenses_are_allowable() {
        let ledger = vec![
            Transaction::expense(dec!(100000), date(), "Staff Salaries").deductible(),
            Transaction::expense(dec!(30000), date(), "Personal lunch"),
            Transaction::income(dec!(500000), date(), "Business Sales"),
        ];

        let result = FinancialAggregator::aggregate(&individual(Decimal::ZERO), &ledger);

        assert_eq!(result.allowable_expenses, dec!(100000));
    }

    #[test]
    fn assessable_profit_is_clamped_at_zero() {
        let financials = Financials {
            gross_income: dec!(100000),
            allowable_expenses: dec!(250000),
            input_vat_claims: Decimal::ZERO,
        };

        assert_eq!(financials.assessable_profit(), Decimal::ZERO);
    }

    // =========================================================================
    // input VAT tests
    // =========================================================================

    #[test]
    fn input_vat_is_extracted_from_vat_inclusive_amount() {
        let result = FinancialAggregator::extract_input_vat(dec!(107.5));

        // Not 107.5 × 0.075 = 8.0625
        assert_eq!(result, dec!(7.5));
    }

    #[test]
    fn input_vat_only_counts_flagged_expenses() {
        let ledger = vec![
            Transaction::expense(dec!(10750), date(), "Software Subscriptions").with_input_vat(),
            Transaction::expense(dec!(10750), date(), "Equipment Purchase (Assets)"),
            Transaction::income(dec!(10750), date(), "Business Sales").with_input_vat(),
        ];

        let result = FinancialAggregator::aggregate(&individual(Decimal::ZERO), &ledger);

        assert_eq!(result.input_vat_claims, dec!(750));
    }

    #[test]
    fn input_vat_does_not_require_deductibility() {
        let ledger =
            vec![Transaction::expense(dec!(215), date(), "Internet/Data").with_input_vat()];

        let result = FinancialAggregator::aggregate(&individual(Decimal::ZERO), &ledger);

        assert_eq!(result.allowable_expenses, Decimal::ZERO);
        assert_eq!(result.input_vat_claims, dec!(15));
    }

    #[test]
    fn input_vat_total_is_rounded_to_kobo() {
        let ledger = vec![
            Transaction::expense(dec!(1000), date(), "Power/Diesel").with_input_vat(),
            Transaction::expense(dec!(1000), date(), "Power/Diesel").with_input_vat(),
        ];

        let result = FinancialAggregator::aggregate(&individual(Decimal::ZERO), &ledger);

        // 2 × 69.7674... = 139.5348...
        assert_eq!(result.input_vat_claims, dec!(139.53));
    }

    #[test]
    fn empty_profile_and_ledger_aggregate_to_zero() {
        let result = FinancialAggregator::aggregate(&TaxProfile::default(), &[]);

        assert_eq!(result, Financials::default());
    }
}
