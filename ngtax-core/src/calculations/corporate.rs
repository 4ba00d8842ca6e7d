//! Company income tax (CIT), development levy and VAT for companies.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculations::common::{
    format_naira, non_negative, percent_label, percent_of, round_half_up,
};
use crate::calculations::schedule::{
    DEVELOPMENT_LEVY_RATE, LEGACY_SMALL_COMPANY_TURNOVER_LIMIT, SMALL_COMPANY_TURNOVER_LIMIT,
    STANDARD_CIT_RATE, VAT_RATE,
};
use crate::models::{Deductions, PolicyYear, TaxBreakdownItem, TaxProfile, TaxResult};

/// Rates chosen for one company under one regime.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CorporateRates {
    small_company: bool,
    cit_rate: Decimal,
    levy_rate: Decimal,
    insights: Vec<String>,
    compliance_flags: Vec<String>,
}

/// Calculator for company income tax.
pub struct CorporateTaxCalculator;

impl CorporateTaxCalculator {
    /// Computes CIT, the development levy and VAT payable under `policy`.
    ///
    /// The small-company test is on turnover alone. Effective rate excludes
    /// VAT, which is collected from customers rather than borne on profit.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use ngtax_core::{CorporateTaxCalculator, PolicyYear, TaxProfile};
    ///
    /// let result = CorporateTaxCalculator::calculate_cit(
    ///     &TaxProfile::default(),
    ///     dec!(100000000),  // turnover
    ///     dec!(20000000),   // profit
    ///     dec!(80000000),   // allowable expenses
    ///     dec!(0),          // input VAT
    ///     PolicyYear::Act2026Proposed,
    /// );
    ///
    /// assert_eq!(result.income_tax_liability, dec!(6000000));
    /// assert_eq!(result.development_levy, dec!(800000));
    /// assert_eq!(result.vat_payable, dec!(7500000));
    /// ```
    pub fn calculate_cit(
        profile: &TaxProfile,
        turnover: Decimal,
        profit: Decimal,
        allowable_expenses: Decimal,
        input_vat: Decimal,
        policy: PolicyYear,
    ) -> TaxResult {
        match policy {
            PolicyYear::Act2024 => {
                Self::legacy(profile, turnover, profit, allowable_expenses, input_vat)
            }
            PolicyYear::Act2026Proposed => {
                Self::proposed_2026(profile, turnover, profit, allowable_expenses, input_vat)
            }
        }
    }

    /// Legacy CIT: 0% below ₦25m turnover, 30% otherwise, no development levy.
    pub fn legacy(
        profile: &TaxProfile,
        turnover: Decimal,
        profit: Decimal,
        allowable_expenses: Decimal,
        input_vat: Decimal,
    ) -> TaxResult {
        let small_company = turnover < LEGACY_SMALL_COMPANY_TURNOVER_LIMIT;
        let rates = CorporateRates {
            small_company,
            cit_rate: if small_company {
                Decimal::ZERO
            } else {
                STANDARD_CIT_RATE
            },
            levy_rate: Decimal::ZERO,
            insights: Vec::new(),
            compliance_flags: Vec::new(),
        };

        Self::assess(
            profile,
            PolicyYear::Act2024,
            rates,
            turnover,
            profit,
            allowable_expenses,
            input_vat,
        )
    }

    /// 2026 CIT: small companies (turnover ≤ ₦50m) pay neither CIT nor the
    /// levy but must still file a nil return; others pay 30% CIT and a 4% levy.
    pub fn proposed_2026(
        profile: &TaxProfile,
        turnover: Decimal,
        profit: Decimal,
        allowable_expenses: Decimal,
        input_vat: Decimal,
    ) -> TaxResult {
        let rates = if Self::is_small_company(turnover) {
            info!(turnover = %turnover, "Small company exemption applied");
            CorporateRates {
                small_company: true,
                cit_rate: Decimal::ZERO,
                levy_rate: Decimal::ZERO,
                insights: vec![
                    "Status: Small Company. You are EXEMPT from CIT and Development Levy."
                        .to_string(),
                ],
                compliance_flags: vec![
                    "Mandatory: You must still file CIT returns (Nil Return) to maintain status."
                        .to_string(),
                ],
            }
        } else {
            CorporateRates {
                small_company: false,
                cit_rate: STANDARD_CIT_RATE,
                levy_rate: DEVELOPMENT_LEVY_RATE,
                insights: vec!["Status: Large Company. Standard CIT rate applies.".to_string()],
                compliance_flags: Vec::new(),
            }
        };

        Self::assess(
            profile,
            PolicyYear::Act2026Proposed,
            rates,
            turnover,
            profit,
            allowable_expenses,
            input_vat,
        )
    }

    /// Inclusive: exactly ₦50m turnover is a small company.
    pub fn is_small_company(turnover: Decimal) -> bool {
        turnover <= SMALL_COMPANY_TURNOVER_LIMIT
    }

    /// Output VAT on turnover, treating all supplies as standard-rated.
    pub fn vat_output(turnover: Decimal) -> Decimal {
        round_half_up(turnover * VAT_RATE)
    }

    fn assess(
        profile: &TaxProfile,
        policy: PolicyYear,
        rates: CorporateRates,
        turnover: Decimal,
        profit: Decimal,
        allowable_expenses: Decimal,
        input_vat: Decimal,
    ) -> TaxResult {
        let CorporateRates {
            small_company,
            cit_rate,
            levy_rate,
            mut insights,
            compliance_flags,
        } = rates;

        let cit = round_half_up(profit * cit_rate);
        let levy = round_half_up(profit * levy_rate);

        let mut breakdown = Vec::new();
        if !cit_rate.is_zero() {
            breakdown.push(TaxBreakdownItem {
                label: "Company Income Tax (CIT)".to_string(),
                rate: percent_label(cit_rate),
                taxable_amount: profit,
                tax_amount: cit,
                note: None,
                is_relief: false,
            });
        }
        if !levy_rate.is_zero() {
            breakdown.push(TaxBreakdownItem {
                label: "Development Levy".to_string(),
                rate: percent_label(levy_rate),
                taxable_amount: profit,
                tax_amount: levy,
                note: None,
                is_relief: false,
            });
        }

        let vat_output = Self::vat_output(turnover);
        let vat_payable = non_negative(vat_output - input_vat);
        if input_vat > Decimal::ZERO {
            insights.push(format!(
                "Input VAT Revolution: You recovered {} from your expenses.",
                format_naira(input_vat)
            ));
        }

        debug!(
            company = %profile.name,
            policy = %policy,
            turnover = %turnover,
            profit = %profit,
            cit = %cit,
            levy = %levy,
            vat_payable = %vat_payable,
            "CIT computed"
        );

        TaxResult {
            policy_used: policy,
            status_label: if small_company {
                "Small Company (Exempt)".to_string()
            } else {
                "Large Company".to_string()
            },
            gross_revenue: turnover,
            assessable_profit: profit,
            deductions: Deductions {
                total: allowable_expenses,
                ..Deductions::default()
            },
            taxable_income: profit,
            income_tax_liability: cit,
            development_levy: levy,
            vat_output,
            vat_input_credit: input_vat,
            vat_payable,
            total_tax_liability: cit + levy + vat_payable,
            effective_tax_rate: percent_of(cit + levy, turnover),
            breakdown,
            insights,
            compliance_flags,
        }
    }
}
