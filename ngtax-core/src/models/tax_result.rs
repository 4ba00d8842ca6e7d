use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PolicyYear;

/// Reliefs and deductions applied before the rate tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Annualised pension contribution.
    pub pension: Decimal,

    /// Annualised National Housing Fund contribution.
    pub nhf: Decimal,

    pub life_insurance: Decimal,

    /// 2026 rent relief (zero under the legacy regime).
    pub rent_relief: Decimal,

    /// Legacy Consolidated Relief Allowance (zero under the 2026 regime).
    pub cra: Decimal,

    /// Sum of the above for individuals; allowable expenses for companies.
    pub total: Decimal,
}

/// One line of the liability breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdownItem {
    pub label: String,

    /// Whole-percent rate label, e.g. `"15%"`.
    pub rate: String,

    pub taxable_amount: Decimal,

    /// Tax charged on the slice. Negative for relief rows.
    pub tax_amount: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default)]
    pub is_relief: bool,
}

/// The full liability picture for one profile under one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub policy_used: PolicyYear,
    pub status_label: String,

    pub gross_revenue: Decimal,

    /// Gross revenue less allowable expenses, floored at zero.
    pub assessable_profit: Decimal,

    pub deductions: Deductions,

    pub taxable_income: Decimal,

    /// PIT for individuals, CIT for companies.
    pub income_tax_liability: Decimal,
    pub development_levy: Decimal,

    pub vat_output: Decimal,
    pub vat_input_credit: Decimal,
    pub vat_payable: Decimal,

    pub total_tax_liability: Decimal,

    /// Percentage, rounded to two places.
    pub effective_tax_rate: Decimal,

    pub breakdown: Vec<TaxBreakdownItem>,
    pub insights: Vec<String>,

    /// Obligations the taxpayer must act on regardless of the amount due.
    pub compliance_flags: Vec<String>,
}

impl TaxResult {
    /// Sum of every charged (non-relief) breakdown row.
    pub fn charged_total(&self) -> Decimal {
        self.breakdown
            .iter()
            .filter(|item| !item.is_relief)
            .map(|item| item.tax_amount)
            .sum()
    }

    pub fn relief_rows(&self) -> impl Iterator<Item = &TaxBreakdownItem> {
        self.breakdown.iter().filter(|item| item.is_relief)
    }

    pub fn is_nil_liability(&self) -> bool {
        self.total_tax_liability.is_zero()
    }
}
