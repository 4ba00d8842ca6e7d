//! Personal income tax (PIT) for individuals.
//!
//! # Legacy regime
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | CRA = max(₦200,000, 1% of gross) + 20% of gross |
//! | 2    | Reliefs = CRA + annual pension + annual NHF + life insurance |
//! | 3    | Taxable income = assessable profit − reliefs (minimum 0) |
//! | 4    | Tax = legacy bands applied to taxable income |
//!
//! # 2026 regime
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Rent relief = min(20% of rent, ₦500,000); CRA abolished |
//! | 2    | Reliefs = annual pension + annual NHF + life insurance + rent relief |
//! | 3    | Taxable income = assessable profit − reliefs (minimum 0) |
//! | 4    | Gross income ≤ ₦800,000: exempt, no bands evaluated |
//! | 5    | Otherwise tax = 2026 bands applied to taxable income |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculations::bands::{BandAssessment, apply_bands};
use crate::calculations::common::{
    format_naira, max, non_negative, percent_label, percent_of, round_half_up,
};
use crate::calculations::schedule::{
    CRA_FIXED_AMOUNT, CRA_GROSS_FLOOR_RATE, CRA_GROSS_RATE, LEGACY_PIT_BANDS, MONTHS_PER_YEAR,
    PIT_EXEMPTION_THRESHOLD, PROPOSED_2026_PIT_BANDS, RENT_RELIEF_CAP, RENT_RELIEF_RATE,
};
use crate::models::{Deductions, PolicyYear, TaxBreakdownItem, TaxProfile, TaxResult};

const STATUS_LABEL: &str = "Individual / Entrepreneur";

/// Rent relief under the 2026 regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentRelief {
    pub amount: Decimal,

    /// True when 20% of rent exceeded the ₦500,000 cap.
    pub capped: bool,
}

impl RentRelief {
    pub fn note(&self) -> &'static str {
        if self.capped {
            "Capped at ₦500k"
        } else {
            "20% of Rent"
        }
    }
}

/// Annualised statutory contributions common to both regimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StatutoryReliefs {
    pension: Decimal,
    nhf: Decimal,
    life_insurance: Decimal,
}

impl StatutoryReliefs {
    fn from_profile(profile: &TaxProfile) -> Self {
        Self {
            pension: round_half_up(profile.pension_contribution * MONTHS_PER_YEAR),
            nhf: round_half_up(profile.nhf_contribution * MONTHS_PER_YEAR),
            life_insurance: profile.life_insurance,
        }
    }

    fn total(&self) -> Decimal {
        self.pension + self.nhf + self.life_insurance
    }
}

/// Calculator for personal income tax.
pub struct PersonalTaxCalculator;

impl PersonalTaxCalculator {
    /// Computes PIT under `policy`.
    ///
    /// `assessable_profit` is gross income less allowable expenses, already
    /// floored at zero by the caller.
    pub fn calculate_pit(
        profile: &TaxProfile,
        gross_income: Decimal,
        assessable_profit: Decimal,
        policy: PolicyYear,
    ) -> TaxResult {
        match policy {
            PolicyYear::Act2024 => Self::legacy(profile, gross_income, assessable_profit),
            PolicyYear::Act2026Proposed => {
                Self::proposed_2026(profile, gross_income, assessable_profit)
            }
        }
    }

    /// PIT under the legacy regime with the Consolidated Relief Allowance.
    pub fn legacy(
        profile: &TaxProfile,
        gross_income: Decimal,
        assessable_profit: Decimal,
    ) -> TaxResult {
        let statutory = StatutoryReliefs::from_profile(profile);
        let cra = Self::consolidated_relief_allowance(gross_income);

        let total_reliefs = cra + statutory.total();
        let taxable_income = non_negative(assessable_profit - total_reliefs);

        let bands = apply_bands(taxable_income, &LEGACY_PIT_BANDS);
        let breakdown = bands
            .slices
            .iter()
            .map(|slice| {
                let rate = percent_label(slice.band.rate);
                TaxBreakdownItem {
                    label: format!("Band {rate}"),
                    rate,
                    taxable_amount: slice.taxable_amount,
                    tax_amount: slice.tax,
                    note: None,
                    is_relief: false,
                }
            })
            .collect();

        debug!(
            gross_income = %gross_income,
            cra = %cra,
            taxable_income = %taxable_income,
            tax = %bands.total_tax,
            "Legacy PIT computed"
        );

        let deductions = Deductions {
            pension: statutory.pension,
            nhf: statutory.nhf,
            life_insurance: statutory.life_insurance,
            rent_relief: Decimal::ZERO,
            cra,
            total: total_reliefs,
        };

        Self::result(
            PolicyYear::Act2024,
            gross_income,
            assessable_profit,
            deductions,
            taxable_income,
            bands.total_tax,
            breakdown,
            vec![
                "Logic Applied: Consolidated Relief Allowance with legacy bands (Finance Act 2020)."
                    .to_string(),
            ],
        )
    }

    /// PIT under the 2026 regime: itemised reliefs, rent relief and the
    /// ₦800,000 gross-income exemption.
    pub fn proposed_2026(
        profile: &TaxProfile,
        gross_income: Decimal,
        assessable_profit: Decimal,
    ) -> TaxResult {
        let statutory = StatutoryReliefs::from_profile(profile);
        let rent_relief = Self::rent_relief(profile.rent_paid);

        let mut breakdown = Vec::new();
        let mut insights = Vec::new();

        if rent_relief.amount > Decimal::ZERO {
            breakdown.push(TaxBreakdownItem {
                label: "Rent Relief Claim".to_string(),
                rate: percent_label(RENT_RELIEF_RATE),
                taxable_amount: profile.rent_paid,
                tax_amount: -rent_relief.amount,
                note: Some(rent_relief.note().to_string()),
                is_relief: true,
            });
        }

        let total_reliefs = statutory.total() + rent_relief.amount;
        let taxable_income = non_negative(assessable_profit - total_reliefs);

        // The exemption looks at gross income, not taxable income.
        let tax = if Self::is_exempt(gross_income) {
            info!(gross_income = %gross_income, "Gross income within PIT exemption threshold");
            insights.push(format!(
                "Exempt: Annual income is within the {} threshold.",
                format_naira(PIT_EXEMPTION_THRESHOLD)
            ));
            Decimal::ZERO
        } else {
            let bands = apply_bands(taxable_income, &PROPOSED_2026_PIT_BANDS);
            breakdown.extend(Self::proposed_band_rows(&bands));

            insights
                .push("Logic Applied: New Progressive Bands (Nigeria Tax Act 2025).".to_string());
            if rent_relief.amount > Decimal::ZERO {
                insights.push(format!(
                    "You saved {} of taxable income due to the new Rent Relief.",
                    format_naira(rent_relief.amount)
                ));
            }
            bands.total_tax
        };

        debug!(
            gross_income = %gross_income,
            rent_relief = %rent_relief.amount,
            taxable_income = %taxable_income,
            tax = %tax,
            "2026 PIT computed"
        );

        let deductions = Deductions {
            pension: statutory.pension,
            nhf: statutory.nhf,
            life_insurance: statutory.life_insurance,
            rent_relief: rent_relief.amount,
            cra: Decimal::ZERO,
            total: total_reliefs,
        };

        Self::result(
            PolicyYear::Act2026Proposed,
            gross_income,
            assessable_profit,
            deductions,
            taxable_income,
            tax,
            breakdown,
            insights,
        )
    }

    /// `max(₦200,000, 1% of gross) + 20% of gross`.
    pub fn consolidated_relief_allowance(gross_income: Decimal) -> Decimal {
        let floor = max(CRA_FIXED_AMOUNT, gross_income * CRA_GROSS_FLOOR_RATE);
        round_half_up(floor + gross_income * CRA_GROSS_RATE)
    }

    /// `min(20% of rent, ₦500,000)`.
    pub fn rent_relief(rent_paid: Decimal) -> RentRelief {
        let uncapped = non_negative(rent_paid) * RENT_RELIEF_RATE;
        RentRelief {
            amount: round_half_up(uncapped.min(RENT_RELIEF_CAP)),
            capped: uncapped > RENT_RELIEF_CAP,
        }
    }

    /// Inclusive: exactly ₦800,000 is exempt.
    pub fn is_exempt(gross_income: Decimal) -> bool {
        gross_income <= PIT_EXEMPTION_THRESHOLD
    }

    fn proposed_band_rows(bands: &BandAssessment) -> Vec<TaxBreakdownItem> {
        bands
            .slices
            .iter()
            .map(|slice| TaxBreakdownItem {
                label: slice.band.note.unwrap_or("Band").to_string(),
                rate: percent_label(slice.band.rate),
                taxable_amount: slice.taxable_amount,
                tax_amount: slice.tax,
                note: slice
                    .band
                    .rate
                    .is_zero()
                    .then(|| "First ₦800k Tax Free".to_string()),
                is_relief: false,
            })
            .collect()
    }

    #[allow(clippy::too_many_arguments)]
    fn result(
        policy: PolicyYear,
        gross_income: Decimal,
        assessable_profit: Decimal,
        deductions: Deductions,
        taxable_income: Decimal,
        tax: Decimal,
        breakdown: Vec<TaxBreakdownItem>,
        insights: Vec<String>,
    ) -> TaxResult {
        TaxResult {
            policy_used: policy,
            status_label: STATUS_LABEL.to_string(),
            gross_revenue: gross_income,
            assessable_profit,
            deductions,
            taxable_income,
            income_tax_liability: tax,
            development_levy: Decimal::ZERO,
            vat_output: Decimal::ZERO,
            vat_input_credit: Decimal::ZERO,
            vat_payable: Decimal::ZERO,
            total_tax_liability: tax,
            effective_tax_rate: percent_of(tax, gross_income),
            breakdown,
            insights,
            compliance_flags: Vec::new(),
        }
    }
}
