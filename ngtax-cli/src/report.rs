//! Plain-text rendering of assessment results.

use std::fmt;

use ngtax_core::calculations::common::format_naira;
use ngtax_core::{PolicyComparison, TaxResult};
use ngtax_data::PeriodSummary;
use rust_decimal::Decimal;

const LABEL_WIDTH: usize = 22;

fn line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    amount: Decimal,
) -> fmt::Result {
    writeln!(f, "{label:<LABEL_WIDTH$}{:>16}", format_naira(amount))
}

/// Display adapter for a single [`TaxResult`].
pub struct ResultReport<'a>(pub &'a TaxResult);

impl fmt::Display for ResultReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.0;

        writeln!(f, "Tax estimate under {}", r.policy_used)?;
        writeln!(f, "Status: {}", r.status_label)?;
        writeln!(f)?;

        line(f, "Gross revenue", r.gross_revenue)?;
        line(f, "Assessable profit", r.assessable_profit)?;
        line(f, "Deductions", r.deductions.total)?;
        let d = &r.deductions;
        for (label, amount) in [
            ("  Pension", d.pension),
            ("  NHF", d.nhf),
            ("  Life insurance", d.life_insurance),
            ("  Rent relief", d.rent_relief),
            ("  CRA", d.cra),
        ] {
            if !amount.is_zero() {
                line(f, label, amount)?;
            }
        }
        line(f, "Taxable income", r.taxable_income)?;

        if !r.breakdown.is_empty() {
            writeln!(f)?;
            writeln!(f, "Breakdown")?;
            for item in &r.breakdown {
                write!(
                    f,
                    "  {:<24}{:>5}{:>16}{:>16}",
                    item.label,
                    item.rate,
                    format_naira(item.taxable_amount),
                    format_naira(item.tax_amount)
                )?;
                match &item.note {
                    Some(note) => writeln!(f, "  {note}")?,
                    None => writeln!(f)?,
                }
            }
        }

        writeln!(f)?;
        line(f, "Income tax", r.income_tax_liability)?;
        line(f, "Development levy", r.development_levy)?;
        if !r.vat_output.is_zero() {
            line(f, "VAT output", r.vat_output)?;
            line(f, "VAT input credit", r.vat_input_credit)?;
        }
        line(f, "VAT payable", r.vat_payable)?;
        line(f, "Total liability", r.total_tax_liability)?;
        if r.is_nil_liability() {
            writeln!(f, "No tax payable.")?;
        }
        writeln!(f, "{:<LABEL_WIDTH$}{:>15}%", "Effective rate", r.effective_tax_rate)?;

        if !r.insights.is_empty() {
            writeln!(f)?;
            writeln!(f, "Insights")?;
            for insight in &r.insights {
                writeln!(f, "  - {insight}")?;
            }
        }
        if !r.compliance_flags.is_empty() {
            writeln!(f)?;
            writeln!(f, "Compliance")?;
            for flag in &r.compliance_flags {
                writeln!(f, "  ! {flag}")?;
            }
        }
        Ok(())
    }
}

/// Display adapter for a side-by-side [`PolicyComparison`].
pub struct ComparisonReport<'a>(pub &'a PolicyComparison);

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let c = self.0;

        write!(f, "{}", ResultReport(&c.legacy))?;
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(60))?;
        writeln!(f)?;
        write!(f, "{}", ResultReport(&c.proposed))?;
        writeln!(f)?;

        let saving = c.saving();
        if saving.is_sign_negative() && !saving.is_zero() {
            writeln!(
                f,
                "{} pays {} more than {}",
                c.proposed.policy_used,
                format_naira(-saving),
                c.legacy.policy_used
            )
        } else {
            writeln!(
                f,
                "{} saves {} against {}",
                c.proposed.policy_used,
                format_naira(saving),
                c.legacy.policy_used
            )
        }
    }
}

/// Display adapter for a [`PeriodSummary`].
pub struct PeriodReport<'a>(pub &'a PeriodSummary);

impl fmt::Display for PeriodReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let p = self.0;

        writeln!(f, "Period: {} containing {}", p.frame, p.reference)?;
        if p.estimated {
            writeln!(f, "No ledger entries; income pro-rated from the profile estimate.")?;
        } else {
            writeln!(f, "{} ledger entries in period", p.transactions)?;
        }
        writeln!(f)?;

        let e = &p.exemption;
        writeln!(f, "Exemption monitor")?;
        line(f, "  Period income", e.income)?;
        line(f, "  Tax-free limit", e.threshold)?;
        if e.is_crossed() {
            line(f, "  Taxable excess", e.excess)?;
        } else {
            line(f, "  Tax-free used", e.used)?;
            line(f, "  Allowance left", e.remaining)?;
        }
        writeln!(f)?;

        let d = &p.deductibility;
        writeln!(f, "Deductibility")?;
        line(f, "  Tax savers", d.tax_savers)?;
        line(f, "  Business (WREN)", d.business_costs)?;
        line(f, "  Personal/Non-Ded", d.personal_costs)?;

        if !p.income_by_category.is_empty() {
            writeln!(f)?;
            writeln!(f, "Income by category")?;
            for total in &p.income_by_category {
                line(f, &format!("  {}", total.category), total.amount)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ngtax_core::{EntityType, PolicyYear, TaxEngine, TaxProfile, Transaction};
    use ngtax_data::TimeFrame;
    use rust_decimal_macros::dec;

    use super::*;

    fn worked_individual() -> TaxProfile {
        TaxProfile {
            annual_gross_income: dec!(5000000),
            rent_paid: dec!(1200000),
            pension_contribution: dec!(20000),
            nhf_contribution: dec!(5000),
            ..TaxProfile::default()
        }
    }

    // =========================================================================
    // Single result
    // =========================================================================

    #[test]
    fn individual_report_lists_totals_and_bands() {
        let result = TaxEngine::calculate(&worked_individual(), &[], PolicyYear::Act2026Proposed);

        let text = ResultReport(&result).to_string();

        assert!(text.starts_with("Tax estimate under ACT_2026_PROPOSED\n"));
        assert!(text.contains("Status: Individual / Entrepreneur"));
        assert!(text.contains("₦4,460,000"));
        assert!(text.contains("₦592,800"));
        assert!(text.contains("First ₦800k Tax Free"));
        assert!(text.contains("11.86%"));
    }

    #[test]
    fn zero_deductions_are_omitted() {
        let profile = TaxProfile {
            annual_gross_income: dec!(5000000),
            ..TaxProfile::default()
        };
        let result = TaxEngine::calculate(&profile, &[], PolicyYear::Act2026Proposed);

        let text = ResultReport(&result).to_string();

        assert!(!text.contains("  Pension"));
        assert!(!text.contains("  Rent relief"));
    }

    #[test]
    fn small_company_report_shows_compliance_flag() {
        let profile = TaxProfile {
            entity_type: EntityType::Company,
            annual_turnover: dec!(40000000),
            ..TaxProfile::default()
        };
        let result = TaxEngine::calculate(&profile, &[], PolicyYear::Act2026Proposed);

        let text = ResultReport(&result).to_string();

        assert!(text.contains("Small Company (Exempt)"));
        assert!(text.contains("VAT output"));
        assert!(text.contains("₦3,000,000"));
        assert!(text.contains("Compliance\n  ! Mandatory"));
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    #[test]
    fn comparison_reports_saving_under_2026() {
        let comparison = TaxEngine::compare(&worked_individual(), &[]);

        let text = ComparisonReport(&comparison).to_string();

        assert!(text.contains("Tax estimate under ACT_2024"));
        assert!(text.contains("Tax estimate under ACT_2026_PROPOSED"));
        assert!(text.contains("ACT_2026_PROPOSED saves"));
    }

    #[test]
    fn comparison_reports_extra_cost_when_2026_is_dearer() {
        let profile = TaxProfile {
            entity_type: EntityType::Company,
            annual_turnover: dec!(60000000),
            ..TaxProfile::default()
        };
        let comparison = TaxEngine::compare(&profile, &[]);

        let text = ComparisonReport(&comparison).to_string();

        assert!(text.contains("ACT_2026_PROPOSED pays ₦2,400,000 more than ACT_2024"));
    }

    #[test]
    fn exempt_individual_report_says_nothing_is_payable() {
        let profile = TaxProfile {
            annual_gross_income: dec!(600000),
            ..TaxProfile::default()
        };
        let result = TaxEngine::calculate(&profile, &[], PolicyYear::Act2026Proposed);

        let text = ResultReport(&result).to_string();

        assert!(text.contains("No tax payable."));
    }

    // =========================================================================
    // Period
    // =========================================================================

    #[test]
    fn period_report_shows_excess_once_allowance_is_crossed() {
        let as_of = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        let ledger = vec![
            Transaction::income(dec!(450000), as_of, "Salary"),
            Transaction::expense(dec!(25000), as_of, "Entertainment"),
        ];
        let summary =
            PeriodSummary::build(&worked_individual(), &ledger, TimeFrame::Monthly, as_of);

        let text = PeriodReport(&summary).to_string();

        assert!(text.starts_with("Period: monthly containing 2026-02-28\n"));
        assert!(text.contains("Taxable excess"));
        assert!(text.contains("₦383,333.33"));
        assert!(text.contains("₦45,000"));
        assert!(text.contains("  Salary"));
    }

    #[test]
    fn period_report_flags_estimated_income() {
        let as_of = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        let profile = TaxProfile {
            annual_gross_income: dec!(600000),
            ..TaxProfile::default()
        };
        let summary = PeriodSummary::build(&profile, &[], TimeFrame::Quarterly, as_of);

        let text = PeriodReport(&summary).to_string();

        assert!(text.contains("pro-rated from the profile estimate"));
        assert!(text.contains("Allowance left"));
        assert!(text.contains("₦50,000"));
        assert!(!text.contains("Income by category"));
    }
}
