//! Period analytics over a ledger.
//!
//! Liability is always assessed on the annual figures. A [`PeriodSummary`]
//! answers the narrower questions asked about one month or quarter: how much
//! of the tax-free allowance the period has used, where its spending went, and
//! which categories its income came from. Annual allowances are pro-rated by
//! [`TimeFrame::months`].

use chrono::NaiveDate;
use ngtax_core::calculations::common::{non_negative, round_half_up};
use ngtax_core::calculations::schedule::{MONTHS_PER_YEAR, PIT_EXEMPTION_THRESHOLD};
use ngtax_core::{PersonalTaxCalculator, TaxProfile, Transaction};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::period::{TimeFrame, filter_by_period};

const UNCATEGORIZED: &str = "Uncategorized";

/// Period income measured against the pro-rated ₦800,000 exemption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExemptionMonitor {
    pub threshold: Decimal,
    pub income: Decimal,

    /// Portion of the allowance consumed, capped at the threshold.
    pub used: Decimal,
    pub remaining: Decimal,

    /// Income above the threshold. Zero while the allowance holds.
    pub excess: Decimal,
}

impl ExemptionMonitor {
    fn new(
        threshold: Decimal,
        income: Decimal,
    ) -> Self {
        Self {
            threshold,
            income,
            used: income.min(threshold),
            remaining: non_negative(threshold - income),
            excess: non_negative(income - threshold),
        }
    }

    pub fn is_crossed(&self) -> bool {
        self.excess > Decimal::ZERO
    }
}

/// Where the period's money went, relative to tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeductibilitySplit {
    /// Pension and NHF for the months covered, plus pro-rated life insurance.
    pub statutory_reliefs: Decimal,

    /// 2026 rent relief pro-rated to the period.
    pub rent_relief: Decimal,

    pub tax_savers: Decimal,

    /// Expenses flagged tax-deductible.
    pub business_costs: Decimal,
    pub personal_costs: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

/// Analytics for the month, quarter or year containing a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub frame: TimeFrame,
    pub reference: NaiveDate,

    /// Ledger entries dated inside the period.
    pub transactions: usize,

    /// True when the ledger was empty and income is the pro-rated declared figure.
    pub estimated: bool,

    pub exemption: ExemptionMonitor,
    pub deductibility: DeductibilitySplit,

    /// Income per category, in order of first appearance.
    pub income_by_category: Vec<CategoryTotal>,
}

impl PeriodSummary {
    /// Builds the summary for `frame` around `reference`.
    ///
    /// The declared income stands in only when the whole ledger is empty; a
    /// period that merely has no entries reports zero income.
    pub fn build(
        profile: &TaxProfile,
        ledger: &[Transaction],
        frame: TimeFrame,
        reference: NaiveDate,
    ) -> Self {
        let months = Decimal::from(frame.months());
        let pro_rate = |annual: Decimal| round_half_up(annual * months / MONTHS_PER_YEAR);

        let in_period = filter_by_period(ledger, frame, reference);
        let estimated = ledger.is_empty();
        let income = if estimated {
            pro_rate(profile.declared_income())
        } else {
            in_period
                .iter()
                .filter(|t| t.is_income())
                .map(|t| t.amount)
                .sum()
        };

        let statutory_reliefs = round_half_up(
            (profile.pension_contribution + profile.nhf_contribution) * months,
        ) + pro_rate(profile.life_insurance);
        let rent_relief = pro_rate(PersonalTaxCalculator::rent_relief(profile.rent_paid).amount);

        let (business_costs, personal_costs) = in_period
            .iter()
            .filter(|t| t.is_expense())
            .fold((Decimal::ZERO, Decimal::ZERO), |(business, personal), t| {
                if t.is_tax_deductible {
                    (business + t.amount, personal)
                } else {
                    (business, personal + t.amount)
                }
            });

        debug!(
            %frame,
            %reference,
            transactions = in_period.len(),
            %income,
            estimated,
            "Period summary built"
        );

        Self {
            frame,
            reference,
            transactions: in_period.len(),
            estimated,
            exemption: ExemptionMonitor::new(pro_rate(PIT_EXEMPTION_THRESHOLD), income),
            deductibility: DeductibilitySplit {
                statutory_reliefs,
                rent_relief,
                tax_savers: statutory_reliefs + rent_relief,
                business_costs,
                personal_costs,
            },
            income_by_category: income_by_category(&in_period),
        }
    }
}

fn income_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for t in transactions.iter().filter(|t| t.is_income()) {
        let category = match t.category.trim() {
            "" => UNCATEGORIZED,
            name => name,
        };
        match totals.iter_mut().find(|c| c.category == category) {
            Some(total) => total.amount += t.amount,
            None => totals.push(CategoryTotal {
                category: category.to_string(),
                amount: t.amount,
            }),
        }
    }
    totals
}
