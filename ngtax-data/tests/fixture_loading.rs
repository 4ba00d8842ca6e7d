//! Integration tests that load the on-disk fixtures and feed them through the
//! engine, covering the read-from-disk path the inline unit tests skip.

use std::path::PathBuf;

use chrono::NaiveDate;
use ngtax_core::{EntityType, PolicyYear, TaxEngine, TransactionKind, TransactionSource};
use ngtax_data::{
    LedgerLoadError, LedgerLoader, PeriodSummary, ProfileLoader, TimeFrame, filter_by_period,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

// =============================================================================
// Ledger
// =============================================================================

#[test]
fn ledger_fixture_loads_every_row() {
    let ledger = LedgerLoader::load_from_file(&fixture("ledger.csv")).expect("fixture should load");

    assert_eq!(ledger.len(), 6);
}

#[test]
fn ledger_fixture_first_row_is_salary_income() {
    let ledger = LedgerLoader::load_from_file(&fixture("ledger.csv")).unwrap();
    let t = &ledger[0];

    assert_eq!(t.kind, TransactionKind::Income);
    assert_eq!(t.amount, dec!(450000));
    assert_eq!(t.date, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
    assert_eq!(t.category, "Salary");
    assert!(!t.is_tax_deductible);
}

#[test]
fn ledger_fixture_vat_expense_flags() {
    let ledger = LedgerLoader::load_from_file(&fixture("ledger.csv")).unwrap();
    let t = &ledger[2];

    assert_eq!(t.kind, TransactionKind::Expense);
    assert_eq!(t.amount, dec!(107.50));
    assert_eq!(t.source, TransactionSource::Ocr);
    assert!(t.is_tax_deductible);
    assert!(t.has_input_vat);
}

#[test]
fn missing_ledger_file_is_an_io_error() {
    let err = LedgerLoader::load_from_file(&fixture("does_not_exist.csv")).unwrap_err();

    assert!(matches!(err, LedgerLoadError::Io(_)));
}

// =============================================================================
// Profiles
// =============================================================================

#[test]
fn individual_profile_fixture_loads() {
    let profile = ProfileLoader::load_from_file(&fixture("profile_individual.toml")).unwrap();

    assert_eq!(profile.entity_type, EntityType::Individual);
    assert_eq!(profile.annual_gross_income, dec!(5000000));
    assert_eq!(profile.rent_paid, dec!(1200000));
    assert_eq!(profile.preferred_policy, PolicyYear::Act2026Proposed);
}

#[test]
fn company_profile_fixture_loads() {
    let profile = ProfileLoader::load_from_file(&fixture("profile_company.toml")).unwrap();

    assert_eq!(profile.entity_type, EntityType::Company);
    assert_eq!(profile.annual_turnover, dec!(40000000));
    assert_eq!(profile.preferred_policy, PolicyYear::Act2024);
}

// =============================================================================
// End to end
// =============================================================================

#[test]
fn individual_fixture_with_empty_ledger_matches_worked_example() {
    let profile = ProfileLoader::load_from_file(&fixture("profile_individual.toml")).unwrap();

    let result = TaxEngine::calculate(&profile, &[], profile.preferred_policy);

    assert_eq!(result.taxable_income, dec!(4460000));
    assert_eq!(result.income_tax_liability, dec!(592800));
}

#[test]
fn first_quarter_summary_of_fixture_ledger() {
    let profile = ProfileLoader::load_from_file(&fixture("profile_individual.toml")).unwrap();
    let ledger = LedgerLoader::load_from_file(&fixture("ledger.csv")).unwrap();
    let as_of = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();

    let summary = PeriodSummary::build(&profile, &ledger, TimeFrame::Quarterly, as_of);

    assert_eq!(summary.transactions, 4);
    assert_eq!(summary.exemption.income, dec!(900000));
    assert_eq!(summary.exemption.excess, dec!(700000));
    assert_eq!(summary.deductibility.business_costs, dec!(107.50));
    assert_eq!(summary.deductibility.personal_costs, dec!(25000));
    // Pension and NHF for three months plus a quarter of the 240k rent relief.
    assert_eq!(summary.deductibility.tax_savers, dec!(135000));
}

#[test]
fn fixture_period_helpers_agree() {
    let ledger = LedgerLoader::load_from_file(&fixture("ledger.csv")).unwrap();
    let as_of = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();

    let year = filter_by_period(&ledger, TimeFrame::Yearly, as_of);

    // The December 2025 equipment purchase falls outside the 2026 tax year.
    assert_eq!(year.len(), 5);
}
