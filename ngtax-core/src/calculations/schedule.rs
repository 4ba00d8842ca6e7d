//! Statutory rates, thresholds and PIT band tables for both regimes.
//!
//! The order and widths of each band table are fixed by statute. A regime
//! change replaces a whole table; individual rates are never patched.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::TaxBand;

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

// =============================================================================
// Legacy regime (Finance Act 2020)
// =============================================================================

/// Fixed floor of the Consolidated Relief Allowance.
pub const CRA_FIXED_AMOUNT: Decimal = dec!(200000);

/// Percentage-of-gross alternative to the fixed floor.
pub const CRA_GROSS_FLOOR_RATE: Decimal = dec!(0.01);

/// Percentage of gross income added on top of the floor.
pub const CRA_GROSS_RATE: Decimal = dec!(0.20);

/// Companies with turnover strictly below this pay no CIT under the legacy rules.
pub const LEGACY_SMALL_COMPANY_TURNOVER_LIMIT: Decimal = dec!(25000000);

pub const LEGACY_PIT_BANDS: [TaxBand; 6] = [
    TaxBand::new(dec!(300000), dec!(0.07)),
    TaxBand::new(dec!(300000), dec!(0.11)),
    TaxBand::new(dec!(500000), dec!(0.15)),
    TaxBand::new(dec!(500000), dec!(0.19)),
    TaxBand::new(dec!(1600000), dec!(0.21)),
    TaxBand::open(dec!(0.24)),
];

// =============================================================================
// 2026 regime (Nigeria Tax Act 2025)
// =============================================================================

pub const RENT_RELIEF_RATE: Decimal = dec!(0.20);
pub const RENT_RELIEF_CAP: Decimal = dec!(500000);

/// Individuals whose gross income is at or below this owe no PIT at all.
pub const PIT_EXEMPTION_THRESHOLD: Decimal = dec!(800000);

/// Companies with turnover at or below this are exempt from CIT and the levy.
pub const SMALL_COMPANY_TURNOVER_LIMIT: Decimal = dec!(50000000);

pub const DEVELOPMENT_LEVY_RATE: Decimal = dec!(0.04);

pub const PROPOSED_2026_PIT_BANDS: [TaxBand; 6] = [
    TaxBand::new(dec!(800000), dec!(0.00)).with_note("Exempt Band"),
    TaxBand::new(dec!(2200000), dec!(0.15)).with_note("Band 2"),
    TaxBand::new(dec!(9000000), dec!(0.18)).with_note("Band 3"),
    TaxBand::new(dec!(13000000), dec!(0.21)).with_note("Band 4"),
    TaxBand::new(dec!(25000000), dec!(0.23)).with_note("Band 5"),
    TaxBand::open(dec!(0.25)).with_note("Top Band"),
];

// =============================================================================
// Shared
// =============================================================================

pub const STANDARD_CIT_RATE: Decimal = dec!(0.30);

/// Standard VAT rate. Ledger amounts flagged with input VAT are VAT-inclusive.
pub const VAT_RATE: Decimal = dec!(0.075);
