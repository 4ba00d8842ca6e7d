//! Tax computation engine for Nigerian personal and company income tax.
//!
//! The engine is a set of pure functions: a [`TaxProfile`] and a ledger of
//! [`Transaction`]s go in, a [`TaxResult`] comes out. Nothing here performs
//! IO or keeps state between calls.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use ngtax_core::{EntityType, PolicyYear, TaxEngine, TaxProfile};
//!
//! let profile = TaxProfile {
//!     entity_type: EntityType::Individual,
//!     annual_gross_income: dec!(5000000),
//!     rent_paid: dec!(1200000),
//!     pension_contribution: dec!(20000),
//!     nhf_contribution: dec!(5000),
//!     ..TaxProfile::default()
//! };
//!
//! let result = TaxEngine::calculate(&profile, &[], PolicyYear::Act2026Proposed);
//!
//! assert_eq!(result.taxable_income, dec!(4460000));
//! assert_eq!(result.income_tax_liability, dec!(592800));
//! ```

pub mod calculations;
pub mod models;

pub use calculations::{
    CorporateTaxCalculator, EngineError, FinancialAggregator, Financials, PersonalTaxCalculator,
    PolicyComparison, TaxEngine,
};
pub use models::*;
