//! Liability calculations for the legacy and 2026 Nigerian regimes.
//!
//! [`TaxEngine`] is the entry point. It aggregates the ledger with
//! [`FinancialAggregator`] and hands the figures to either
//! [`PersonalTaxCalculator`] or [`CorporateTaxCalculator`].

pub mod aggregator;
pub mod bands;
pub mod common;
pub mod corporate;
pub mod engine;
pub mod personal;
pub mod schedule;

pub use aggregator::{FinancialAggregator, Financials};
pub use bands::{BandAssessment, BandSlice, apply_bands};
pub use corporate::CorporateTaxCalculator;
pub use engine::{EngineError, PolicyComparison, TaxEngine};
pub use personal::{PersonalTaxCalculator, RentRelief};
