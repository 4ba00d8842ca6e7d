//! Ingestion of taxpayer profiles and transaction ledgers for the engine.
//!
//! Everything in this crate is data-quality plumbing: it reads files, rejects
//! malformed rows, and hands clean [`ngtax_core`] records to the engine.

pub mod amount;
pub mod ledger;
pub mod period;
pub mod profile;
pub mod summary;

pub use amount::{ParseAmountError, parse_amount};
pub use ledger::{LedgerLoadError, LedgerLoader};
pub use period::{ParseTimeFrameError, TimeFrame, filter_by_period};
pub use profile::{ProfileLoadError, ProfileLoader};
pub use summary::{CategoryTotal, DeductibilitySplit, ExemptionMonitor, PeriodSummary};
