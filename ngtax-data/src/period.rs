//! Reporting-period selection over a ledger.
//!
//! The engine never looks at dates; callers narrow the ledger to the period
//! they want assessed before handing it over.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use ngtax_core::Transaction;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognised time frame '{0}': expected monthly, quarterly or yearly")]
pub struct ParseTimeFrameError(String);

/// Calendar window relative to a reference date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFrame {
    /// Same calendar month and year as the reference date.
    Monthly,
    /// Same calendar quarter and year.
    Quarterly,
    /// Same calendar year.
    #[default]
    Yearly,
}

impl TimeFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// Number of calendar months the frame spans.
    pub fn months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Yearly => 12,
        }
    }

    /// Whether `date` falls in the same frame as `reference`.
    pub fn contains(
        &self,
        date: NaiveDate,
        reference: NaiveDate,
    ) -> bool {
        if date.year() != reference.year() {
            return false;
        }
        match self {
            Self::Monthly => date.month() == reference.month(),
            Self::Quarterly => date.month0() / 3 == reference.month0() / 3,
            Self::Yearly => true,
        }
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFrame {
    type Err = ParseTimeFrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" => Ok(Self::Monthly),
            "quarterly" | "quarter" => Ok(Self::Quarterly),
            "yearly" | "year" | "annual" => Ok(Self::Yearly),
            _ => Err(ParseTimeFrameError(s.to_string())),
        }
    }
}

/// Returns the transactions dated within `frame` of `reference`, in ledger order.
pub fn filter_by_period(
    transactions: &[Transaction],
    frame: TimeFrame,
    reference: NaiveDate,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| frame.contains(t.date, reference))
        .cloned()
        .collect()
}
