//! CSV loader for transaction ledgers.
//!
//! ## CSV Format
//!
//! Headers are matched by name; column order does not matter.
//!
//! | Column              | Required | Type    | Notes                                        |
//! |---------------------|----------|---------|----------------------------------------------|
//! | `kind`              | yes      | string  | `income` or `expense` (header `type` also accepted) |
//! | `date`              | yes      | date    | `YYYY-MM-DD`                                 |
//! | `amount`            | yes      | decimal | Non-negative; `₦`, `NGN` and `,` tolerated  |
//! | `category`          | no       | string  |                                              |
//! | `description`       | no       | string  |                                              |
//! | `source`            | no       | string  | `manual` (default), `ocr`, `whatsapp`       |
//! | `is_tax_deductible` | no       | bool    | `true/false`, `yes/no`, `1/0`; empty = false |
//! | `has_input_vat`     | no       | bool    | As above                                     |
//!
//! ### Example
//!
//! ```csv
//! kind,date,amount,category,is_tax_deductible,has_input_vat
//! income,2026-01-31,"₦450,000",Salary,,
//! expense,2026-02-03,107.50,Internet/Data,yes,yes
//! ```

use std::path::Path;

use chrono::NaiveDate;
use ngtax_core::{Transaction, TransactionKind, TransactionSource};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::amount::parse_amount;

const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct LedgerRow {
    #[serde(alias = "type")]
    kind: String,
    date: String,
    amount: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    is_tax_deductible: Option<String>,
    #[serde(default)]
    has_input_vat: Option<String>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a ledger.
///
/// Row numbers are 1-based and exclude the header.
#[derive(Debug, thiserror::Error)]
pub enum LedgerLoadError {
    #[error("could not read ledger: {0}")]
    Io(#[from] std::io::Error),

    /// Bad structure, missing required column, etc.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("unrecognised transaction kind '{value}' on row {row}")]
    InvalidKind { value: String, row: usize },

    #[error("invalid amount '{value}' on row {row}")]
    InvalidAmount { value: String, row: usize },

    #[error("negative amount {amount} on row {row}; record refunds as the opposite kind")]
    NegativeAmount { amount: Decimal, row: usize },

    #[error("invalid date '{value}' on row {row}; expected YYYY-MM-DD")]
    InvalidDate { value: String, row: usize },

    #[error("unrecognised source '{value}' on row {row}")]
    InvalidSource { value: String, row: usize },

    #[error("invalid {column} flag '{value}' on row {row}")]
    InvalidFlag {
        column: &'static str,
        value: String,
        row: usize,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Loader for ledger CSV files.
pub struct LedgerLoader;

impl LedgerLoader {
    /// Parses CSV text into transactions, in file order.
    ///
    /// # Errors
    ///
    /// Returns the first [`LedgerLoadError`] encountered; no partial ledger is
    /// returned.
    pub fn load_from_str(input: &str) -> Result<Vec<Transaction>, LedgerLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(input.as_bytes());

        let transactions = reader
            .deserialize::<LedgerRow>()
            .enumerate()
            .map(|(idx, result)| {
                let row = result?;
                Self::convert_row(row, idx + 1)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(rows = transactions.len(), "Ledger loaded");
        Ok(transactions)
    }

    /// Reads a file from disk and delegates to [`LedgerLoader::load_from_str`].
    pub fn load_from_file(path: &Path) -> Result<Vec<Transaction>, LedgerLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    fn convert_row(
        row: LedgerRow,
        row_number: usize,
    ) -> Result<Transaction, LedgerLoadError> {
        let kind = TransactionKind::parse(&row.kind).ok_or_else(|| {
            warn!(row = row_number, value = %row.kind, "Rejected ledger row");
            LedgerLoadError::InvalidKind {
                value: row.kind.clone(),
                row: row_number,
            }
        })?;

        let date = NaiveDate::parse_from_str(row.date.trim(), DATE_FORMAT).map_err(|_| {
            LedgerLoadError::InvalidDate {
                value: row.date.clone(),
                row: row_number,
            }
        })?;

        let amount = parse_amount(&row.amount).map_err(|_| LedgerLoadError::InvalidAmount {
            value: row.amount.clone(),
            row: row_number,
        })?;
        if amount < Decimal::ZERO {
            warn!(row = row_number, amount = %amount, "Rejected negative ledger amount");
            return Err(LedgerLoadError::NegativeAmount {
                amount,
                row: row_number,
            });
        }

        let source = match row.source.as_deref().map(str::trim) {
            None | Some("") => TransactionSource::default(),
            Some(value) => {
                TransactionSource::parse(value).ok_or_else(|| LedgerLoadError::InvalidSource {
                    value: value.to_string(),
                    row: row_number,
                })?
            }
        };

        Ok(Transaction {
            kind,
            date,
            amount,
            category: row.category.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            source,
            is_tax_deductible: parse_flag(
                "is_tax_deductible",
                row.is_tax_deductible.as_deref(),
                row_number,
            )?,
            has_input_vat: parse_flag("has_input_vat", row.has_input_vat.as_deref(), row_number)?,
        })
    }
}

/// Empty or missing cells are `false`.
fn parse_flag(
    column: &'static str,
    value: Option<&str>,
    row: usize,
) -> Result<bool, LedgerLoadError> {
    let Some(value) = value.map(str::trim) else {
        return Ok(false);
    };
    match value.to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Ok(false),
        "true" | "yes" | "y" | "1" => Ok(true),
        _ => Err(LedgerLoadError::InvalidFlag {
            column,
            value: value.to_string(),
            row,
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
