use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

/// Where a ledger entry came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionSource {
    #[default]
    Manual,
    Ocr,
    Whatsapp,
}

impl TransactionSource {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Some(Self::Manual),
            "ocr" => Some(Self::Ocr),
            "whatsapp" => Some(Self::Whatsapp),
            _ => None,
        }
    }
}

/// A single ledger entry. Amounts are non-negative; the kind carries the sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: TransactionSource,

    /// Passes the WREN test (wholly, reasonably, exclusively, necessarily).
    #[serde(default)]
    pub is_tax_deductible: bool,

    /// Amount is VAT-inclusive and the VAT can be reclaimed.
    #[serde(default)]
    pub has_input_vat: bool,
}

impl Transaction {
    pub fn income(
        amount: Decimal,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self::new(TransactionKind::Income, amount, date, category)
    }

    pub fn expense(
        amount: Decimal,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self::new(TransactionKind::Expense, amount, date, category)
    }

    fn new(
        kind: TransactionKind,
        amount: Decimal,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            date,
            amount,
            category: category.into(),
            description: String::new(),
            source: TransactionSource::Manual,
            is_tax_deductible: false,
            has_input_vat: false,
        }
    }

    pub fn deductible(mut self) -> Self {
        self.is_tax_deductible = true;
        self
    }

    pub fn with_input_vat(mut self) -> Self {
        self.has_input_vat = true;
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}
