//! Error types for the expense tracker

use crate::models::transaction::TransactionType;
use rust_decimal::Decimal;
use std::io;
use thiserror::Error;

/// A malformed add request. Nothing is stored when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid number of details provided. Expected 5 details separated by commas but got {0}")]
    FieldCount(usize),

    #[error("Invalid amount format '{0}'. Please provide a valid decimal number.")]
    InvalidAmount(String),

    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("Amount {0} is too large. The largest accepted amount is 999999999999.99.")]
    AmountTooLarge(Decimal),

    #[error("Amount {0} has more than two decimal places.")]
    TooManyDecimals(Decimal),

    #[error("Invalid transaction type '{0}'. Use 'income' or 'expense'.")]
    UnknownType(String),

    #[error("Unknown {transaction_type} category '{category}'")]
    UnknownCategory {
        transaction_type: TransactionType,
        category: String,
    },

    #[error("Invalid date '{0}'. Please use YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Malformed input: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Malformed transaction data: {0}")]
    Json(#[from] serde_json::Error),
}

/// CSV import failures. Line numbers are 1-based.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to open file '{path}': {source}")]
    Open { path: String, source: io::Error },

    #[error("CSV parse error on line {line}: {source}")]
    Csv { line: usize, source: csv::Error },

    #[error("Invalid number of columns on line {line}: expected 5, got {found}")]
    Columns { line: usize, found: usize },

    #[error("Line {line}: {source}")]
    Invalid { line: usize, source: ValidationError },
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}
