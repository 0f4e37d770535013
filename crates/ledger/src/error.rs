//! The module contains the errors the ledger can throw.
//!
//! All of them are local validation failures except [`Storage`], which wraps
//! snapshot I/O problems. A failing operation never leaves a partial
//! mutation behind.
//!
//! [`Storage`]: LedgerError::Storage
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Expense {0} not found")]
    NotFound(u64),
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
