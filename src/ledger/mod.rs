//! Account ledger module.
//!
//! This module contains the core account logic including:
//! - `AccountLedger` - balance, PIN, and bounded history with their operations
//! - `Transaction` types - immutable records and validated commands
//! - `TransactionSink` / `CsvSink` - optional append-only durable log
//! - `Error` types - caller-facing operation errors and sink I/O errors

mod account;
mod account_ledger;
mod error;
mod history;
mod sink;
mod transaction;

pub(crate) use rust_decimal::Decimal;

pub use account_ledger::{AccountLedger, LedgerConfig, Receipt, DEFAULT_HISTORY_CAPACITY};
pub use error::{LedgerError, SinkError};
pub use history::History;
pub use sink::{CsvSink, TransactionSink};
pub use transaction::{Transaction, TransactionKind};
