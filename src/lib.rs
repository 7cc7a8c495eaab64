//! # ATM Ledger
//!
//! A single-account ledger with PIN gating, a bounded recent-transaction
//! history, and an optional append-only CSV log.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: amounts are `rust_decimal` values with a
//!   two-decimal display convention
//! - **Validate, then mutate**: every operation checks fully before touching
//!   state; a rejected operation leaves the balance untouched
//! - **Bounded history**: insertion order, oldest records evicted first
//! - **Best-effort durability**: the CSV log is a side channel and can never
//!   fail an operation
//!
//! ## Example
//!
//! ```
//! use atm_ledger::AccountLedger;
//! use rust_decimal_macros::dec;
//!
//! let mut ledger = AccountLedger::new(dec!(1000.00), "1015");
//! let receipt = ledger.deposit(dec!(200.50)).unwrap();
//! assert_eq!(receipt.balance(), dec!(1200.50));
//! assert!(ledger.validate_pin("1015"));
//! ```

pub mod ledger;

pub use ledger::{
    AccountLedger, CsvSink, History, LedgerConfig, LedgerError, Receipt, SinkError, Transaction,
    TransactionKind, TransactionSink, DEFAULT_HISTORY_CAPACITY,
};
