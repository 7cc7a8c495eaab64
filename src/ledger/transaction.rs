mod deposit;
mod pin_change;
mod withdrawal;

pub use deposit::Deposit;
pub use pin_change::PinChange;
pub use withdrawal::Withdrawal;

use super::Decimal;
use chrono::{Local, NaiveDateTime};
use serde::{Serialize, Serializer};

/// Second-resolution, sortable timestamp form used in records and the log.
pub(super) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serialize Decimal with exactly 2 decimal places
fn serialize_decimal_2dp<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.2}"))
}

/// Serialize a timestamp in the sortable `YYYY-MM-DD HH:MM:SS` form
fn serialize_timestamp<S: Serializer>(
    value: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
}

/// The kind of event a ledger record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionKind {
    /// Seed balance recorded at construction.
    #[serde(rename = "INITIAL DEPOSIT")]
    InitialDeposit,
    /// Credit to the balance.
    #[serde(rename = "DEPOSIT")]
    Deposit,
    /// Debit from the balance.
    #[serde(rename = "WITHDRAWAL")]
    Withdrawal,
    /// PIN replacement; carries amount 0 and no sign.
    #[serde(rename = "PIN CHANGE")]
    PinChange,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::InitialDeposit => "INITIAL DEPOSIT",
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
            TransactionKind::PinChange => "PIN CHANGE",
        }
    }

    /// Sign shown next to the amount: credits `+`, debits `-`, PIN changes none.
    pub fn sign(self) -> Option<char> {
        match self {
            TransactionKind::InitialDeposit | TransactionKind::Deposit => Some('+'),
            TransactionKind::Withdrawal => Some('-'),
            TransactionKind::PinChange => None,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One immutable ledger record.
///
/// Created by the ledger when an operation commits; the timestamp is taken at
/// creation and the balance is the balance after the event.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    #[serde(rename = "Timestamp", serialize_with = "serialize_timestamp")]
    timestamp: NaiveDateTime,
    #[serde(rename = "Transaction Type")]
    kind: TransactionKind,
    #[serde(rename = "Amount", serialize_with = "serialize_decimal_2dp")]
    amount: Decimal,
    #[serde(
        rename = "Balance After Transaction",
        serialize_with = "serialize_decimal_2dp"
    )]
    balance_after: Decimal,
}

impl Transaction {
    pub fn new(
        timestamp: NaiveDateTime,
        kind: TransactionKind,
        amount: Decimal,
        balance_after: Decimal,
    ) -> Self {
        Self {
            timestamp,
            kind,
            amount,
            balance_after,
        }
    }

    /// Record an event happening now (local clock, second resolution).
    pub(super) fn now(kind: TransactionKind, amount: Decimal, balance_after: Decimal) -> Self {
        Self::new(Local::now().naive_local(), kind, amount, balance_after)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Balance immediately after this event.
    pub fn balance_after(&self) -> Decimal {
        self.balance_after
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {:<17} | {}${:.2}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.kind.sign().unwrap_or(' '),
            self.amount
        )
    }
}
