use crate::ledger::Decimal;

/// Soft (account-holder facing) errors from ledger operations.
/// These never change state; the `Display` strings are the exact messages
/// shown to the account holder.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Deposit amount must be positive.")]
    NonPositiveDeposit { requested: Decimal },

    #[error("Withdrawal amount must be positive.")]
    NonPositiveWithdrawal { requested: Decimal },

    #[error("Amounts use at most two decimal places.")]
    TooPrecise { requested: Decimal },

    #[error("Insufficient funds.")]
    InsufficientFunds {
        available: Decimal,
        requested: Decimal,
    },

    #[error("Incorrect PIN.")]
    PinMismatch,

    #[error("Invalid PIN format. Must be at least 4 digits.")]
    InvalidPinFormat,
}

/// Errors from the durable transaction log.
/// Appends are best-effort: the ledger logs these and keeps going, they are
/// never surfaced through a deposit or withdrawal.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
