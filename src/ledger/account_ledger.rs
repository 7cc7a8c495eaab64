use super::account::Account;
use super::error::LedgerError;
use super::history::History;
use super::sink::TransactionSink;
use super::transaction::{Deposit, PinChange, Transaction, TransactionKind, Withdrawal};
use super::Decimal;

/// Default cap on the in-memory recent-transaction history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Construction-time configuration for the ledger.
///
/// The history cap and the durable log are injected here instead of living as
/// compile-time constants, so embedders and tests can substitute their own.
pub struct LedgerConfig {
    /// Cap on retained recent transactions.
    pub history_capacity: usize,
    /// Optional durable log; appends are best-effort.
    pub sink: Option<Box<dyn TransactionSink>>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            sink: None,
        }
    }
}

/// The single-account ledger: balance, PIN, and bounded recent history.
///
/// Every mutating operation validates fully before touching state; a rejected
/// operation leaves the account exactly as it was. One history record is
/// appended per successful balance-affecting operation. The optional sink
/// receives every record (PIN changes included) but its failures never fail
/// an operation.
///
/// Operations take `&mut self` and complete synchronously; embedders that
/// share a ledger across threads must serialize access externally.
pub struct AccountLedger {
    account: Account,
    history: History,
    sink: Option<Box<dyn TransactionSink>>,
}

impl AccountLedger {
    /// Create a ledger with the default history capacity and no durable log.
    ///
    /// A negative opening balance is clamped to zero. A positive opening
    /// balance is recorded as an initial deposit, so the history reflects
    /// every balance change since creation.
    pub fn new(initial_balance: Decimal, pin: impl Into<String>) -> Self {
        Self::with_config(initial_balance, pin, LedgerConfig::default())
    }

    /// Create a ledger with explicit configuration.
    pub fn with_config(
        initial_balance: Decimal,
        pin: impl Into<String>,
        config: LedgerConfig,
    ) -> Self {
        let opening = initial_balance.max(Decimal::ZERO);
        let mut ledger = Self {
            account: Account::new(opening, pin.into()),
            history: History::new(config.history_capacity),
            sink: config.sink,
        };
        if opening > Decimal::ZERO {
            ledger.record(TransactionKind::InitialDeposit, opening);
            log::debug!("[open] recorded initial deposit of {opening}");
        }
        log::trace!("AccountLedger initialized with balance {opening}");
        ledger
    }

    /// Returns the current balance
    pub fn balance(&self) -> Decimal {
        self.account.balance()
    }

    /// Recent transactions, oldest to newest, at most the configured capacity.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Exact, case-sensitive check of `candidate` against the stored PIN.
    /// Empty or wrong input is simply `false`.
    pub fn validate_pin(&self, candidate: &str) -> bool {
        self.account.validate_pin(candidate)
    }

    /// Replace the PIN after verifying the old one.
    ///
    /// The new PIN must be at least four ASCII digits; anything else is
    /// rejected here rather than trusted from the caller. PIN changes are
    /// written to the durable log but not to the in-memory history.
    pub fn change_pin(&mut self, old_pin: &str, new_pin: &str) -> Result<Receipt, LedgerError> {
        if !self.account.validate_pin(old_pin) {
            log::warn!("[change_pin] rejected: old PIN mismatch");
            return Err(LedgerError::PinMismatch);
        }
        let change = PinChange::try_from(new_pin)?;
        self.account.set_pin(change.into_pin());

        let record = Transaction::now(TransactionKind::PinChange, Decimal::ZERO, self.balance());
        self.append_to_sink(&record);

        log::debug!("[change_pin] PIN replaced");
        Ok(Receipt {
            kind: TransactionKind::PinChange,
            amount: Decimal::ZERO,
            balance: self.balance(),
        })
    }

    /// Credit the account.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Receipt, LedgerError> {
        let deposit = Deposit::try_from(amount)?;

        self.account.deposit(deposit.amount());
        self.record(TransactionKind::Deposit, deposit.amount());

        log::debug!(
            "[deposit] amount={} -> new_balance={}",
            deposit.amount(),
            self.balance()
        );
        Ok(Receipt {
            kind: TransactionKind::Deposit,
            amount: deposit.amount(),
            balance: self.balance(),
        })
    }

    /// Debit the account.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Receipt, LedgerError> {
        let withdrawal = Withdrawal::try_from(amount)?;

        let available = self.account.balance();
        if withdrawal.amount() > available {
            log::warn!(
                "[withdraw] rejected: requested {} exceeds balance {}",
                withdrawal.amount(),
                available
            );
            return Err(LedgerError::InsufficientFunds {
                available,
                requested: withdrawal.amount(),
            });
        }

        self.account.withdraw(withdrawal.amount());
        self.record(TransactionKind::Withdrawal, withdrawal.amount());

        log::debug!(
            "[withdraw] amount={} -> new_balance={}",
            withdrawal.amount(),
            self.balance()
        );
        Ok(Receipt {
            kind: TransactionKind::Withdrawal,
            amount: withdrawal.amount(),
            balance: self.balance(),
        })
    }

    /// Append one record for a balance-affecting event.
    fn record(&mut self, kind: TransactionKind, amount: Decimal) {
        let record = Transaction::now(kind, amount, self.account.balance());
        self.append_to_sink(&record);
        self.history.push(record);
    }

    /// Best-effort append; failures are logged and swallowed.
    fn append_to_sink(&mut self, record: &Transaction) {
        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.append(record) {
                log::warn!("transaction log append failed: {e}");
            }
        }
    }
}

/// Outcome of a successful ledger operation.
///
/// Carries the balance after the operation; `Display` renders the
/// account-holder facing success message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    kind: TransactionKind,
    amount: Decimal,
    balance: Decimal,
}

impl Receipt {
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Balance after the operation.
    pub fn balance(&self) -> Decimal {
        self.balance
    }
}

impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TransactionKind::InitialDeposit | TransactionKind::Deposit => {
                write!(f, "Successfully deposited ${:.2}", self.amount)
            }
            TransactionKind::Withdrawal => write!(f, "Successfully withdrew ${:.2}", self.amount),
            TransactionKind::PinChange => write!(f, "PIN changed successfully."),
        }
    }
}
