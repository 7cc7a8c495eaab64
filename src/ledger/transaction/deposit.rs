use crate::ledger::{error::LedgerError, Decimal};

/// A validated deposit command.
///
/// Deposits credit the account, increasing the balance. Amounts must be
/// positive and carry at most two decimal places.
#[derive(Debug, Clone, Copy)]
pub struct Deposit {
    amount: Decimal,
}

impl Deposit {
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl TryFrom<Decimal> for Deposit {
    type Error = LedgerError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveDeposit { requested: amount });
        }
        if amount.scale() > 2 {
            return Err(LedgerError::TooPrecise { requested: amount });
        }
        Ok(Deposit { amount })
    }
}
