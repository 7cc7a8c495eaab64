use crate::ledger::{error::LedgerError, Decimal};

/// A validated withdrawal command.
///
/// Withdrawals debit the account. Validation here covers only the amount's
/// shape; whether the balance can cover it is checked by the ledger against
/// the current balance.
#[derive(Debug, Clone, Copy)]
pub struct Withdrawal {
    amount: Decimal,
}

impl Withdrawal {
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl TryFrom<Decimal> for Withdrawal {
    type Error = LedgerError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveWithdrawal { requested: amount });
        }
        if amount.scale() > 2 {
            return Err(LedgerError::TooPrecise { requested: amount });
        }
        Ok(Withdrawal { amount })
    }
}
