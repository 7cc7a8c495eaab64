use super::Decimal;

/// Balance and PIN state for the single account.
///
/// Mutators are `pub(super)` and unchecked: validation and sequencing live in
/// the ledger, which owns the only instance.
#[derive(Debug)]
pub(super) struct Account {
    balance: Decimal,
    pin: String,
}

impl Account {
    pub(super) fn new(balance: Decimal, pin: String) -> Self {
        debug_assert!(
            balance >= Decimal::ZERO,
            "opening balance must be clamped before construction"
        );
        debug_assert!(!pin.is_empty(), "PIN must not be empty");
        Self { balance, pin }
    }

    /// Returns the current balance
    pub(super) fn balance(&self) -> Decimal {
        self.balance
    }

    /// Exact, case-sensitive comparison against the stored PIN.
    pub(super) fn validate_pin(&self, candidate: &str) -> bool {
        self.pin == candidate
    }

    pub(super) fn set_pin(&mut self, pin: String) {
        debug_assert!(!pin.is_empty(), "PIN must not be empty");
        self.pin = pin;
    }

    /// Credit the balance with a deposit amount.
    /// Caller must validate the amount first.
    ///
    /// # Panics (debug only)
    /// Panics if called with a non-positive amount.
    pub(super) fn deposit(&mut self, amount: Decimal) {
        debug_assert!(
            amount > Decimal::ZERO,
            "deposit called with non-positive amount"
        );
        self.balance += amount;
        #[cfg(debug_assertions)]
        self.assert_invariant();
    }

    /// Debit the balance with a withdrawal amount.
    /// Caller must ensure sufficient funds.
    ///
    /// # Panics (debug only)
    /// Panics if the amount exceeds the balance.
    pub(super) fn withdraw(&mut self, amount: Decimal) {
        debug_assert!(
            amount <= self.balance,
            "withdraw called without sufficient funds"
        );
        self.balance -= amount;
        #[cfg(debug_assertions)]
        self.assert_invariant();
    }

    /// Assert the fundamental invariant: the balance never goes negative.
    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        debug_assert!(
            self.balance >= Decimal::ZERO,
            "Invariant violated: balance ({}) < 0",
            self.balance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_account_stores_balance_and_pin() {
        let account = Account::new(dec!(1000), "1015".to_owned());
        assert_eq!(account.balance(), dec!(1000));
        assert!(account.validate_pin("1015"));
    }

    #[test]
    fn test_validate_pin_is_exact() {
        let account = Account::new(dec!(0), "1015".to_owned());
        assert!(!account.validate_pin("1016"));
        assert!(!account.validate_pin(""));
        assert!(!account.validate_pin("1015 "));
        assert!(!account.validate_pin("01015"));
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut account = Account::new(dec!(100), "1015".to_owned());
        account.deposit(dec!(50.25));
        assert_eq!(account.balance(), dec!(150.25));
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut account = Account::new(dec!(100), "1015".to_owned());
        account.withdraw(dec!(40));
        assert_eq!(account.balance(), dec!(60));
    }

    #[test]
    fn test_withdraw_to_zero_keeps_invariant() {
        let mut account = Account::new(dec!(100), "1015".to_owned());
        account.withdraw(dec!(100));
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_set_pin_replaces_the_secret() {
        let mut account = Account::new(dec!(0), "1015".to_owned());
        account.set_pin("9999".to_owned());
        assert!(account.validate_pin("9999"));
        assert!(!account.validate_pin("1015"));
    }
}
