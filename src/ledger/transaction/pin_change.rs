use crate::ledger::error::LedgerError;

/// Minimum number of digits in a PIN.
pub(crate) const MIN_PIN_DIGITS: usize = 4;

/// A validated PIN replacement command.
///
/// The replacement must be at least four ASCII digits. The old-PIN check is
/// the ledger's job; this type only vouches for the new PIN's shape.
#[derive(Debug, Clone)]
pub struct PinChange {
    new_pin: String,
}

impl PinChange {
    pub(crate) fn into_pin(self) -> String {
        self.new_pin
    }
}

impl TryFrom<&str> for PinChange {
    type Error = LedgerError;

    fn try_from(new_pin: &str) -> Result<Self, Self::Error> {
        if is_valid_pin(new_pin) {
            Ok(PinChange {
                new_pin: new_pin.to_owned(),
            })
        } else {
            Err(LedgerError::InvalidPinFormat)
        }
    }
}

/// Returns true for PINs of at least four ASCII digits.
pub(crate) fn is_valid_pin(pin: &str) -> bool {
    pin.len() >= MIN_PIN_DIGITS && pin.chars().all(|c| c.is_ascii_digit())
}
