//! Interactive terminal session over the ledger.
//!
//! The session owns all sequencing (PIN gate, menu, prompts); the ledger
//! stays stateless between calls. Generic over reader and writer so tests
//! can drive it with in-memory buffers.

use atm_ledger::AccountLedger;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Wrong PIN answers allowed before the session locks.
const MAX_PIN_ATTEMPTS: u8 = 3;

/// One parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Balance,
    Deposit,
    Withdraw,
    History,
    ChangePin,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Balance),
            "2" => Some(Self::Deposit),
            "3" => Some(Self::Withdraw),
            "4" => Some(Self::History),
            "5" => Some(Self::ChangePin),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Outcome of the PIN gate in front of every action.
enum Gate {
    Granted,
    Denied { remaining: u8 },
    LockedOut,
    EndOfInput,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    pin_attempts: u8,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pin_attempts: 0,
        }
    }

    /// Run the menu loop until exit, lock-out, or end of input.
    pub fn run(&mut self, ledger: &mut AccountLedger) -> io::Result<()> {
        writeln!(self.output, "Welcome to the ATM!")?;
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else { break };
            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Please select an option between 1 and 6.")?;
                continue;
            };
            if choice == MenuChoice::Exit {
                writeln!(self.output, "Goodbye.")?;
                break;
            }
            match self.pin_gate(ledger)? {
                Gate::Granted => {}
                Gate::Denied { remaining } => {
                    writeln!(self.output, "Incorrect PIN. Attempts remaining: {remaining}")?;
                    continue;
                }
                Gate::LockedOut => {
                    writeln!(self.output, "Too many incorrect attempts. Account locked.")?;
                    break;
                }
                Gate::EndOfInput => break,
            }
            match choice {
                MenuChoice::Balance => {
                    writeln!(
                        self.output,
                        "Your current balance is: ${:.2}",
                        ledger.balance()
                    )?;
                }
                MenuChoice::Deposit => self.deposit(ledger)?,
                MenuChoice::Withdraw => self.withdraw(ledger)?,
                MenuChoice::History => self.show_history(ledger)?,
                MenuChoice::ChangePin => self.change_pin(ledger)?,
                MenuChoice::Exit => unreachable!("handled above"),
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "1) Check Balance")?;
        writeln!(self.output, "2) Deposit")?;
        writeln!(self.output, "3) Withdraw")?;
        writeln!(self.output, "4) Transaction History")?;
        writeln!(self.output, "5) Change PIN")?;
        writeln!(self.output, "6) Exit")?;
        self.prompt("Select an option: ")
    }

    /// Ask for the PIN. A correct answer resets the attempt counter.
    fn pin_gate(&mut self, ledger: &AccountLedger) -> io::Result<Gate> {
        self.prompt("Enter PIN: ")?;
        let Some(entered) = self.read_line()? else {
            return Ok(Gate::EndOfInput);
        };
        if ledger.validate_pin(entered.trim()) {
            self.pin_attempts = 0;
            writeln!(self.output, "PIN accepted.")?;
            return Ok(Gate::Granted);
        }
        self.pin_attempts += 1;
        if self.pin_attempts >= MAX_PIN_ATTEMPTS {
            Ok(Gate::LockedOut)
        } else {
            Ok(Gate::Denied {
                remaining: MAX_PIN_ATTEMPTS - self.pin_attempts,
            })
        }
    }

    fn deposit(&mut self, ledger: &mut AccountLedger) -> io::Result<()> {
        self.prompt("Enter amount to deposit: ")?;
        let Some(raw) = self.read_line()? else {
            return Ok(());
        };
        // Parsing stays out here; the ledger only ever sees numbers.
        let Ok(amount) = Decimal::from_str(raw.trim()) else {
            writeln!(self.output, "Invalid amount.")?;
            return Ok(());
        };
        match ledger.deposit(amount) {
            Ok(receipt) => {
                writeln!(self.output, "{receipt}")?;
                writeln!(self.output, "New balance: ${:.2}", receipt.balance())?;
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn withdraw(&mut self, ledger: &mut AccountLedger) -> io::Result<()> {
        self.prompt("Enter amount to withdraw: ")?;
        let Some(raw) = self.read_line()? else {
            return Ok(());
        };
        let Ok(amount) = Decimal::from_str(raw.trim()) else {
            writeln!(self.output, "Invalid amount.")?;
            return Ok(());
        };
        match ledger.withdraw(amount) {
            Ok(receipt) => {
                writeln!(self.output, "{receipt}")?;
                writeln!(self.output, "New balance: ${:.2}", receipt.balance())?;
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn show_history(&mut self, ledger: &AccountLedger) -> io::Result<()> {
        let history = ledger.history();
        if history.is_empty() {
            writeln!(self.output, "No transaction history found.")?;
            return Ok(());
        }
        writeln!(self.output, "--- Transaction History ---")?;
        // Most recent first.
        for transaction in history.iter().rev() {
            writeln!(self.output, "{transaction}")?;
        }
        Ok(())
    }

    fn change_pin(&mut self, ledger: &mut AccountLedger) -> io::Result<()> {
        self.prompt("Enter OLD PIN: ")?;
        let Some(old_pin) = self.read_line()? else {
            return Ok(());
        };
        self.prompt("Enter NEW PIN: ")?;
        let Some(new_pin) = self.read_line()? else {
            return Ok(());
        };
        match ledger.change_pin(old_pin.trim(), new_pin.trim()) {
            Ok(receipt) => writeln!(self.output, "{receipt}")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn run_session(ledger: &mut AccountLedger, input: &str) -> String {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new(input), &mut output);
        session.run(ledger).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_balance_after_pin() {
        let mut ledger = AccountLedger::new(dec!(1000), "1015");
        let output = run_session(&mut ledger, "1\n1015\n6\n");

        assert!(output.contains("PIN accepted."));
        assert!(output.contains("Your current balance is: $1000.00"));
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_three_wrong_pins_lock_the_session() {
        let mut ledger = AccountLedger::new(dec!(1000), "1015");
        let output = run_session(&mut ledger, "1\n0000\n1\n0000\n1\n0000\n1\n1015\n6\n");

        assert!(output.contains("Incorrect PIN. Attempts remaining: 2"));
        assert!(output.contains("Incorrect PIN. Attempts remaining: 1"));
        assert!(output.contains("Too many incorrect attempts. Account locked."));
        // The session ended; the fourth attempt never ran.
        assert!(!output.contains("Your current balance is"));
    }

    #[test]
    fn test_correct_pin_resets_the_attempt_counter() {
        let mut ledger = AccountLedger::new(dec!(1000), "1015");
        let input = "1\n0000\n1\n1015\n1\n0000\n1\n0000\n1\n1015\n6\n";
        let output = run_session(&mut ledger, input);

        assert!(output.contains("Your current balance is: $1000.00"));
        assert!(!output.contains("Account locked."));
    }

    #[test]
    fn test_deposit_flow() {
        let mut ledger = AccountLedger::new(dec!(1000), "1015");
        let output = run_session(&mut ledger, "2\n1015\n200.50\n6\n");

        assert!(output.contains("Successfully deposited $200.50"));
        assert!(output.contains("New balance: $1200.50"));
        assert_eq!(ledger.balance(), dec!(1200.50));
    }

    #[test]
    fn test_malformed_amount_never_reaches_the_ledger() {
        let mut ledger = AccountLedger::new(dec!(1000), "1015");
        let output = run_session(&mut ledger, "2\n1015\nabc\n6\n");

        assert!(output.contains("Invalid amount."));
        assert_eq!(ledger.balance(), dec!(1000));
        assert_eq!(ledger.history().len(), 1);
    }

    #[test]
    fn test_withdraw_rejection_messages() {
        let mut ledger = AccountLedger::new(dec!(100), "1015");
        let output = run_session(&mut ledger, "3\n1015\n5000\n3\n1015\n-5\n6\n");

        assert!(output.contains("Insufficient funds."));
        assert!(output.contains("Withdrawal amount must be positive."));
        assert_eq!(ledger.balance(), dec!(100));
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let mut ledger = AccountLedger::new(dec!(1000), "1015");
        ledger.deposit(dec!(10)).unwrap();
        ledger.withdraw(dec!(5)).unwrap();

        let output = run_session(&mut ledger, "4\n1015\n6\n");
        let history_start = output.find("--- Transaction History ---").unwrap();
        let listing = &output[history_start..];

        let withdrawal_at = listing.find("WITHDRAWAL").unwrap();
        let deposit_at = listing.find("DEPOSIT").unwrap();
        let initial_at = listing.find("INITIAL DEPOSIT").unwrap();
        assert!(withdrawal_at < deposit_at);
        assert!(deposit_at < initial_at);
    }

    #[test]
    fn test_empty_history_message() {
        let mut ledger = AccountLedger::new(dec!(0), "1015");
        let output = run_session(&mut ledger, "4\n1015\n6\n");
        assert!(output.contains("No transaction history found."));
    }

    #[test]
    fn test_change_pin_flow() {
        let mut ledger = AccountLedger::new(dec!(0), "1015");
        let output = run_session(&mut ledger, "5\n1015\n1015\n9999\n6\n");

        assert!(output.contains("PIN changed successfully."));
        assert!(ledger.validate_pin("9999"));
        assert!(!ledger.validate_pin("1015"));
    }

    #[test]
    fn test_change_pin_rejects_bad_format() {
        let mut ledger = AccountLedger::new(dec!(0), "1015");
        let output = run_session(&mut ledger, "5\n1015\n1015\nxy\n6\n");

        assert!(output.contains("Invalid PIN format. Must be at least 4 digits."));
        assert!(ledger.validate_pin("1015"));
    }

    #[test]
    fn test_unknown_option_reprompts() {
        let mut ledger = AccountLedger::new(dec!(0), "1015");
        let output = run_session(&mut ledger, "9\n6\n");
        assert!(output.contains("Please select an option between 1 and 6."));
    }

    #[test]
    fn test_end_of_input_ends_the_session() {
        let mut ledger = AccountLedger::new(dec!(0), "1015");
        let output = run_session(&mut ledger, "1\n");
        assert!(output.contains("Enter PIN: "));
    }
}
