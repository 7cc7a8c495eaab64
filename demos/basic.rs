//! Basic example of using the `AccountLedger`.
//!
//! Run with: `cargo run --example basic`

use atm_ledger::AccountLedger;
use rust_decimal_macros::dec;

fn main() {
    // Initialize logger (optional, but shows what's happening)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut ledger = AccountLedger::new(dec!(1000.00), "1015");

    println!("{}", ledger.deposit(dec!(200.50)).unwrap());
    println!("{}", ledger.withdraw(dec!(300.00)).unwrap());
    if let Err(e) = ledger.withdraw(dec!(5000.00)) {
        println!("{e}");
    }

    let receipt = ledger.change_pin("1015", "9999").unwrap();
    println!("{receipt}");

    println!("\n=== Recent Transactions ===");
    for transaction in ledger.history().iter() {
        println!("{transaction}");
    }
    println!("\nFinal balance: ${:.2}", ledger.balance());
}
