mod commands;
mod session;

use anyhow::{Context, Result};
use atm_ledger::{AccountLedger, CsvSink, LedgerConfig, TransactionSink};
use clap::Parser;
use commands::Args;
use session::Session;
use std::io;

fn main() -> Result<()> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Initialize logger with default level of info (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Wire up the durable log; a log that cannot be opened degrades to none
    let sink: Option<Box<dyn TransactionSink>> = if args.no_log_file {
        None
    } else {
        match CsvSink::open(&args.log_file) {
            Ok(sink) => {
                log::info!("Appending transactions to {}", args.log_file.display());
                Some(Box::new(sink))
            }
            Err(e) => {
                log::warn!(
                    "could not open transaction log {}: {e}",
                    args.log_file.display()
                );
                None
            }
        }
    };

    // 2. Build the ledger
    let mut ledger = AccountLedger::with_config(
        args.balance,
        args.pin,
        LedgerConfig {
            history_capacity: args.recent,
            sink,
        },
    );

    // 3. Run the interactive session over stdin/stdout
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run(&mut ledger).context("session I/O failed")?;

    Ok(())
}
