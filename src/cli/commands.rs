use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(
    name = "atm-ledger",
    author,
    version,
    about = "A single-account ATM ledger with PIN gating",
    long_about = None,
    after_help = "SESSION:\n    Every menu action asks for the PIN first.\n    Three wrong answers in a row end the session."
)]
pub struct Args {
    /// Opening balance for the account
    #[arg(long, value_name = "AMOUNT", default_value = "1000.00")]
    pub balance: Decimal,

    /// Initial PIN (at least 4 digits)
    #[arg(long, value_name = "PIN", default_value = "1015")]
    pub pin: String,

    /// Append-only CSV transaction log
    #[arg(
        long,
        value_name = "FILE",
        default_value = "transaction_history.csv",
        help = "Where to append the durable transaction log"
    )]
    pub log_file: PathBuf,

    /// Run without the durable transaction log
    #[arg(long)]
    pub no_log_file: bool,

    /// How many recent transactions to keep in memory
    #[arg(long, value_name = "N", default_value_t = atm_ledger::DEFAULT_HISTORY_CAPACITY)]
    pub recent: usize,
}
