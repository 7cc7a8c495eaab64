//! Durable, append-only transaction log.
//!
//! The log is a side channel: the ledger treats appends as best-effort and
//! never rolls back in-memory state over a failed write.

use super::error::SinkError;
use super::transaction::Transaction;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// An append-only consumer of transaction records.
pub trait TransactionSink {
    /// Append one record to the log.
    fn append(&mut self, transaction: &Transaction) -> Result<(), SinkError>;
}

/// CSV-backed sink: one header line, then one line per transaction.
///
/// Columns: `Timestamp, Transaction Type, Amount, Balance After Transaction`.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Open (or create) the log at `path` in append mode.
    ///
    /// The header line is written only when the file is new or empty, so
    /// reopening an existing log keeps appending rows under the header it
    /// already has.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let needs_header = file.metadata()?.len() == 0;
        Ok(Self::with_header(file, needs_header))
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap an arbitrary writer. Always starts with the header line.
    pub fn from_writer(writer: W) -> Self {
        Self::with_header(writer, true)
    }

    fn with_header(writer: W, write_header: bool) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(writer);
        Self { writer }
    }
}

impl<W: Write> TransactionSink for CsvSink<W> {
    fn append(&mut self, transaction: &Transaction) -> Result<(), SinkError> {
        self.writer.serialize(transaction)?;
        self.writer.flush()?;
        Ok(())
    }
}
