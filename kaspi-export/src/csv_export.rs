//! Write transactions as a budgeting-tool friendly CSV.
//!
//! Output columns: Date,Payee,Memo,Amount. Every field is quoted, dates are
//! ISO formatted and amounts are rounded to whole currency units.

use anyhow::{Context, Result};
use kaspi_core::Transaction;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One output row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Payee")]
    pub payee: String,
    #[serde(rename = "Memo")]
    pub memo: String,
    #[serde(rename = "Amount")]
    pub amount: i64,
}

impl From<&Transaction> for ExportRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date.format("%Y-%m-%d").to_string(),
            payee: txn.payee.clone(),
            memo: txn.memo.clone(),
            // Half-way values round away from zero: 1000.5 -> 1001
            amount: txn.amount.round() as i64,
        }
    }
}

/// Statement path with its extension replaced by `.csv`
pub fn default_output_path(statement: impl AsRef<Path>) -> PathBuf {
    statement.as_ref().with_extension("csv")
}

/// Write the header and one record per transaction, in order.
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    if transactions.is_empty() {
        wtr.write_record(["Date", "Payee", "Memo", "Amount"])?;
    }
    for txn in transactions {
        wtr.serialize(ExportRecord::from(txn))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the transactions to it.
pub fn export_csv(transactions: &[Transaction], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_csv(transactions, file).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Transactions exported to \"{}\"", path.display());
    Ok(())
}
