//! Turns transaction-section rows into [`Transaction`] records.
//!
//! A malformed row is logged and skipped; it never stops the rows after it.

use chrono::NaiveDate;
use kaspi_core::{RowError, Transaction};

use crate::amount::AmountParser;
use crate::types::{RawRow, Row};

/// Statement dates are day-first with a two-digit year
const DATE_FORMAT: &str = "%d.%m.%y";

/// Parse one `(date, amount, operation, details)` row. The operation type is not kept.
pub fn parse_row(row: &[String], amounts: &AmountParser) -> Result<Transaction, RowError> {
    let raw = RawRow::try_from(row)?;
    let date = NaiveDate::parse_from_str(raw.date.trim(), DATE_FORMAT).map_err(|source| {
        RowError::Date {
            raw: raw.date.clone(),
            source,
        }
    })?;
    let amount = amounts.parse(&raw.amount)?;
    Ok(Transaction::new(date, raw.details, amount))
}

/// Lazy adapter from rows to transactions that skips and counts failures.
pub struct TransactionBuilder<'p, I> {
    rows: I,
    amounts: &'p AmountParser,
    skipped: usize,
}

impl<'p, I> TransactionBuilder<'p, I>
where
    I: Iterator<Item = Row>,
{
    pub fn new(rows: impl IntoIterator<IntoIter = I>, amounts: &'p AmountParser) -> Self {
        Self {
            rows: rows.into_iter(),
            amounts,
            skipped: 0,
        }
    }

    /// Rows dropped so far because they could not be parsed
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<I> Iterator for TransactionBuilder<'_, I>
where
    I: Iterator<Item = Row>,
{
    type Item = Transaction;

    fn next(&mut self) -> Option<Transaction> {
        for row in self.rows.by_ref() {
            match parse_row(&row, self.amounts) {
                Ok(txn) => {
                    log::info!("\t{txn}");
                    return Some(txn);
                }
                Err(e) => {
                    self.skipped += 1;
                    log::error!("Failed to parse transaction {row:?}, Reason: {e}");
                }
            }
        }
        None
    }
}
