//! Statement-level entry points.
//!
//! This is the one boundary where document-level failures (no header, unreadable
//! pages, unopenable files) are turned into a partial [`StatementReport`] instead
//! of an error. Callers always get the transactions gathered so far.

use std::path::Path;

use kaspi_core::{RunTotals, StatementError, Transaction};

use crate::amount::AmountParser;
use crate::builder::TransactionBuilder;
use crate::pdf::PdfStatement;
use crate::tables::TableStream;
use crate::types::TableSource;

/// Outcome of one parsing run.
#[derive(Debug, Default)]
pub struct StatementReport {
    /// Parsed transactions in statement order
    pub transactions: Vec<Transaction>,
    pub totals: RunTotals,
    /// Rows dropped by the transaction builder
    pub skipped_rows: usize,
    /// Document-level failure that ended the run early, if any
    pub failure: Option<StatementError>,
}

impl StatementReport {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    fn push(&mut self, txn: Transaction) {
        self.totals.record(&txn);
        self.transactions.push(txn);
    }

    fn log_totals(&self) {
        log::info!("Total transactions: {}", self.totals.count);
        log::info!("Total change: {:.2}", self.totals.net_change);
        log::info!("Total inflow: {:.2}", self.totals.inflow);
        log::info!("Total outflow: {:.2}", self.totals.outflow);
    }

    fn contain(mut self, result: Result<(), StatementError>) -> Self {
        match result {
            Ok(()) => self.log_totals(),
            Err(e) => {
                log::error!("Parsing error: {e}");
                self.failure = Some(e);
            }
        }
        self
    }
}

/// Parse every transaction out of `document`. Never fails; see [`StatementReport::failure`].
pub fn parse_statement<D>(document: &D, amounts: &AmountParser) -> StatementReport
where
    D: TableSource + ?Sized,
{
    log::info!(
        "Parsing statement (Number of pages: {})...",
        document.page_count()
    );
    let mut report = StatementReport::default();
    let result = collect_transactions(document, amounts, &mut report);
    report.contain(result)
}

/// Open the PDF at `path` and parse it. An unopenable file yields an empty report.
pub fn parse_statement_file(path: impl AsRef<Path>, amounts: &AmountParser) -> StatementReport {
    match PdfStatement::open(path.as_ref()) {
        Ok(document) => parse_statement(&document, amounts),
        Err(e) => StatementReport::default().contain(Err(e.into())),
    }
}

fn collect_transactions<D>(
    document: &D,
    amounts: &AmountParser,
    report: &mut StatementReport,
) -> Result<(), StatementError>
where
    D: TableSource + ?Sized,
{
    let mut failure = None;
    let rows = TableStream::new(document)
        .map_while(|batch| match batch {
            Ok(table) => Some(table),
            Err(e) => {
                failure = Some(e);
                None
            }
        })
        .flatten();

    let mut builder = TransactionBuilder::new(rows, amounts);
    for txn in builder.by_ref() {
        report.push(txn);
    }
    report.skipped_rows = builder.skipped();
    drop(builder);

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
