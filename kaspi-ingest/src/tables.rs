//! Walks statement pages and yields the transaction table plus its continuations.
//!
//! Tables before the header are account summaries and similar preamble and are
//! dropped silently. Once a header row is seen, the rest of that table and every
//! later table (same page or following pages) belong to the transaction section,
//! since one logical table is split at page breaks.

use kaspi_core::StatementError;

use crate::header::match_header_table;
use crate::types::{Table, TableSource};

/// Lazy, single-pass stream of transaction-section tables.
///
/// Yields `Err(StatementError::HeaderNotFound)` once if the pages run out before a
/// header was seen, and stops after the first document error.
pub struct TableStream<'a, D: TableSource + ?Sized> {
    document: &'a D,
    next_page: usize,
    pending: std::vec::IntoIter<Table>,
    header_found: bool,
    finished: bool,
}

impl<'a, D: TableSource + ?Sized> TableStream<'a, D> {
    pub fn new(document: &'a D) -> Self {
        Self {
            document,
            next_page: 0,
            pending: Vec::new().into_iter(),
            header_found: false,
            finished: false,
        }
    }
}

impl<D: TableSource + ?Sized> Iterator for TableStream<'_, D> {
    type Item = Result<Table, StatementError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            if let Some(table) = self.pending.next() {
                if self.header_found {
                    return Some(Ok(table));
                }
                if let Some(locale) = match_header_table(&table) {
                    log::info!(
                        "Found transaction table header ({:?}) on page {}",
                        locale,
                        self.next_page
                    );
                    self.header_found = true;
                    return Some(Ok(table.into_iter().skip(1).collect()));
                }
                continue;
            }

            if self.next_page >= self.document.page_count() {
                self.finished = true;
                if self.header_found {
                    return None;
                }
                return Some(Err(StatementError::HeaderNotFound));
            }

            let index = self.next_page;
            self.next_page += 1;
            log::info!("Parsing page {}...", index + 1);
            match self.document.page_tables(index) {
                Ok(tables) => self.pending = tables.into_iter(),
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}
