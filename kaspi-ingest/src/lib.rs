//! kaspi-ingest: statement table extraction and transaction parsing.
//!
//! Pipeline: [`TableSource`] pages -> [`TableStream`] (header discovery and
//! continuation tables) -> [`TransactionBuilder`] (per-row parsing with
//! [`AmountParser`]) -> [`parse_statement`] (totals and failure containment).

pub mod amount;
pub mod builder;
pub mod header;
pub mod layout;
pub mod pdf;
pub mod statement;
pub mod tables;
pub mod types;

pub use amount::{AmountParser, DEFAULT_CURRENCY};
pub use builder::{TransactionBuilder, parse_row};
pub use header::{HEADER_SIGNATURES, HeaderLocale, match_header};
pub use pdf::PdfStatement;
pub use statement::{StatementReport, parse_statement, parse_statement_file};
pub use tables::TableStream;
pub use types::{RawRow, Row, Table, TableSource};
