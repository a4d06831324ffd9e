//! kaspi-core: Statement data model and error types shared by the ingest and export crates

pub mod error;
pub mod totals;
pub mod transaction;

pub use error::{AmountError, DocumentError, RowError, StatementError};
pub use totals::RunTotals;
pub use transaction::Transaction;
