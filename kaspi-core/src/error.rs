//! Error types for statement parsing.
//!
//! Row-level errors ([`AmountError`], [`RowError`]) are reported and skipped by the
//! transaction builder. Document-level errors ([`StatementError`]) end the walk and
//! are contained by the statement aggregator.

use std::path::PathBuf;

/// Failure to interpret an amount cell.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// First line does not look like `<sign> <digits> <currency>`
    #[error("Failed to parse amount: {0:?}")]
    Format(String),

    /// Currency symbol differs from the configured one
    #[error("Unexpected currency: {found}, expected: {expected}")]
    CurrencyMismatch {
        /// Symbol found in the cell
        found: String,
        /// Symbol the parser was configured with
        expected: String,
    },
}

/// Failure to turn one raw row into a transaction.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    /// Row does not have the four date/amount/operation/details cells
    #[error("expected 4 cells, found {0}")]
    Shape(usize),

    /// Date cell is not `DD.MM.YY`
    #[error("Failed to parse date {raw:?}: {source}")]
    Date {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Amount(#[from] AmountError),
}

/// Failure reported by the document extraction backend.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to open {}: {reason}", .path.display())]
    Open { path: PathBuf, reason: String },

    /// Page index is 1-based, as shown to users
    #[error("Failed to read page {page}: {reason}")]
    Page { page: usize, reason: String },
}

/// Document-level failure that stops the walk over a statement.
#[derive(Debug, thiserror::Error)]
pub enum StatementError {
    #[error("Failed to find the transaction table header")]
    HeaderNotFound,

    #[error(transparent)]
    Document(#[from] DocumentError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AmountError::CurrencyMismatch {
            found: "$".to_string(),
            expected: "₸".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected currency: $, expected: ₸");

        let row: RowError = err.into();
        assert!(matches!(row, RowError::Amount(AmountError::CurrencyMismatch { .. })));
        assert_eq!(RowError::Shape(3).to_string(), "expected 4 cells, found 3");
    }

    #[test]
    fn test_document_error_converts() {
        let err: StatementError = DocumentError::Page {
            page: 2,
            reason: "broken stream".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Failed to read page 2: broken stream");
        assert_eq!(
            StatementError::HeaderNotFound.to_string(),
            "Failed to find the transaction table header"
        );
    }
}
