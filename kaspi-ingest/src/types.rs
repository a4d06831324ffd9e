use kaspi_core::{DocumentError, RowError};

/// One extracted table row: cell strings in column order
pub type Row = Vec<String>;

/// One extracted table: rows in extraction order
pub type Table = Vec<Row>;

/// Page-by-page access to the tables of a statement document.
///
/// Implementations own the layout work; the pipeline only asks for pages in order.
pub trait TableSource {
    fn page_count(&self) -> usize;

    /// Tables on the page at `index` (0-based), in extraction order.
    fn page_tables(&self, index: usize) -> Result<Vec<Table>, DocumentError>;
}

/// Pages whose tables were already extracted.
impl TableSource for Vec<Vec<Table>> {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_tables(&self, index: usize) -> Result<Vec<Table>, DocumentError> {
        self.get(index).cloned().ok_or_else(|| DocumentError::Page {
            page: index + 1,
            reason: format!("document has {} pages", self.len()),
        })
    }
}

/// A transaction-section row split into its four cells, not yet interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub date: String,
    pub amount: String,
    pub operation: String,
    pub details: String,
}

impl TryFrom<&[String]> for RawRow {
    type Error = RowError;

    fn try_from(row: &[String]) -> Result<Self, Self::Error> {
        match row {
            [date, amount, operation, details] => Ok(Self {
                date: date.clone(),
                amount: amount.clone(),
                operation: operation.clone(),
                details: details.clone(),
            }),
            _ => Err(RowError::Shape(row.len())),
        }
    }
}
