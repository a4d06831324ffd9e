//! PDF-backed [`TableSource`] using `pdf-extract` for per-page text.

use std::path::{Path, PathBuf};

use kaspi_core::DocumentError;

use crate::layout::tables_from_text;
use crate::types::{Table, TableSource};

/// A statement PDF whose page text has been extracted.
#[derive(Debug, Clone)]
pub struct PdfStatement {
    path: PathBuf,
    pages: Vec<String>,
}

impl PdfStatement {
    /// Load `path` and extract the text of every page.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref().to_path_buf();
        let open_error = |reason: String| DocumentError::Open {
            path: path.clone(),
            reason,
        };

        // pdf-extract panics on some malformed content streams
        let extracted = std::panic::catch_unwind(|| pdf_extract::extract_text_by_pages(&path))
            .map_err(|_| open_error("text extraction panicked".to_string()))?;
        let pages = extracted.map_err(|e| open_error(e.to_string()))?;

        Ok(Self { path, pages })
    }

    /// Build from already extracted page text.
    pub fn from_page_text(path: impl Into<PathBuf>, pages: Vec<String>) -> Self {
        Self {
            path: path.into(),
            pages,
        }
    }
}

impl TableSource for PdfStatement {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_tables(&self, index: usize) -> Result<Vec<Table>, DocumentError> {
        let text = self.pages.get(index).ok_or_else(|| DocumentError::Page {
            page: index + 1,
            reason: format!("{} has {} pages", self.path.display(), self.pages.len()),
        })?;
        Ok(tables_from_text(text))
    }
}
