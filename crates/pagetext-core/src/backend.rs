use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text from page {page}: {message}")]
    ExtractionError { page: usize, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors only open documents; page iteration, filtering and joining
/// live in [`crate::TextExtractor`].
pub trait PdfBackend: Send + Sync {
    /// Open the PDF at `path` for reading.
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, BackendError>;
}

/// An opened document: an ordered sequence of pages.
///
/// The underlying file handle is released when the value is dropped.
pub trait PdfDocument {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extract the text of the zero-based page `index`.
    ///
    /// Returns `Ok(None)` when the page has no text layer at all (e.g. a
    /// scanned image). An `Err` aborts the whole run.
    fn page_text(&self, index: usize) -> Result<Option<String>, BackendError>;
}
