use std::path::Path;

use mupdf::{Document, TextPageFlags};

use pagetext_core::{BackendError, PdfBackend, PdfDocument};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island. It isolates the mupdf dependency
/// (which is AGPL-3.0) so that `pagetext-core` does not transitively
/// depend on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;
        let page_count = document
            .page_count()
            .map_err(|e| BackendError::OpenError(e.to_string()))?;

        Ok(Box::new(MupdfDocument {
            document,
            page_count: usize::try_from(page_count).unwrap_or(0),
        }))
    }
}

/// A document opened by [`MupdfBackend`].
pub struct MupdfDocument {
    document: Document,
    page_count: usize,
}

impl PdfDocument for MupdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_text(&self, index: usize) -> Result<Option<String>, BackendError> {
        let extraction_error = |e: mupdf::Error| BackendError::ExtractionError {
            page: index + 1,
            message: e.to_string(),
        };

        let page_number = i32::try_from(index).map_err(|_| BackendError::ExtractionError {
            page: index + 1,
            message: "page index out of range".into(),
        })?;
        let page = self
            .document
            .load_page(page_number)
            .map_err(extraction_error)?;
        let text_page = page
            .to_text_page(TextPageFlags::empty())
            .map_err(extraction_error)?;

        // Block/line iteration keeps one output line per laid-out text line
        let mut page_text = String::new();
        let mut has_text_layer = false;
        for block in text_page.blocks() {
            for line in block.lines() {
                has_text_layer = true;
                let line_text: String = line
                    .chars()
                    .map(|c| c.char().unwrap_or('\u{FFFD}'))
                    .collect();
                page_text.push_str(&line_text);
                page_text.push('\n');
            }
        }

        Ok(has_text_layer.then_some(page_text))
    }
}
