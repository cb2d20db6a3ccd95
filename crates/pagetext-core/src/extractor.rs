use std::path::{Path, PathBuf};

use crate::collect::CollectedText;
use crate::config::ExtractConfig;
use crate::{BackendError, ExtractError, PdfBackend, PdfDocument};

/// Joined page text of one document, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub pages: usize,
    pub kept: usize,
}

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Pages in the source document.
    pub pages: usize,
    /// Pages that contributed text to the output.
    pub kept: usize,
    /// Bytes written to the output file.
    pub bytes: usize,
    pub output_path: PathBuf,
}

/// Extract the text of a PDF page by page and write it as one text file.
///
/// Pipeline:
/// 1. Open the input document via the backend
/// 2. Pull each page's text in document order
/// 3. Drop absent or blank pages, trim the rest
/// 4. Join with one blank line between pages
/// 5. Write the result to the output path in a single write
pub struct TextExtractor {
    config: ExtractConfig,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor {
    /// Create an extractor for the fixed input and output paths.
    pub fn new() -> Self {
        Self {
            config: ExtractConfig::default(),
        }
    }

    pub fn with_config(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Collect the non-blank page texts of an opened document (steps 2–3).
    pub fn collect_pages(&self, document: &dyn PdfDocument) -> Result<CollectedText, BackendError> {
        let mut collected = CollectedText::new();

        for index in 0..document.page_count() {
            match document.page_text(index)? {
                None => tracing::debug!(page = index + 1, "page has no text layer"),
                Some(text) => {
                    if !collected.push_page(Some(text.as_str())) {
                        tracing::debug!(page = index + 1, "page text is blank");
                    }
                }
            }
        }

        Ok(collected)
    }

    /// Open the input PDF and return the joined page text (steps 1–4).
    pub fn extract_text(&self, backend: &dyn PdfBackend) -> Result<ExtractedText, ExtractError> {
        let input = self.config.input_path();
        let document = backend.open(input)?;
        let pages = document.page_count();
        tracing::debug!(path = %input.display(), pages, "opened document");

        let collected = self.collect_pages(document.as_ref())?;
        Ok(ExtractedText {
            text: collected.join(),
            pages,
            kept: collected.len(),
        })
    }

    /// Run the full pipeline. Nothing is written unless every page was
    /// extracted successfully.
    pub fn run(&self, backend: &dyn PdfBackend) -> Result<ExtractionSummary, ExtractError> {
        let ExtractedText { text, pages, kept } = self.extract_text(backend)?;
        let output = self.config.output_path();
        write_output(output, &text)?;

        tracing::info!(
            path = %output.display(),
            pages,
            kept,
            bytes = text.len(),
            "wrote extracted text"
        );

        Ok(ExtractionSummary {
            pages,
            kept,
            bytes: text.len(),
            output_path: output.to_path_buf(),
        })
    }
}

/// Create or truncate `path` and write `text` to it as UTF-8 (step 5).
pub fn write_output(path: &Path, text: &str) -> Result<(), ExtractError> {
    std::fs::write(path, text).map_err(|source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    })
}
