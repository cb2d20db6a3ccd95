use std::path::PathBuf;

use thiserror::Error;

pub mod backend;
pub mod collect;
pub mod config;
pub mod extractor;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend, PdfDocument};
pub use collect::{CollectedText, PAGE_SEPARATOR};
pub use config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, ExtractConfig};
pub use extractor::{ExtractedText, ExtractionSummary, TextExtractor, write_output};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extract the text of `config.input_path` with `backend` and write it to
/// `config.output_path`.
pub fn extract_to_file(
    config: &ExtractConfig,
    backend: &dyn PdfBackend,
) -> Result<ExtractionSummary, ExtractError> {
    TextExtractor::with_config(config.clone()).run(backend)
}
