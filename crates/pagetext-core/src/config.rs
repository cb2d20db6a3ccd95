use std::path::{Path, PathBuf};

/// PDF read on every run.
pub const DEFAULT_INPUT_PATH: &str = "assets/autoCV__3_.pdf";

/// Text file written (and overwritten) on every run.
pub const DEFAULT_OUTPUT_PATH: &str = "resume_text.md";

/// Source and destination of one extraction run.
///
/// The `pagetext` binary always runs with [`ExtractConfig::default`]; other
/// paths are only used to point runs at scratch directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ExtractConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// File-name component of the output path, as shown to the user.
    pub fn output_display_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output_path.display().to_string())
    }
}
