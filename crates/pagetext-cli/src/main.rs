use anyhow::Context;
use tracing_subscriber::EnvFilter;

use pagetext_core::{ExtractConfig, TextExtractor};
use pagetext_pdf_mupdf::MupdfBackend;

/// Extract the text of `assets/autoCV__3_.pdf` into `resume_text.md`.
///
/// Takes no arguments. Logs go to stderr (`RUST_LOG` controls the level);
/// stdout only ever carries the confirmation line.
fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ExtractConfig::default();
    let extractor = TextExtractor::with_config(config.clone());

    let summary = extractor.run(&MupdfBackend::new()).with_context(|| {
        format!(
            "extracting {} into {}",
            config.input_path().display(),
            config.output_path().display()
        )
    })?;
    tracing::debug!(pages = summary.pages, kept = summary.kept, "done");

    println!("Wrote {}", config.output_display_name());
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
