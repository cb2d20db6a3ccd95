//! Runs the `pagetext` binary in a scratch working directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::Result;

/// Minimal one-font PDF with one page per entry (`None` = empty page).
fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            (0..pages.len())
                .map(|i| format!("{} 0 R", 4 + i * 2))
                .collect::<Vec<_>>()
                .join(" "),
            pages.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];
    for (i, text) in pages.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents {} 0 R /Resources << /Font << /F1 3 0 R >> >> >>",
            5 + i * 2
        ));
        let stream = text
            .map(|t| format!("BT /F1 12 Tf 72 720 Td ({t}) Tj ET"))
            .unwrap_or_default();
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::new();
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
    }
    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.into_bytes()
}

fn run_pagetext(cwd: &Path) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_pagetext"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()?)
}

#[test]
fn writes_fixed_output_and_confirms() -> Result<()> {
    // given
    let dir = tempfile::tempdir()?;
    fs::create_dir(dir.path().join("assets"))?;
    fs::write(
        dir.path().join("assets/autoCV__3_.pdf"),
        build_pdf(&[Some("Alpha"), None, Some("Beta")]),
    )?;

    // when
    let output = run_pagetext(dir.path())?;

    // then
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "Wrote resume_text.md\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("resume_text.md"))?,
        "Alpha\n\nBeta"
    );
    Ok(())
}

#[test]
fn second_run_is_byte_identical() -> Result<()> {
    let dir = tempfile::tempdir()?;
    fs::create_dir(dir.path().join("assets"))?;
    fs::write(
        dir.path().join("assets/autoCV__3_.pdf"),
        build_pdf(&[Some("Experience"), Some("Education")]),
    )?;

    assert!(run_pagetext(dir.path())?.status.success());
    let first = fs::read(dir.path().join("resume_text.md"))?;
    assert!(run_pagetext(dir.path())?.status.success());
    let second = fs::read(dir.path().join("resume_text.md"))?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn missing_input_fails_without_output() -> Result<()> {
    // given
    let dir = tempfile::tempdir()?;

    // when
    let output = run_pagetext(dir.path())?;

    // then
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("resume_text.md").exists());
    Ok(())
}
