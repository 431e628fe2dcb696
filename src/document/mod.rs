//! Text extraction from study documents
//!
//! PDFs go through `pdf-extract`; every other file is read as UTF-8 text.

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("PDF support is not enabled in this build")]
    PdfSupportDisabled,
}

pub type Result<T> = std::result::Result<T, DocumentError>;

/// Extract the text of every page of a PDF.
///
/// The extractor separates pages with form feeds; pages are joined back
/// with a newline.
#[cfg(feature = "pdf")]
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    // The extractor panics on some malformed files
    let extracted = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| DocumentError::Pdf("parser panicked".to_string()))?
        .map_err(|e| DocumentError::Pdf(e.to_string()))?;

    Ok(extracted
        .split('\x0C')
        .map(|page| page.trim_end_matches('\n'))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(not(feature = "pdf"))]
pub fn extract_pdf_text(_bytes: &[u8]) -> Result<String> {
    Err(DocumentError::PdfSupportDisabled)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Read the text of one file, dispatching on its extension
pub fn extract_file(path: &Path) -> Result<String> {
    if !is_pdf(path) {
        return Ok(fs::read_to_string(path)?);
    }

    let bytes = fs::read(path)?;
    extract_pdf_text(&bytes)
}

/// Concatenate the text of all readable files.
///
/// Each file contributes `"\n" + text`. Files that fail to extract are
/// skipped with a warning.
pub fn collect_text<P: AsRef<Path>>(paths: &[P]) -> String {
    let mut all_text = String::new();
    for path in paths {
        let path = path.as_ref();
        match extract_file(path) {
            Ok(text) => {
                log::debug!("Extracted {} chars from {}", text.len(), path.display());
                all_text.push('\n');
                all_text.push_str(&text);
            }
            Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
        }
    }
    all_text
}
