use anyhow::{Context, Result};
use lopdf::Document;
use std::path::Path;
use tracing::{debug, info, warn};

/// Extract text from every page of a PDF, in page order.
///
/// Per-page text is joined with a single newline and the whole result is
/// trimmed. Pages that yield no extractable text (scanned images, undecodable
/// fonts) contribute nothing — not even an empty line — and never fail the
/// extraction as a whole. An unreadable file (missing, corrupt, encrypted)
/// returns `Err` so callers can distinguish it from a genuinely empty
/// document, which returns `Ok` with an empty string.
pub fn extract_text(path: &Path) -> Result<String> {
    info!("Extracting text from PDF: {}", path.display());

    let document = Document::load(path)
        .with_context(|| format!("Failed to open PDF: {}", path.display()))?;

    if document.is_encrypted() {
        anyhow::bail!("PDF is encrypted and cannot be read: {}", path.display());
    }

    let pages = document.get_pages();
    let mut page_texts: Vec<String> = Vec::with_capacity(pages.len());

    // get_pages returns a BTreeMap keyed by 1-based page number, so iteration
    // order is page order
    for &page_number in pages.keys() {
        match document.extract_text(&[page_number]) {
            Ok(text) if !text.trim().is_empty() => page_texts.push(text.trim().to_string()),
            Ok(_) => debug!("Page {page_number} has no extractable text"),
            Err(e) => warn!("Skipping page {page_number}: {e}"),
        }
    }

    let combined = page_texts.join("\n");
    info!(
        pages = pages.len(),
        pages_with_text = page_texts.len(),
        bytes = combined.len(),
        "PDF extraction complete"
    );
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_error() {
        let result = extract_text(Path::new("/nonexistent/missing.pdf"));
        assert!(result.is_err(), "Missing file should be a hard error");
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("garbage.pdf");
        std::fs::write(&path, b"this is not a pdf at all").expect("Failed to write file");

        let result = extract_text(&path);
        assert!(result.is_err(), "Corrupt file should be a hard error");
        let message = format!("{:#}", result.unwrap_err());
        assert!(
            message.contains("garbage.pdf"),
            "Error should name the file: {message}"
        );
    }
}
