//! Résumé text extraction: writes an upload to a per-request temp directory
//! and dispatches to the matching document extractor.
//!
//! Extractor failures never escape this module: they are logged and surface
//! as empty text, which the analyze handler treats as fatal for the request.

pub mod docx;
pub mod pdf;

use std::path::Path;

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("DOCX container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("DOCX XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("DOCX document part exceeds {limit} bytes")]
    TooLarge { limit: u64 },
}

/// Supported upload formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Detects the kind from the last extension of `filename`, ignoring case.
    /// Returns `None` when there is no extension or it is not `pdf` / `docx`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
        }
    }
}

/// A validated upload waiting for extraction.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub kind: DocumentKind,
    pub bytes: Bytes,
}

/// Extracts plain text from an uploaded document.
///
/// Runs on the blocking pool. Any failure, including a panic inside a parser,
/// is logged and yields an empty string.
pub async fn extract_text(document: UploadedDocument) -> String {
    let filename = document.filename.clone();

    match tokio::task::spawn_blocking(move || extract_blocking(&document)).await {
        Ok(Ok(text)) => {
            debug!("Extracted {} chars from {filename}", text.len());
            text
        }
        Ok(Err(e)) => {
            error!("Error extracting text from {filename}: {e}");
            String::new()
        }
        Err(e) => {
            error!("Extraction task for {filename} aborted: {e}");
            String::new()
        }
    }
}

fn extract_blocking(document: &UploadedDocument) -> Result<String, ExtractionError> {
    // Removed when `dir` drops at the end of this call.
    let dir = tempfile::tempdir()?;
    let path = dir
        .path()
        .join(sanitize_filename(&document.filename, document.kind));
    std::fs::write(&path, &document.bytes)?;

    extract_from_path(&path, document.kind)
}

fn extract_from_path(path: &Path, kind: DocumentKind) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::Pdf => pdf::extract(path),
        DocumentKind::Docx => docx::extract(path),
    }
}

/// Reduces a client-supplied filename to a safe basename.
///
/// Directory components are dropped, whitespace becomes `_`, and anything
/// outside `[A-Za-z0-9._-]` is removed. Falls back to `upload.<ext>`.
pub fn sanitize_filename(filename: &str, kind: DocumentKind) -> String {
    let base = filename
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') => Some(c),
            c if c.is_whitespace() => Some('_'),
            _ => None,
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if DocumentKind::from_filename(cleaned) == Some(kind) {
        cleaned.to_string()
    } else {
        format!("upload.{}", kind.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(DocumentKind::from_filename("cv.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename("cv.DOCX"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_filename("cv.final.Pdf"), Some(DocumentKind::Pdf));
    }

    #[test]
    fn test_kind_rejects_other_extensions() {
        assert_eq!(DocumentKind::from_filename("cv.doc"), None);
        assert_eq!(DocumentKind::from_filename("cv.txt"), None);
        assert_eq!(DocumentKind::from_filename("pdf"), None);
        assert_eq!(DocumentKind::from_filename("cv.pdf.exe"), None);
        assert_eq!(DocumentKind::from_filename(""), None);
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(
            sanitize_filename("../../etc/passwd.pdf", DocumentKind::Pdf),
            "passwd.pdf"
        );
        assert_eq!(
            sanitize_filename("C:\\Users\\me\\cv.docx", DocumentKind::Docx),
            "cv.docx"
        );
    }

    #[test]
    fn test_sanitize_replaces_whitespace_and_drops_symbols() {
        assert_eq!(
            sanitize_filename("My Résumé (2024).pdf", DocumentKind::Pdf),
            "My_Rsum_2024.pdf"
        );
    }

    #[test]
    fn test_sanitize_falls_back_when_nothing_usable_remains() {
        assert_eq!(sanitize_filename("...pdf", DocumentKind::Pdf), "upload.pdf");
        assert_eq!(sanitize_filename("é.docx", DocumentKind::Docx), "upload.docx");
    }

    #[tokio::test]
    async fn test_extract_text_returns_empty_for_corrupt_pdf() {
        let document = UploadedDocument {
            filename: "broken.pdf".to_string(),
            kind: DocumentKind::Pdf,
            bytes: Bytes::from_static(b"definitely not a pdf"),
        };
        assert_eq!(extract_text(document).await, "");
    }

    #[tokio::test]
    async fn test_extract_text_reads_docx() {
        let bytes = crate::test_support::docx_fixture(&["Jane Doe", "Rust Engineer"]);
        let document = UploadedDocument {
            filename: "jane.docx".to_string(),
            kind: DocumentKind::Docx,
            bytes: Bytes::from(bytes),
        };
        assert_eq!(extract_text(document).await, "Jane Doe\nRust Engineer\n");
    }
}
