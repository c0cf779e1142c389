use std::path::Path;

use super::ExtractionError;

/// Extracts the text of every page, concatenated in page order.
pub fn extract(path: &Path) -> Result<String, ExtractionError> {
    pdf_extract::extract_text(path).map_err(|e| ExtractionError::Pdf(format!("{e:?}")))
}
