//! PDF text extraction via `pdf-extract`.

use super::ExtractError;

/// Extracts the concatenated page text of a PDF document. Encrypted,
/// scanned-image-only, and corrupt files come back as `ExtractError::Pdf`.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}
