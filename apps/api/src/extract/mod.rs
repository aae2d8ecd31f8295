//! Document text extraction: uploaded bytes to plain resume text.
//!
//! The analysis core is format-agnostic; this module owns the two supported
//! input formats and their failure modes. A corrupt document surfaces one
//! user-visible error and the core is never invoked.

mod docx;
mod pdf;

use thiserror::Error;

/// Accepted upload formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Maps a filename to a supported format via its extension,
    /// case-insensitively. Anything else is rejected at the boundary.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        match extension.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Errors raised while turning document bytes into text.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),
    #[error("Failed to extract text from DOCX: {0}")]
    Docx(String),
}

/// Extracts plain text from the uploaded document bytes.
///
/// An empty result is not an error; the analysis of empty text yields an
/// empty, zero-score report.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => pdf::extract_text(bytes),
        DocumentKind::Docx => docx::extract_text(bytes),
    }
}
