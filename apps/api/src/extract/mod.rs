//! Text extraction from uploaded résumé files.
//!
//! The analysis pipeline only ever sees plain text; this module is the
//! boundary that produces it. PDF parsing is CPU-bound, so callers run
//! [`extract_text`] inside `tokio::task::spawn_blocking`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type for {0:?}: upload a PDF or plain-text resume")]
    UnsupportedFormat(String),
    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),
    #[error("no text could be extracted from the document")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Picks a parser from the filename extension, falling back to the
    /// multipart content type when the extension says nothing.
    pub fn detect(filename: &str, content_type: Option<&str>) -> Result<Self, ExtractError> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => return Ok(Self::Pdf),
            Some("txt") | Some("text") | Some("md") => return Ok(Self::PlainText),
            _ => {}
        }
        match content_type {
            Some("application/pdf") => Ok(Self::Pdf),
            Some(ct) if ct.starts_with("text/") => Ok(Self::PlainText),
            _ => Err(ExtractError::UnsupportedFormat(filename.to_string())),
        }
    }
}

/// Extracts UTF-8 text from `bytes`. Blocking.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|err| ExtractError::Pdf(err.to_string())),
        DocumentKind::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_dispatch_is_case_insensitive() {
        assert_eq!(DocumentKind::detect("resume.PDF", None).unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::detect("resume.txt", None).unwrap(), DocumentKind::PlainText);
        assert_eq!(DocumentKind::detect("notes.md", None).unwrap(), DocumentKind::PlainText);
    }

    #[test]
    fn content_type_breaks_extension_ties() {
        assert_eq!(
            DocumentKind::detect("resume", Some("application/pdf")).unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::detect("resume", Some("text/plain")).unwrap(),
            DocumentKind::PlainText
        );
    }

    #[test]
    fn unknown_formats_are_rejected() {
        assert!(DocumentKind::detect("resume.docx", None).is_err());
        assert!(DocumentKind::detect("resume", None).is_err());
        assert!(DocumentKind::detect("archive.zip", Some("application/zip")).is_err());
    }

    #[test]
    fn plain_text_passes_through_lossily() {
        let text = extract_text(DocumentKind::PlainText, b"Python and SQL").unwrap();
        assert_eq!(text, "Python and SQL");

        let mangled = extract_text(DocumentKind::PlainText, &[0xff, b'h', b'i']).unwrap();
        assert!(mangled.contains("hi"), "invalid bytes must not abort extraction");
    }
}
