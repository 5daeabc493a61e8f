//! Text extraction from uploaded CV files.
//!
//! Dispatch is by filename extension only — the upload's declared content
//! type is ignored, matching how candidates actually name their files.
//! Failures are explicit `Err` values; callers never have to sniff the
//! returned text for error markers.

use thiserror::Error;

mod docx;
mod pdf;

/// Supported CV file kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
}

impl FileKind {
    /// Classifies a filename by extension, case-insensitively.
    /// Legacy `.doc` uploads are routed through the DOCX path like the
    /// word-processing libraries downstream expect.
    pub fn from_filename(filename: &str) -> Option<FileKind> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_lowercase();
        match extension.as_str() {
            "pdf" => Some(FileKind::Pdf),
            "doc" | "docx" => Some(FileKind::Docx),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Error reading PDF: {0}")]
    Pdf(String),

    #[error("Error reading DOCX: {0}")]
    Docx(String),
}

/// Extracts the plain text of an uploaded CV.
pub fn extract_text(kind: FileKind, bytes: &[u8]) -> Result<String, ExtractError> {
    match kind {
        FileKind::Pdf => pdf::extract_text(bytes),
        FileKind::Docx => docx::extract_text(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_filename_pdf() {
        assert_eq!(FileKind::from_filename("resume.pdf"), Some(FileKind::Pdf));
    }

    #[test]
    fn test_from_filename_docx_and_doc() {
        assert_eq!(FileKind::from_filename("cv.docx"), Some(FileKind::Docx));
        assert_eq!(FileKind::from_filename("cv.doc"), Some(FileKind::Docx));
    }

    #[test]
    fn test_from_filename_is_case_insensitive() {
        assert_eq!(FileKind::from_filename("Resume.PDF"), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_filename("CV.DocX"), Some(FileKind::Docx));
    }

    #[test]
    fn test_from_filename_unsupported_extension() {
        assert_eq!(FileKind::from_filename("resume.txt"), None);
        assert_eq!(FileKind::from_filename("resume.odt"), None);
    }

    #[test]
    fn test_from_filename_no_extension() {
        assert_eq!(FileKind::from_filename("resume"), None);
        assert_eq!(FileKind::from_filename(""), None);
    }

    #[test]
    fn test_from_filename_uses_last_extension() {
        // "resume.pdf.txt" is a .txt upload, not a PDF.
        assert_eq!(FileKind::from_filename("resume.pdf.txt"), None);
        assert_eq!(FileKind::from_filename("resume.final.pdf"), Some(FileKind::Pdf));
    }

    #[test]
    fn test_extract_text_corrupt_pdf_is_err() {
        let err = extract_text(FileKind::Pdf, b"not a pdf at all").unwrap_err();
        assert!(err.to_string().starts_with("Error reading PDF:"));
    }

    #[test]
    fn test_extract_text_corrupt_docx_is_err() {
        let err = extract_text(FileKind::Docx, b"not a zip archive").unwrap_err();
        assert!(err.to_string().starts_with("Error reading DOCX:"));
    }
}
