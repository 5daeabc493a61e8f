//! PDF text extraction.
//!
//! `pdf-extract` walks every page in document order and concatenates the
//! text layer, which is exactly the behavior the analysis prompt needs.
//! Scanned/image-only PDFs come back (near-)empty rather than erroring;
//! that text still flows to the model unchanged.

use super::ExtractError;

pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PDF: &[u8] = include_bytes!("../../tests/fixtures/sample_cv.pdf");

    #[test]
    fn test_sample_pdf_text_is_extracted() {
        let text = extract_text(SAMPLE_PDF).unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Senior Rust Engineer"));
    }

    #[test]
    fn test_sample_pdf_preserves_page_order() {
        let text = extract_text(SAMPLE_PDF).unwrap();
        let first = text.find("Jane Doe").unwrap();
        let second = text.find("Open source contributor").unwrap();
        assert!(first < second, "page 1 text must precede page 2 text");
    }

    #[test]
    fn test_empty_bytes_fail() {
        assert!(extract_text(&[]).is_err());
    }

    #[test]
    fn test_truncated_pdf_fails() {
        // A valid header followed by garbage must not extract.
        let mut bytes = b"%PDF-1.4\n".to_vec();
        bytes.extend_from_slice(&[0u8; 64]);
        assert!(extract_text(&bytes).is_err());
    }
}
