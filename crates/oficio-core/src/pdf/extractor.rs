//! PDF text extraction using lopdf and pdf-extract.

use std::panic;

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone)]
pub struct PdfContent {
    /// Page texts concatenated in page order.
    pub text: String,
    /// Pages with their content.
    pub pages: Vec<PdfPage>,
}

/// Content from a single PDF page.
#[derive(Debug, Clone)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text from this page.
    pub text: String,
}

impl PdfContent {
    /// Number of pages that produced no text at all.
    pub fn empty_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.text.trim().is_empty()).count()
    }
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Extract the text of all pages of the loaded PDF.
    pub fn extract_all(&self) -> Result<PdfContent> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        let pages: Vec<PdfPage> = self
            .extract_page_texts()?
            .into_iter()
            .zip(1u32..)
            .map(|(text, number)| PdfPage { number, text })
            .collect();

        let text: String = pages.iter().map(|p| p.text.as_str()).collect();

        let content = PdfContent { text, pages };
        debug!(
            "PDF analysis: {} pages, {} chars text, {} empty pages",
            content.pages.len(),
            content.text.len(),
            content.empty_pages()
        );

        Ok(content)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract reads the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_page_texts(&self) -> Result<Vec<String>> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        // pdf-extract panics on some malformed font programs
        let raw: &[u8] = &self.raw_data;
        let pages = panic::catch_unwind(move || pdf_extract::extract_text_from_mem_by_pages(raw))
            .map_err(|_| {
                warn!("Text decoder panicked");
                PdfError::TextExtraction("text decoder aborted on malformed content".to_string())
            })?
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        for (i, page) in pages.iter().enumerate() {
            trace!("Page {}: {} chars", i + 1, page.len());
        }

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfExtractor::new();
        let err = extractor.load(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[test]
    fn test_extract_without_document() {
        let extractor = PdfExtractor::new();
        assert!(extractor.extract_page_texts().is_err());
        assert!(extractor.extract_all().is_err());
    }

    #[test]
    fn test_empty_pages_count() {
        let content = PdfContent {
            text: "abc".to_string(),
            pages: vec![
                PdfPage { number: 1, text: "abc".to_string() },
                PdfPage { number: 2, text: String::new() },
            ],
        };
        assert_eq!(content.empty_pages(), 1);
    }
}
