//! Error types for the oficio-core library.

use thiserror::Error;

/// Main error type for the oficio library.
#[derive(Error, Debug)]
pub enum OficioError {
    /// PDF processing error. Recoverable per file.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Operator input validation error.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Letter assembly error.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to operator-supplied letter metadata.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A date field is not a real `DD/MM/YYYY` calendar date.
    #[error("invalid date for {field}: {value:?} (use DD/MM/AAAA)")]
    InvalidDate { field: String, value: String },
}

/// Errors raised while assembling the letter document.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Text that cannot be written into the document.
    #[error("invalid text from {origin}: {value:?}")]
    InvalidText { origin: String, value: String },

    /// The DOCX container could not be written.
    #[error("failed to write DOCX: {0}")]
    Docx(String),
}

/// Result type for the oficio library.
pub type Result<T> = std::result::Result<T, OficioError>;
