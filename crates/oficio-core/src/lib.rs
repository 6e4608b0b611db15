//! Core library for police report extraction and carrier request letters.
//!
//! This crate provides:
//! - PDF text extraction
//! - Police report field extraction (report number, IMEI, incident date/time)
//! - Letter (Ofício) composition and DOCX rendering

pub mod error;
pub mod letter;
pub mod models;
pub mod pdf;
pub mod report;

pub use error::{BuildError, OficioError, PdfError, Result, ValidationError};
pub use letter::{build, LetterBuilder};
pub use models::config::{LetterTemplate, OficioConfig};
pub use models::letter::{download_file_name, LetterRequest, SearchDate};
pub use models::record::{Extracted, ExtractedRecord, NOT_FOUND};
pub use pdf::{PdfContent, PdfExtractor, PdfProcessor};
pub use report::{extract, ReportExtractor, ReportParser};
