//! Police report field extraction module.

mod parser;
pub mod rules;

pub use parser::{ParseResult, ReportParser};

use crate::models::record::ExtractedRecord;

/// Trait for police report extractors.
pub trait ReportExtractor {
    /// Extract a record from the raw bytes of a PDF file.
    fn extract(&self, file_name: &str, data: &[u8]) -> crate::Result<ExtractedRecord>;

    /// Extract a record from already decoded plain text.
    fn extract_from_text(&self, file_name: &str, text: &str) -> ExtractedRecord;
}

/// Extract a record from PDF bytes with the default rules.
pub fn extract(file_name: &str, data: &[u8]) -> crate::Result<ExtractedRecord> {
    ReportParser::new().extract(file_name, data)
}
