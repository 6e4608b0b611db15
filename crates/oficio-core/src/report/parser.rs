//! Rule-based police report parser.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::models::record::{Extracted, ExtractedRecord};
use crate::pdf::{PdfExtractor, PdfProcessor};

use super::rules::{extract_device_ids, extract_incident_date_time, extract_report_number};
use super::ReportExtractor;

/// Result of parsing one report's text.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Extracted record.
    pub record: ExtractedRecord,
    /// Fields that fell back to the not-found sentinel, and dropped matches.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Police report parser applying the fixed field rules.
#[derive(Debug, Clone, Default)]
pub struct ReportParser;

impl ReportParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse report text into a record.
    pub fn parse(&self, text: &str, file_name: &str) -> ExtractedRecord {
        self.parse_detailed(text, file_name).record
    }

    /// Parse report text, also collecting warnings for missing fields.
    pub fn parse_detailed(&self, text: &str, file_name: &str) -> ParseResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        debug!("Parsing report {} from {} characters of text", file_name, text.len());

        let report_number = extract_report_number(text);
        if report_number.is_none() {
            warnings.push("Could not extract report number".to_string());
        }

        let device_ids = extract_device_ids(text);
        if device_ids.first.is_none() {
            warnings.push("Could not extract IMEI".to_string());
        }
        if device_ids.discarded > 0 {
            warnings.push(format!(
                "Ignored {} IMEI(s) beyond the second",
                device_ids.discarded
            ));
        }

        let incident_date_time = extract_incident_date_time(text);
        if incident_date_time.is_none() {
            warnings.push("Could not extract incident date/time".to_string());
        }

        let record = ExtractedRecord {
            report_number: Extracted::from(report_number),
            device_id_1: Extracted::from(device_ids.first),
            device_id_2: Extracted::from(device_ids.second),
            incident_date_time: Extracted::from(incident_date_time),
            source_file_name: file_name.to_string(),
        };

        for warning in &warnings {
            warn!("{}: {}", file_name, warning);
        }

        ParseResult {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl ReportExtractor for ReportParser {
    fn extract(&self, file_name: &str, data: &[u8]) -> crate::Result<ExtractedRecord> {
        let mut extractor = PdfExtractor::new();
        extractor.load(data)?;

        let content = extractor.extract_all()?;
        if content.empty_pages() == content.pages.len() {
            warn!("{}: no extractable text on any page", file_name);
        }

        let record = self.parse(&content.text, file_name);
        info!("Extracted report {} from {}", record.report_number, file_name);
        Ok(record)
    }

    fn extract_from_text(&self, file_name: &str, text: &str) -> ExtractedRecord {
        self.parse(text, file_name)
    }
}
