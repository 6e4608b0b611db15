//! Report number (Nº do BO) extraction.

use super::patterns::{REPORT_NUMBER, WHITESPACE};
use super::{ExtractionMatch, FieldExtractor};

/// Report number field extractor.
pub struct ReportNumberExtractor;

impl ReportNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReportNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ReportNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        REPORT_NUMBER
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                let number = WHITESPACE.replace_all(&caps[1], "").into_owned();
                Some(
                    ExtractionMatch::new(number, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// Extract the first report number from text, whitespace removed.
pub fn extract_report_number(text: &str) -> Option<String> {
    ReportNumberExtractor::new().extract(text).map(|m| m.value)
}
