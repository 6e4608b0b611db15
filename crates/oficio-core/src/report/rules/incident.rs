//! Incident start date/time ("Data/Hora do Fato Início") extraction.

use super::patterns::INCIDENT_DATE_TIME;
use super::{ExtractionMatch, FieldExtractor};

/// Incident date/time field extractor.
///
/// The value is kept exactly as printed; the date is not checked against
/// the calendar.
pub struct IncidentExtractor;

impl IncidentExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IncidentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for IncidentExtractor {
    type Output = ExtractionMatch<String>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        INCIDENT_DATE_TIME
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                Some(
                    ExtractionMatch::new(caps[1].to_string(), full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// Extract the first incident date/time from text.
pub fn extract_incident_date_time(text: &str) -> Option<String> {
    IncidentExtractor::new().extract(text).map(|m| m.value)
}
