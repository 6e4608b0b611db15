//! Rule-based field extractors for police reports.

pub mod device_id;
pub mod incident;
pub mod patterns;
pub mod report_number;

pub use device_id::{extract_device_ids, normalize_device_id, DeviceIdExtractor, DeviceIds, DEVICE_ID_LEN};
pub use incident::{extract_incident_date_time, IncidentExtractor};
pub use patterns::*;
pub use report_number::{extract_report_number, ReportNumberExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Extract all occurrences of the field, in document order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched field value with its location in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Normalized value.
    pub value: T,
    /// Byte span of the whole match in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
