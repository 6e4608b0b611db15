//! Letter (Ofício) request metadata supplied by the operator.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::record::ExtractedRecord;
use crate::error::ValidationError;

/// Date format used for every operator-facing date.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A search-period boundary entered as `DD/MM/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchDate(NaiveDate);

impl SearchDate {
    /// Parse and validate an operator-supplied date.
    ///
    /// `field` names the input in the error message.
    pub fn parse(field: &str, value: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
        };

        // chrono's %Y also takes short or signed years
        let trimmed = value.trim();
        let year = trimmed.rsplit('/').next().unwrap_or_default();
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(SearchDate)
            .map_err(|_| invalid())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for SearchDate {
    fn from(date: NaiveDate) -> Self {
        SearchDate(date)
    }
}

impl FromStr for SearchDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchDate::parse("date", s)
    }
}

impl fmt::Display for SearchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for SearchDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Everything needed to generate one letter.
#[derive(Debug, Clone, Serialize)]
pub struct LetterRequest {
    /// Letter number, conventionally `NNN/YYYY`.
    pub letter_number: String,

    /// Start of the subscriber data search period.
    pub search_start: SearchDate,

    /// End of the subscriber data search period.
    pub search_end: SearchDate,

    /// Records in upload order.
    pub records: Vec<ExtractedRecord>,
}

impl LetterRequest {
    pub fn new(
        letter_number: impl Into<String>,
        search_start: SearchDate,
        search_end: SearchDate,
        records: Vec<ExtractedRecord>,
    ) -> Self {
        Self {
            letter_number: letter_number.into(),
            search_start,
            search_end,
            records,
        }
    }

    /// Search period text shared by every table row.
    pub fn search_period(&self) -> String {
        format!("{} a {}", self.search_start, self.search_end)
    }

    /// Suggested file name for the generated document.
    pub fn file_name(&self) -> String {
        download_file_name(&self.letter_number)
    }
}

/// `Oficio_<number>.docx`, with `/` in the number replaced by `_`.
pub fn download_file_name(letter_number: &str) -> String {
    format!("Oficio_{}.docx", letter_number.replace('/', "_"))
}
