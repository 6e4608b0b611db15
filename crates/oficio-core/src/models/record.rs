//! Police report record extracted from a single PDF.

use std::fmt;

use serde::{Serialize, Serializer};

/// Text shown in place of a field that could not be matched.
pub const NOT_FOUND: &str = "Não encontrado";

/// A single extracted field value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Extracted {
    /// The pattern matched and produced this normalized value.
    Found(String),
    /// The pattern did not match anywhere in the document.
    #[default]
    NotFound,
}

impl Extracted {
    /// Returns true when the field carries a value.
    pub fn is_found(&self) -> bool {
        matches!(self, Extracted::Found(_))
    }

    /// Rendered text; the sentinel for a missing value.
    pub fn as_str(&self) -> &str {
        match self {
            Extracted::Found(value) => value,
            Extracted::NotFound => NOT_FOUND,
        }
    }
}

impl From<Option<String>> for Extracted {
    fn from(value: Option<String>) -> Self {
        value.map_or(Extracted::NotFound, Extracted::Found)
    }
}

impl fmt::Display for Extracted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Extracted {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl PartialEq<&str> for Extracted {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Fields extracted from one police report (Boletim de Ocorrência).
///
/// A record is produced for every readable PDF, even when no pattern
/// matched; missing fields hold [`Extracted::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedRecord {
    /// Report number, whitespace removed (e.g. `123/2025`).
    pub report_number: Extracted,

    /// First device identifier (IMEI), 15 digits.
    pub device_id_1: Extracted,

    /// Second device identifier (IMEI), 15 digits.
    pub device_id_2: Extracted,

    /// Incident start date and time as printed, `DD/MM/YYYY HH:MM`.
    pub incident_date_time: Extracted,

    /// Name of the uploaded file the record came from.
    pub source_file_name: String,
}

impl ExtractedRecord {
    /// Returns true when no pattern matched at all.
    pub fn is_empty(&self) -> bool {
        !self.report_number.is_found()
            && !self.device_id_1.is_found()
            && !self.device_id_2.is_found()
            && !self.incident_date_time.is_found()
    }

    /// Device identifier cell text: first id, then the second on a new line
    /// when one was found.
    pub fn device_ids_text(&self) -> String {
        if self.device_id_2.is_found() {
            format!("{}\n{}", self.device_id_1, self.device_id_2)
        } else {
            self.device_id_1.to_string()
        }
    }
}
