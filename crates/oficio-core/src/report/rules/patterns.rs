//! Regex patterns for police report (Boletim de Ocorrência) fields.
//!
//! These encode the layout of the state police report export. Changing them
//! changes which reports are recognized; keep the tests in sync.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Report number: `Nº: 1234/2025`, `N°`, `No` or `NO`, slash with optional spaces.
    pub static ref REPORT_NUMBER: Regex = Regex::new(
        r"(?i)N[º°oO]:\s*(\d+\s*/\s*\d+)"
    ).unwrap();

    /// Device identifier: `IMEI`, `IMEI 2`, `IMEI:`, `IMEI =` followed by
    /// 15 to 20 digits and spaces.
    pub static ref DEVICE_ID: Regex = Regex::new(
        r"(?i)IMEI\s*[2]?\s*[=:\s-]*\s*([\d\s]{15,20})"
    ).unwrap();

    /// Incident start: `Data/Hora do Fato Início: DD/MM/YYYY HH:MM`.
    pub static ref INCIDENT_DATE_TIME: Regex = Regex::new(
        r"(?i)Data/Hora\s*do\s*Fato\s*In[íi]cio\s*:\s*(\d{2}/\d{2}/\d{4}\s*\d{2}:\d{2})"
    ).unwrap();

    /// Any whitespace run.
    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_number_labels() {
        for text in ["Nº: 1/2025", "N°: 1/2025", "No: 1/2025", "NO: 1/2025", "nº: 1/2025"] {
            assert!(REPORT_NUMBER.is_match(text), "{text}");
        }
        // Colon is mandatory
        assert!(!REPORT_NUMBER.is_match("Nº 1/2025"));
        assert!(!REPORT_NUMBER.is_match("Nº: 12345"));
    }

    #[test]
    fn test_report_number_tolerates_spaces() {
        let caps = REPORT_NUMBER.captures("N°:   4521 / 2025").unwrap();
        assert_eq!(&caps[1], "4521 / 2025");
    }

    #[test]
    fn test_device_id_labels() {
        let caps = DEVICE_ID.captures("IMEI: 356938035643809").unwrap();
        assert_eq!(&caps[1], "356938035643809");

        let caps = DEVICE_ID.captures("imei 2 = 356938035643809").unwrap();
        assert_eq!(&caps[1], "356938035643809");

        let caps = DEVICE_ID.captures("IMEI - 35693 80356 43809").unwrap();
        assert_eq!(&caps[1], "35693 80356 43809");
    }

    #[test]
    fn test_device_id_run_is_capped_at_twenty_chars() {
        let caps = DEVICE_ID.captures("IMEI: 1234567890123456789012").unwrap();
        assert_eq!(caps[1].len(), 20);
    }

    #[test]
    fn test_device_id_requires_fifteen_chars() {
        assert!(!DEVICE_ID.is_match("IMEI:12345678901234"));

        // The separator space counts toward the run length
        let caps = DEVICE_ID.captures("IMEI: 12345678901234").unwrap();
        assert_eq!(&caps[1], " 12345678901234");
    }

    #[test]
    fn test_incident_date_time() {
        let caps = INCIDENT_DATE_TIME
            .captures("Data/Hora do Fato Início: 01/01/2025 10:00")
            .unwrap();
        assert_eq!(&caps[1], "01/01/2025 10:00");

        assert!(INCIDENT_DATE_TIME.is_match("DATA/HORA DO FATO INICIO:01/01/2025 10:00"));
        assert!(!INCIDENT_DATE_TIME.is_match("Data/Hora do Fato Fim: 01/01/2025 10:00"));
        assert!(!INCIDENT_DATE_TIME.is_match("Data/Hora do Fato Início: 1/1/2025 10:00"));
    }
}
