//! Device identifier (IMEI) extraction.
//!
//! Every labeled run of 15 to 20 digits and spaces is collected. Runs with
//! fewer than 15 digits are dropped and longer ones keep their first 15
//! digits. No check digit is verified.

use super::patterns::DEVICE_ID;
use super::{ExtractionMatch, FieldExtractor};

/// Number of digits kept for a device identifier.
pub const DEVICE_ID_LEN: usize = 15;

/// Device identifier field extractor.
pub struct DeviceIdExtractor;

impl DeviceIdExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DeviceIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DeviceIdExtractor {
    type Output = ExtractionMatch<String>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DEVICE_ID
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                let id = normalize_device_id(&caps[1])?;
                Some(
                    ExtractionMatch::new(id, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// Keep only the digits of a raw run; `None` when fewer than 15 remain.
pub fn normalize_device_id(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < DEVICE_ID_LEN {
        return None;
    }
    Some(digits[..DEVICE_ID_LEN].to_string())
}

/// The two device identifier slots of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceIds {
    pub first: Option<String>,
    pub second: Option<String>,
    /// Qualifying identifiers found beyond the second slot.
    pub discarded: usize,
}

/// Extract up to two device identifiers in document order.
pub fn extract_device_ids(text: &str) -> DeviceIds {
    let mut ids = DeviceIdExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value);

    let first = ids.next();
    let second = ids.next();
    let discarded = ids.count();

    DeviceIds {
        first,
        second,
        discarded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_device_id() {
        assert_eq!(normalize_device_id("356938035643809"), Some("356938035643809".to_string()));
        assert_eq!(normalize_device_id("35693 80356 43809"), Some("356938035643809".to_string()));
        assert_eq!(normalize_device_id("35693803564380"), None);
    }

    #[test]
    fn test_overlong_run_truncated() {
        // 18 digits, no rounding or check digit
        assert_eq!(
            normalize_device_id("123456789012345678"),
            Some("123456789012345".to_string())
        );
    }

    #[test]
    fn test_embedded_spaces_do_not_count() {
        // 15 chars but only 14 digits
        let text = "IMEI: 1234567 1234567";
        assert_eq!(extract_device_ids(text), DeviceIds::default());
    }

    #[test]
    fn test_two_slots_in_document_order() {
        let text = "IMEI: 111111111111111\nIMEI 2: 222222222222222";
        let ids = extract_device_ids(text);
        assert_eq!(ids.first.as_deref(), Some("111111111111111"));
        assert_eq!(ids.second.as_deref(), Some("222222222222222"));
        assert_eq!(ids.discarded, 0);
    }

    #[test]
    fn test_third_match_discarded() {
        let text = "IMEI: 111111111111111 / IMEI: 222222222222222 / IMEI: 333333333333333";
        let ids = extract_device_ids(text);
        assert_eq!(ids.first.as_deref(), Some("111111111111111"));
        assert_eq!(ids.second.as_deref(), Some("222222222222222"));
        assert_eq!(ids.discarded, 1);
    }

    #[test]
    fn test_short_match_skipped_before_slotting() {
        let text = "IMEI:12345 6789012 34 | IMEI: 999999999999999";
        let ids = extract_device_ids(text);
        assert_eq!(ids.first.as_deref(), Some("999999999999999"));
        assert_eq!(ids.second, None);
    }

    #[test]
    fn test_single_match() {
        let ids = extract_device_ids("Aparelho celular, IMEI 356938035643809, cor preta");
        assert_eq!(ids.first.as_deref(), Some("356938035643809"));
        assert_eq!(ids.second, None);
    }
}
