//! Timestamp parsing and formatting
//!
//! Chapter timestamps travel as text in every dialect. The canonical form is
//! `H:MM:SS.mmm`: unpadded hours, two-digit minutes and seconds, three-digit
//! milliseconds. POT bookmarks store integer milliseconds instead.

use crate::error::{ConverterError, ConverterResult};

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Format milliseconds as a canonical `H:MM:SS.mmm` timestamp
pub fn ms_to_timestamp(ms: u64) -> String {
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = ms % MS_PER_SECOND;
    format!("{}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

/// Parse a millisecond count given as text
pub fn parse_millis(value: &str) -> ConverterResult<u64> {
    decimal_value(value.trim()).ok_or_else(|| ConverterError::InvalidInput {
        value: value.to_string(),
    })
}

/// Convert a `[HH:]MM:SS[.mmm]` timestamp to milliseconds.
///
/// A single `:` means the hour field is missing. The fraction is padded or
/// cut to exactly three digits, so `.5` is 500 ms and `.12345` is 123 ms.
pub fn timestamp_to_ms(timestamp: &str) -> ConverterResult<u64> {
    let mut full = timestamp.trim().to_string();
    if full.matches(':').count() == 1 {
        full.insert_str(0, "00:");
    }
    if !full.contains('.') {
        full.push_str(".000");
    }

    let groups: Vec<&str> = full.split([':', '.']).collect();
    let [hours, minutes, seconds, fraction] = groups.as_slice() else {
        return Err(ConverterError::parse(
            timestamp,
            format!("expected 4 numeric groups, found {}", groups.len()),
        ));
    };

    let millis: String = fraction.chars().chain("000".chars()).take(3).collect();

    let hours = numeric_group(timestamp, hours)?;
    let minutes = numeric_group(timestamp, minutes)?;
    let seconds = numeric_group(timestamp, seconds)?;
    let millis = numeric_group(timestamp, &millis)?;

    hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|total| total.checked_add(minutes.checked_mul(MS_PER_MINUTE)?))
        .and_then(|total| total.checked_add(seconds.checked_mul(MS_PER_SECOND)?))
        .and_then(|total| total.checked_add(millis))
        .ok_or_else(|| ConverterError::parse(timestamp, "timestamp out of range"))
}

/// Rewrite a timestamp in canonical form
pub fn normalize_timestamp(timestamp: &str) -> ConverterResult<String> {
    timestamp_to_ms(timestamp).map(ms_to_timestamp)
}

fn numeric_group(timestamp: &str, group: &str) -> ConverterResult<u64> {
    decimal_value(group).ok_or_else(|| {
        ConverterError::parse(timestamp, format!("'{}' is not a number", group))
    })
}

/// Code points of `0` in the decimal digit blocks accepted besides ASCII
const DIGIT_ZEROS: [u32; 6] = [
    0x0660, // Arabic-Indic
    0x06F0, // Extended Arabic-Indic
    0x0966, // Devanagari
    0x09E6, // Bengali
    0x0E50, // Thai
    0xFF10, // Fullwidth
];

fn digit_value(c: char) -> Option<u64> {
    if let Some(digit) = c.to_digit(10) {
        return Some(u64::from(digit));
    }
    let code = u32::from(c);
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .map(|&zero| u64::from(code - zero))
}

/// Value of a run of decimal digits; fullwidth and other script digits
/// count like their ASCII forms. `None` when empty, non-numeric or too large.
fn decimal_value(text: &str) -> Option<u64> {
    if text.is_empty() {
        return None;
    }
    text.chars().try_fold(0u64, |value, c| {
        value.checked_mul(10)?.checked_add(digit_value(c)?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_to_timestamp_pads_fields() {
        assert_eq!(ms_to_timestamp(0), "0:00:00.000");
        assert_eq!(ms_to_timestamp(1_500), "0:00:01.500");
        assert_eq!(ms_to_timestamp(65_000), "0:01:05.000");
        assert_eq!(ms_to_timestamp(3_723_004), "1:02:03.004");
    }

    #[test]
    fn test_ms_to_timestamp_hours_unbounded() {
        assert_eq!(ms_to_timestamp(100 * 3_600_000 + 1), "100:00:00.001");
    }

    #[test]
    fn test_timestamp_to_ms_full_form() {
        assert_eq!(timestamp_to_ms("0:00:01.500").unwrap(), 1_500);
        assert_eq!(timestamp_to_ms("01:02:03.004").unwrap(), 3_723_004);
    }

    #[test]
    fn test_timestamp_to_ms_without_hours() {
        assert_eq!(timestamp_to_ms("1:05").unwrap(), 65_000);
        assert_eq!(timestamp_to_ms("05:30.250").unwrap(), 330_250);
    }

    #[test]
    fn test_timestamp_to_ms_fraction_padding() {
        assert_eq!(timestamp_to_ms("0:00:01.5").unwrap(), 1_500);
        assert_eq!(timestamp_to_ms("0:00:01.12345").unwrap(), 1_123);
        assert_eq!(timestamp_to_ms("0:00:01.05").unwrap(), 1_050);
    }

    #[test]
    fn test_timestamp_to_ms_rejects_bad_shapes() {
        assert!(matches!(
            timestamp_to_ms("12"),
            Err(ConverterError::ParseError { .. })
        ));
        assert!(matches!(
            timestamp_to_ms("1:2:3:4"),
            Err(ConverterError::ParseError { .. })
        ));
        assert!(matches!(
            timestamp_to_ms("1:xx:03"),
            Err(ConverterError::ParseError { .. })
        ));
        assert!(matches!(
            timestamp_to_ms("1:02:03.4.5"),
            Err(ConverterError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis("65000").unwrap(), 65_000);
        assert!(matches!(
            parse_millis("-5"),
            Err(ConverterError::InvalidInput { .. })
        ));
        assert!(matches!(
            parse_millis("abc"),
            Err(ConverterError::InvalidInput { .. })
        ));
        assert!(matches!(
            parse_millis("99999999999999999999999"),
            Err(ConverterError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_fullwidth_digits() {
        assert_eq!(timestamp_to_ms("１:０５").unwrap(), 65_000);
        assert_eq!(timestamp_to_ms("０:０１:０５.５").unwrap(), 65_500);
        assert_eq!(normalize_timestamp("1:０5").unwrap(), "0:01:05.000");
        assert_eq!(parse_millis("１５００").unwrap(), 1_500);
    }

    #[test]
    fn test_other_script_digits() {
        // Arabic-Indic 1:05
        assert_eq!(timestamp_to_ms("\u{661}:\u{660}\u{665}").unwrap(), 65_000);
        assert!(matches!(
            parse_millis("１x"),
            Err(ConverterError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_ms_round_trip() {
        for ms in [0, 1, 999, 1_000, 59_999, 60_000, 3_599_999, 3_600_000, 86_400_123] {
            assert_eq!(timestamp_to_ms(&ms_to_timestamp(ms)).unwrap(), ms);
        }
        for ms in (0..5_000_000).step_by(7_919) {
            assert_eq!(timestamp_to_ms(&ms_to_timestamp(ms)).unwrap(), ms);
        }
    }

    #[test]
    fn test_canonical_timestamp_round_trip() {
        for ts in ["0:00:00.000", "0:01:05.000", "12:34:56.789", "123:00:00.001"] {
            assert_eq!(ms_to_timestamp(timestamp_to_ms(ts).unwrap()), ts);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_timestamp("1:5:3.2").unwrap();
        assert_eq!(once, "1:05:03.200");
        assert_eq!(normalize_timestamp(&once).unwrap(), once);
    }
}
