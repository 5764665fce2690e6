//! Free-form "timestamp title" lines.
//!
//! Covers hand-written lists (`1:05 Chapter One`), the simple dialect
//! (`0:01:05.000,Chapter One`) and the tab dialect. Timestamps are
//! normalized on the way in.

use once_cell::sync::Lazy;
use regex::Regex;

use super::LinePolicy;
use crate::domain::model::{Chapter, ChapterList};
use crate::error::{ConverterError, ConverterResult};
use crate::utils::time::normalize_timestamp;

/// Clock-like timestamp (minutes may be a single digit), an optional comma
/// and whitespace, then the title
pub(crate) static HUMAN_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<time>\d+:\d{1,2}[0-9:.]*),?\s*(?P<name>.+)$")
        .expect("HUMAN_LINE_REGEX must compile")
});

/// Whether a line looks like a human-readable chapter line
pub fn matches(line: &str) -> bool {
    HUMAN_LINE_REGEX.is_match(line)
}

pub fn parse(lines: &[&str], policy: LinePolicy) -> ConverterResult<ChapterList> {
    let mut chapters = ChapterList::new();

    for line in lines {
        let Some(caps) = HUMAN_LINE_REGEX.captures(line) else {
            if policy == LinePolicy::Strict {
                return Err(ConverterError::parse(*line, "not a 'timestamp title' line"));
            }
            tracing::debug!("Skipping non-chapter line: {}", line);
            continue;
        };

        let timestamp = normalize_timestamp(&caps["time"])?;
        chapters.push(Chapter::new(timestamp, &caps["name"]));
    }

    Ok(chapters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &ChapterList) -> Vec<(&str, &str)> {
        list.iter()
            .map(|c| (c.timestamp.as_str(), c.title.as_str()))
            .collect()
    }

    #[test]
    fn test_parse_comma_separated() {
        let list = parse(&["1:05, Chapter One"], LinePolicy::default()).unwrap();
        assert_eq!(pairs(&list), vec![("0:01:05.000", "Chapter One")]);
    }

    #[test]
    fn test_parse_tab_and_simple_lines() {
        let list = parse(
            &["0:00:01.500\tIntro", "0:01:05.000,Chapter 2"],
            LinePolicy::default(),
        )
        .unwrap();
        assert_eq!(
            pairs(&list),
            vec![("0:00:01.500", "Intro"), ("0:01:05.000", "Chapter 2")]
        );
    }

    #[test]
    fn test_parse_single_digit_minutes() {
        let list = parse(&["1:5:30 Title"], LinePolicy::default()).unwrap();
        assert_eq!(pairs(&list), vec![("1:05:30.000", "Title")]);
    }

    #[test]
    fn test_parse_skips_non_matching_lines() {
        let list = parse(
            &["Chapters of my video", "0:00 Start", "-- notes --", "12:30 End"],
            LinePolicy::SkipNonMatching,
        )
        .unwrap();
        assert_eq!(
            pairs(&list),
            vec![("0:00:00.000", "Start"), ("0:12:30.000", "End")]
        );
    }

    #[test]
    fn test_parse_strict_rejects_non_matching_lines() {
        let err = parse(&["0:00 Start", "notes"], LinePolicy::Strict).unwrap_err();
        assert!(matches!(err, ConverterError::ParseError { .. }));
    }

    #[test]
    fn test_parse_keeps_title_punctuation() {
        let list = parse(&["0:10 Part 1: The Beginning, again"], LinePolicy::default()).unwrap();
        assert_eq!(list.as_slice()[0].title, "Part 1: The Beginning, again");
    }

    #[test]
    fn test_parse_fullwidth_timestamp() {
        let list = parse(&["0:00 A", "１:０５ オープニング"], LinePolicy::default()).unwrap();
        assert_eq!(
            pairs(&list),
            vec![("0:00:00.000", "A"), ("0:01:05.000", "オープニング")]
        );
    }

    #[test]
    fn test_matches() {
        assert!(matches("0:00:00.000 Intro"));
        assert!(matches("12:3 Odd"));
        assert!(!matches("CHAPTER01=0:00:00.000"));
        assert!(!matches("[Bookmark]"));
        assert!(!matches("Menu"));
    }
}
