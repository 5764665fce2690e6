//! MediaInfo `Menu` section dumps (input only)
//!
//! ```text
//! Menu
//! 00:00:00.000 : en:Intro
//! 00:05:00.000 : :Chapter 2
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use super::LinePolicy;
use crate::domain::model::{Chapter, ChapterList, LanguageTags};
use crate::error::{ConverterError, ConverterResult};

/// Header line MediaInfo prints above the chapter rows
pub const MENU_HEADER: &str = "Menu";

static MEDIAINFO_ROW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<time>[0-9:.]+?)\s+:\s(?P<lang>[a-z]{0,2}):(?P<name>.+)$")
        .expect("MEDIAINFO_ROW_REGEX must compile")
});

/// Whether a line is a MediaInfo chapter row
pub fn matches_row(line: &str) -> bool {
    MEDIAINFO_ROW_REGEX.is_match(line)
}

/// Whether a line is the `Menu` section header
pub fn is_menu_header(line: &str) -> bool {
    line.starts_with(MENU_HEADER)
}

/// Parse chapter rows; timestamps are kept exactly as MediaInfo printed them
pub fn parse(lines: &[&str], policy: LinePolicy) -> ConverterResult<(ChapterList, LanguageTags)> {
    let mut chapters = ChapterList::new();
    let mut languages = LanguageTags::new();

    for line in lines {
        let Some(caps) = MEDIAINFO_ROW_REGEX.captures(line) else {
            if policy == LinePolicy::Strict {
                return Err(ConverterError::parse(*line, "expected TIME : LANG:TITLE"));
            }
            tracing::debug!("Skipping non-chapter line: {}", line);
            continue;
        };

        chapters.push(Chapter::new(&caps["time"], &caps["name"]));
        languages.push(&caps["lang"]);
    }

    Ok((chapters, languages))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_with_languages() {
        let (chapters, languages) = parse(
            &["00:00:00.000 : en:Intro", "00:05:00.000 : :Chapter 2"],
            LinePolicy::default(),
        )
        .unwrap();

        assert_eq!(
            chapters.as_slice(),
            &[
                Chapter::new("00:00:00.000", "Intro"),
                Chapter::new("00:05:00.000", "Chapter 2"),
            ]
        );
        assert_eq!(languages.as_strings(), vec!["en", ""]);
    }

    #[test]
    fn test_parse_keeps_colons_in_title() {
        let (chapters, _) =
            parse(&["00:10:00.000 : ja:Part 2: Return"], LinePolicy::default()).unwrap();
        assert_eq!(chapters.as_slice()[0].title, "Part 2: Return");
    }

    #[test]
    fn test_parse_skips_other_lines() {
        let (chapters, languages) = parse(
            &["Format : Timed Text", "00:00:00.000 : en:Intro"],
            LinePolicy::SkipNonMatching,
        )
        .unwrap();
        assert_eq!(chapters.len(), 1);
        assert_eq!(languages.len(), 1);
    }

    #[test]
    fn test_row_pattern() {
        assert!(matches_row("00:00:00.000 : en:Intro"));
        assert!(matches_row("00:00:00.000   : :Intro"));
        assert!(!matches_row("00:00:00.000 : eng:Intro"));
        assert!(!matches_row("00:00:00.000 Intro"));
        assert!(is_menu_header("Menu"));
        assert!(is_menu_header("Menu #1"));
    }
}
