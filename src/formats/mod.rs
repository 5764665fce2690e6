//! Chapter list dialects
//!
//! Every dialect lives in its own module with a `parse` and/or `render`
//! function. Parsers take the normalized input lines (trimmed, blank lines
//! removed, see [`normalize_lines`]) and renderers emit `\n`-terminated text.

use crate::domain::model::{ChapterList, Dialect, OutputFormat, ParsedChapters};
use crate::error::ConverterResult;

pub mod detect;
pub mod human;
pub mod mediainfo;
pub mod ogm;
pub mod plain;
pub mod pot;

pub use detect::{detect, Detection};

/// How a parser treats a line that does not fit its dialect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinePolicy {
    /// Drop the line and keep going
    #[default]
    SkipNonMatching,
    /// Fail with a parse error
    Strict,
}

/// Split raw input into trimmed, non-blank lines
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse lines already classified by [`detect`]
pub fn parse(
    dialect: Dialect,
    lines: &[&str],
    policy: LinePolicy,
) -> ConverterResult<ParsedChapters> {
    match dialect {
        Dialect::Human => human::parse(lines, policy).map(ParsedChapters::new),
        Dialect::Ogm => ogm::parse(lines, policy).map(ParsedChapters::new),
        Dialect::Pot => pot::parse(lines, policy).map(ParsedChapters::new),
        Dialect::MediaInfo => mediainfo::parse(lines, policy)
            .map(|(chapters, languages)| ParsedChapters::with_languages(chapters, languages)),
    }
}

/// Render chapters as text.
///
/// XML has no text form of its own: the OGM text returned here is what the
/// container tools turn into chapter XML.
pub fn render(format: OutputFormat, chapters: &ChapterList) -> ConverterResult<String> {
    match format {
        OutputFormat::Tab => Ok(plain::render_tab(chapters)),
        OutputFormat::Simple => Ok(plain::render_simple(chapters)),
        OutputFormat::Ogm | OutputFormat::Xml => Ok(ogm::render(chapters)),
        OutputFormat::Pot => pot::render(chapters),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Chapter;

    #[test]
    fn test_normalize_lines_trims_and_drops_blanks() {
        let text = "\u{feff}  CHAPTER01=0:00:00.000 \r\n\r\n\t\nCHAPTER01NAME=Start\r\n   ";
        assert_eq!(
            normalize_lines(text),
            vec!["CHAPTER01=0:00:00.000", "CHAPTER01NAME=Start"]
        );
    }

    #[test]
    fn test_normalize_lines_all_blank() {
        assert!(normalize_lines(" \n\t\n\r\n").is_empty());
        assert!(normalize_lines("").is_empty());
    }

    #[test]
    fn test_render_xml_uses_ogm_text() {
        let chapters: ChapterList = vec![Chapter::new("0:00:00.000", "Start")]
            .into_iter()
            .collect();
        assert_eq!(
            render(OutputFormat::Xml, &chapters).unwrap(),
            render(OutputFormat::Ogm, &chapters).unwrap()
        );
    }

    #[test]
    fn test_parse_dispatch_attaches_languages_only_for_mediainfo() {
        let parsed = parse(Dialect::MediaInfo, &["00:00:00.000 : en:Intro"], LinePolicy::default())
            .unwrap();
        assert!(parsed.languages.is_some());

        let parsed = parse(Dialect::Human, &["0:00 Intro"], LinePolicy::default()).unwrap();
        assert!(parsed.languages.is_none());
    }
}
