// Unit tests for domain models

use std::path::Path;

use crate::domain::model::*;
use crate::error::ConverterError;

#[test]
fn test_chapter_list_preserves_order() {
    let list: ChapterList = vec![
        Chapter::new("0:05:00.000", "Later"),
        Chapter::new("0:00:00.000", "Earlier"),
    ]
    .into_iter()
    .collect();

    let titles: Vec<&str> = list.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Later", "Earlier"]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_chapter_list_allows_duplicate_timestamps() {
    let mut list = ChapterList::new();
    list.push(Chapter::new("0:00:00.000", "A"));
    list.push(Chapter::new("0:00:00.000", "B"));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_language_tags_empty_is_absent() {
    let mut tags = LanguageTags::new();
    tags.push("en");
    tags.push("");
    assert_eq!(tags.as_strings(), vec!["en", ""]);
    assert_eq!(tags.distinct(), vec!["en"]);
}

#[test]
fn test_language_tags_distinct_keeps_first_appearance() {
    let mut tags = LanguageTags::new();
    for tag in ["ja", "", "en", "ja", "en"] {
        tags.push(tag);
    }
    assert_eq!(tags.distinct(), vec!["ja", "en"]);
}

#[test]
fn test_output_format_parse() {
    assert_eq!(OutputFormat::parse("pot").unwrap(), OutputFormat::Pot);
    assert_eq!(OutputFormat::parse("TAB").unwrap(), OutputFormat::Tab);
    assert_eq!("xml".parse::<OutputFormat>().unwrap(), OutputFormat::Xml);

    let err = OutputFormat::parse("srt").unwrap_err();
    assert!(matches!(err, ConverterError::ParseError { .. }));
}

#[test]
fn test_output_format_from_extension() {
    assert_eq!(
        OutputFormat::from_extension(Path::new("movie.PBF")),
        Some(OutputFormat::Pot)
    );
    assert_eq!(
        OutputFormat::from_extension(Path::new("movie.xml")),
        Some(OutputFormat::Xml)
    );
    assert_eq!(
        OutputFormat::from_extension(Path::new("movie.chapters.txt")),
        Some(OutputFormat::Ogm)
    );
    assert_eq!(OutputFormat::from_extension(Path::new("movie.csv")), None);
    assert_eq!(OutputFormat::from_extension(Path::new("movie")), None);
}

#[test]
fn test_output_format_display_round_trips_through_parse() {
    for format in OutputFormat::ALL {
        assert_eq!(OutputFormat::parse(&format.to_string()).unwrap(), format);
    }
}

#[test]
fn test_input_source_path() {
    assert_eq!(
        InputSource::TextFile("a.txt".into()).path(),
        Some(Path::new("a.txt"))
    );
    assert_eq!(InputSource::Clipboard.path(), None);
}
