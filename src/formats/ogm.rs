//! OGM simple chapter format
//!
//! ```text
//! CHAPTER01=0:00:00.000
//! CHAPTER01NAME=Start
//! ```

use std::fmt::Write;

use once_cell::sync::Lazy;
use regex::Regex;

use super::LinePolicy;
use crate::domain::model::{Chapter, ChapterList};
use crate::error::{ConverterError, ConverterResult};

static OGM_TIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CHAPTER\d+=").expect("OGM_TIME_REGEX must compile"));

static OGM_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CHAPTER\d+NAME=").expect("OGM_NAME_REGEX must compile"));

static OGM_FIRST_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CHAPTER\d").expect("OGM_FIRST_LINE_REGEX must compile"));

/// Whether a line opens an OGM chapter list
pub fn matches(line: &str) -> bool {
    OGM_FIRST_LINE_REGEX.is_match(line)
}

/// Parse `(time line, name line)` pairs.
///
/// Values are whatever follows the first `=`; timestamps are kept verbatim.
/// With [`LinePolicy::Strict`] the key of each line is checked as well.
pub fn parse(lines: &[&str], policy: LinePolicy) -> ConverterResult<ChapterList> {
    let mut chapters = ChapterList::new();

    for (pair_index, pair) in lines.chunks(2).enumerate() {
        let [time_line, name_line] = pair else {
            return Err(ConverterError::TruncatedInput {
                line: pair_index * 2 + 1,
            });
        };

        if policy == LinePolicy::Strict {
            if !OGM_TIME_REGEX.is_match(time_line) {
                return Err(ConverterError::parse(*time_line, "expected CHAPTERnn=<time>"));
            }
            if !OGM_NAME_REGEX.is_match(name_line) {
                return Err(ConverterError::parse(*name_line, "expected CHAPTERnnNAME=<title>"));
            }
        }

        chapters.push(Chapter::new(value_of(time_line)?, value_of(name_line)?));
    }

    Ok(chapters)
}

/// Render chapters as OGM text, numbering from `CHAPTER01`
pub fn render(chapters: &ChapterList) -> String {
    let mut output = String::new();
    for (i, chapter) in chapters.iter().enumerate() {
        let number = i + 1;
        // Writing into a String cannot fail
        let _ = writeln!(output, "CHAPTER{:02}={}", number, chapter.timestamp);
        let _ = writeln!(output, "CHAPTER{:02}NAME={}", number, chapter.title);
    }
    output
}

fn value_of(line: &str) -> ConverterResult<&str> {
    line.split_once('=')
        .map(|(_, value)| value)
        .ok_or_else(|| ConverterError::parse(line, "missing '='"))
}
