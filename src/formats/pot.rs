//! PotPlayer bookmark format (`.pbf`)
//!
//! ```text
//! [Bookmark]
//! 0=1500*Intro*
//! 1=65000*Chapter 2*
//! ```
//!
//! Indices are zero based, times are integer milliseconds and titles cannot
//! contain `*`.

use std::fmt::Write;

use once_cell::sync::Lazy;
use regex::Regex;

use super::LinePolicy;
use crate::domain::model::{Chapter, ChapterList};
use crate::error::{ConverterError, ConverterResult};
use crate::utils::time::{ms_to_timestamp, parse_millis, timestamp_to_ms};

pub const POT_HEADER: &str = "[Bookmark]";

static POT_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+=(?P<ms>\d+)\*(?P<title>[^*]+)").expect("POT_LINE_REGEX must compile")
});

/// Whether a line opens a POT bookmark list
pub fn matches(line: &str) -> bool {
    line.starts_with(POT_HEADER)
}

/// Parse bookmark lines, skipping the header line
pub fn parse(lines: &[&str], policy: LinePolicy) -> ConverterResult<ChapterList> {
    let mut chapters = ChapterList::new();

    for line in lines.iter().skip(1) {
        let Some(caps) = POT_LINE_REGEX.captures(line) else {
            if policy == LinePolicy::Strict {
                return Err(ConverterError::parse(*line, "expected N=MS*TITLE*"));
            }
            tracing::debug!("Skipping non-bookmark line: {}", line);
            continue;
        };

        let ms = parse_millis(&caps["ms"])?;
        chapters.push(Chapter::new(ms_to_timestamp(ms), &caps["title"]));
    }

    Ok(chapters)
}

/// Render a bookmark list; fails if a timestamp cannot be converted
pub fn render(chapters: &ChapterList) -> ConverterResult<String> {
    let mut output = String::new();
    output.push_str(POT_HEADER);
    output.push('\n');

    for (i, chapter) in chapters.iter().enumerate() {
        let ms = timestamp_to_ms(&chapter.timestamp)?;
        // Writing into a String cannot fail
        let _ = writeln!(output, "{}={}*{}*", i, ms, chapter.title);
    }

    Ok(output)
}
