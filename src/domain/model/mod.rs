// Domain models - Core types and data structures

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConverterError, ConverterResult};

/// A single chapter marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Timestamp text, canonical `H:MM:SS.mmm` for every dialect except
    /// OGM and MediaInfo, which keep the text they were given
    pub timestamp: String,
    pub title: String,
}

impl Chapter {
    /// Create a new chapter
    pub fn new(timestamp: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            title: title.into(),
        }
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.timestamp, self.title)
    }
}

/// Ordered chapter list; position is playback order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterList {
    chapters: Vec<Chapter>,
}

impl ChapterList {
    /// Create an empty chapter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chapter at the end
    pub fn push(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chapter> {
        self.chapters.iter()
    }

    pub fn as_slice(&self) -> &[Chapter] {
        &self.chapters
    }
}

impl FromIterator<Chapter> for ChapterList {
    fn from_iter<I: IntoIterator<Item = Chapter>>(iter: I) -> Self {
        Self {
            chapters: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ChapterList {
    type Item = &'a Chapter;
    type IntoIter = std::slice::Iter<'a, Chapter>;

    fn into_iter(self) -> Self::IntoIter {
        self.chapters.iter()
    }
}

impl IntoIterator for ChapterList {
    type Item = Chapter;
    type IntoIter = std::vec::IntoIter<Chapter>;

    fn into_iter(self) -> Self::IntoIter {
        self.chapters.into_iter()
    }
}

/// Per-chapter language tags recovered from a MediaInfo dump.
///
/// Runs parallel to the [`ChapterList`] it was parsed with. An empty tag in
/// the input is stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTags {
    tags: Vec<Option<String>>,
}

impl LanguageTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tag of the next chapter
    pub fn push(&mut self, tag: &str) {
        if tag.is_empty() {
            self.tags.push(None);
        } else {
            self.tags.push(Some(tag.to_string()));
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags in chapter order, absent tags as empty strings
    pub fn as_strings(&self) -> Vec<&str> {
        self.tags
            .iter()
            .map(|tag| tag.as_deref().unwrap_or(""))
            .collect()
    }

    /// Distinct non-empty tags in order of first appearance
    pub fn distinct(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for tag in self.tags.iter().flatten() {
            if !seen.contains(&tag.as_str()) {
                seen.push(tag);
            }
        }
        seen
    }
}

/// Result of parsing one input document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedChapters {
    pub chapters: ChapterList,
    /// Only the MediaInfo dialect carries language tags
    pub languages: Option<LanguageTags>,
}

impl ParsedChapters {
    pub fn new(chapters: ChapterList) -> Self {
        Self {
            chapters,
            languages: None,
        }
    }

    pub fn with_languages(chapters: ChapterList, languages: LanguageTags) -> Self {
        Self {
            chapters,
            languages: Some(languages),
        }
    }
}

/// Input dialect recognised by the format detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Free-form `timestamp[,] title` lines; also covers tab and simple input
    Human,
    /// `CHAPTERnn=` / `CHAPTERnnNAME=` pairs
    Ogm,
    /// PotPlayer `[Bookmark]` list
    Pot,
    /// MediaInfo `Menu` section dump
    MediaInfo,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Human => "human",
            Dialect::Ogm => "ogm",
            Dialect::Pot => "pot",
            Dialect::MediaInfo => "mediainfo",
        };
        f.write_str(name)
    }
}

/// Output format the renderer produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `timestamp,title`
    Simple,
    /// PotPlayer bookmark file (`.pbf`)
    Pot,
    /// OGM simple chapter text
    Ogm,
    /// `timestamp<TAB>title`, suited to spreadsheets
    Tab,
    /// Matroska chapter XML, produced through the container tools
    Xml,
}

impl OutputFormat {
    /// All formats, in the order they are listed on the command line
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Simple,
        OutputFormat::Pot,
        OutputFormat::Ogm,
        OutputFormat::Tab,
        OutputFormat::Xml,
    ];

    /// Parse an output format name (case insensitive)
    pub fn parse(format_str: &str) -> ConverterResult<Self> {
        match format_str.to_lowercase().as_str() {
            "simple" => Ok(OutputFormat::Simple),
            "pot" => Ok(OutputFormat::Pot),
            "ogm" => Ok(OutputFormat::Ogm),
            "tab" => Ok(OutputFormat::Tab),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(ConverterError::parse(
                format_str,
                "unknown output format, expected one of: simple, pot, ogm, tab, xml",
            )),
        }
    }

    /// Format implied by an output file extension, if any
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "pbf" => Some(OutputFormat::Pot),
            "xml" => Some(OutputFormat::Xml),
            "txt" => Some(OutputFormat::Ogm),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Pot => "pot",
            OutputFormat::Ogm => "ogm",
            OutputFormat::Tab => "tab",
            OutputFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Where the input text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Plain text file, decoded with the detected encoding
    TextFile(std::path::PathBuf),
    /// Chapters extracted from a Matroska/MP4 container or chapter XML
    Container(std::path::PathBuf),
    /// System clipboard
    Clipboard,
}

impl InputSource {
    /// Input file path, if the input came from the file system
    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSource::TextFile(path) | InputSource::Container(path) => Some(path),
            InputSource::Clipboard => None,
        }
    }
}

#[cfg(test)]
mod tests;
