// Domain rules - Output format and language policies

use std::path::Path;

use crate::domain::model::*;

/// Decide the output format when the user did not force one.
///
/// Precedence: explicit format, then the output file extension
/// (`.pbf`, `.xml`, `.txt`), then tab for clipboard round trips, then POT.
pub fn resolve_output_format(
    explicit: Option<OutputFormat>,
    clipboard_mode: bool,
    output_path: Option<&Path>,
) -> OutputFormat {
    if let Some(format) = explicit {
        return format;
    }
    if let Some(format) = output_path.and_then(OutputFormat::from_extension) {
        return format;
    }
    if clipboard_mode {
        // Tab-separated text pastes straight into a spreadsheet
        return OutputFormat::Tab;
    }
    OutputFormat::Pot
}

/// Outcome of choosing the chapter language for XML output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageChoice {
    /// Forced by configuration
    Explicit(String),
    /// The only language present in the input
    Recovered(String),
    /// Several languages were present; the first one wins
    FirstOfMany { chosen: String, all: Vec<String> },
    /// No language information
    None,
}

impl LanguageChoice {
    /// Language tag to hand to the container tools
    pub fn tag(&self) -> Option<&str> {
        match self {
            LanguageChoice::Explicit(tag)
            | LanguageChoice::Recovered(tag)
            | LanguageChoice::FirstOfMany { chosen: tag, .. } => Some(tag),
            LanguageChoice::None => None,
        }
    }
}

/// Pick the chapter language for XML output
pub fn select_language(explicit: Option<&str>, recovered: Option<&LanguageTags>) -> LanguageChoice {
    if let Some(tag) = explicit.filter(|tag| !tag.is_empty()) {
        return LanguageChoice::Explicit(tag.to_string());
    }

    let distinct = recovered.map(LanguageTags::distinct).unwrap_or_default();
    match distinct.as_slice() {
        [] => LanguageChoice::None,
        [only] => LanguageChoice::Recovered(only.to_string()),
        [first, ..] => LanguageChoice::FirstOfMany {
            chosen: first.to_string(),
            all: distinct.iter().map(|tag| tag.to_string()).collect(),
        },
    }
}
