//! Input dialect detection
//!
//! Detection walks an ordered rule table and stops at the first rule whose
//! predicate accepts the leading lines. The order matters: a MediaInfo row
//! without its `Menu` header also reads as a human-readable line and must
//! resolve to [`Dialect::Human`].

use super::{human, mediainfo, ogm, pot};
use crate::domain::model::Dialect;
use crate::error::{ConverterError, ConverterResult};

/// Outcome of a successful detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub dialect: Dialect,
    /// Leading lines that belong to the wrapper, not the chapter list
    pub header_lines: usize,
    /// Name of the rule that fired
    pub rule: &'static str,
}

impl Detection {
    /// Lines the dialect parser should see
    pub fn body<'a, 'b>(&self, lines: &'a [&'b str]) -> &'a [&'b str] {
        &lines[self.header_lines.min(lines.len())..]
    }
}

struct DetectionRule {
    name: &'static str,
    dialect: Dialect,
    header_lines: usize,
    accepts: fn(&[&str]) -> bool,
}

const RULES: [DetectionRule; 5] = [
    DetectionRule {
        name: "human",
        dialect: Dialect::Human,
        header_lines: 0,
        accepts: first_line_is_human,
    },
    DetectionRule {
        name: "ogm",
        dialect: Dialect::Ogm,
        header_lines: 0,
        accepts: first_line_is_ogm,
    },
    DetectionRule {
        name: "pot",
        dialect: Dialect::Pot,
        header_lines: 0,
        accepts: first_line_is_pot,
    },
    DetectionRule {
        name: "mediainfo-menu",
        dialect: Dialect::MediaInfo,
        header_lines: 1,
        accepts: menu_then_mediainfo_row,
    },
    DetectionRule {
        name: "mediainfo",
        dialect: Dialect::MediaInfo,
        header_lines: 0,
        accepts: first_line_is_mediainfo_row,
    },
];

fn first_line_is_human(lines: &[&str]) -> bool {
    lines.first().is_some_and(|line| human::matches(line))
}

fn first_line_is_ogm(lines: &[&str]) -> bool {
    lines.first().is_some_and(|line| ogm::matches(line))
}

fn first_line_is_pot(lines: &[&str]) -> bool {
    lines.first().is_some_and(|line| pot::matches(line))
}

fn menu_then_mediainfo_row(lines: &[&str]) -> bool {
    match lines {
        [first, second, ..] => mediainfo::is_menu_header(first) && mediainfo::matches_row(second),
        _ => false,
    }
}

fn first_line_is_mediainfo_row(lines: &[&str]) -> bool {
    lines.first().is_some_and(|line| mediainfo::matches_row(line))
}

/// Classify normalized input lines
pub fn detect(lines: &[&str]) -> ConverterResult<Detection> {
    let rule = RULES
        .iter()
        .find(|rule| (rule.accepts)(lines))
        .ok_or(ConverterError::UnknownFormat)?;

    tracing::debug!("Input matched detection rule '{}'", rule.name);

    Ok(Detection {
        dialect: rule.dialect,
        header_lines: rule.header_lines,
        rule: rule.name,
    })
}
