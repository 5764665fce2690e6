//! Tab and simple (comma) separated output.
//!
//! Neither dialect is detected on input; both are read back through the
//! human-readable parser.

use crate::domain::model::ChapterList;

/// `timestamp<TAB>title` per line
pub fn render_tab(chapters: &ChapterList) -> String {
    render_separated(chapters, '\t')
}

/// `timestamp,title` per line
pub fn render_simple(chapters: &ChapterList) -> String {
    render_separated(chapters, ',')
}

fn render_separated(chapters: &ChapterList, separator: char) -> String {
    chapters
        .iter()
        .map(|chapter| format!("{}{}{}\n", chapter.timestamp, separator, chapter.title))
        .collect()
}
