//! Title extraction from the first qualifying heading line.

use crate::options::TitleRule;
use crate::patterns::HEADING_LINE;

/// Text of `line` when it is a heading the rule accepts.
#[must_use]
pub fn heading_title(line: &str, rule: &TitleRule) -> Option<String> {
    let caps = HEADING_LINE.captures(line.trim())?;
    if caps[1].len() > rule.max_level {
        return None;
    }
    let text = caps[2].trim();
    let len = text.chars().count();
    (rule.min_chars..=rule.max_chars)
        .contains(&len)
        .then(|| text.to_string())
}

/// Find the title heading and remove its line from the text.
///
/// Headings that do not qualify are left in place and the scan goes on.
/// Without a qualifying heading the text comes back unchanged.
#[must_use]
pub fn extract_title(text: &str, rule: &TitleRule) -> (Option<String>, String) {
    let mut offset = 0;
    for segment in text.split_inclusive('\n') {
        let line = segment.trim_end_matches(['\n', '\r']);
        if let Some(title) = heading_title(line, rule) {
            let mut rest = String::with_capacity(text.len() - segment.len());
            rest.push_str(&text[..offset]);
            rest.push_str(&text[offset + segment.len()..]);
            return (Some(title), rest);
        }
        offset += segment.len();
    }
    (None, text.to_string())
}
