//! Text cleanup passes.
//!
//! Each pass is a pure `&str -> String` rewrite. Passes that drop lines work
//! on `str::lines`, so a trailing newline does not survive them; the final
//! trim in [`super::normalize`] makes that invisible.

use crate::options::WordJoinPolicy;
use crate::patterns::{
    ATTRIBUTE_FRAGMENT, EQUALS_AFTER_WORD, EQUALS_BEFORE_WORD, EQUALS_LEADING_SPACE,
    EQUALS_TRAILING_SPACE, EXCESS_NEWLINES, HEX_FRAGMENT_LINE, HTML_ENTITY, LINK_TARGET,
    MARKDOWN_LINK, MARKUP_TAG, MIME_QUOTED_ATTRIBUTE, MULTIPLE_SPACES, PIXEL_FRAGMENT,
    QUOTED_ATTRIBUTE_FRAGMENT, QUOTED_URL_REF, SEPARATOR_LINE, SOFT_WRAP_LEADING,
    SOFT_WRAP_TRAILING, SPACED_DOT, STRICT_MARKUP_TAG, SYMBOL_LINE, URL_SCHEME,
};

use super::words::{is_word_char, space_words};

/// Substrings marking a line as CSS residue.
const CSS_ARTIFACTS: &[&str] = &["px", "background-color", "mask-image"];

/// Minimum heading text length kept by [`short_headings`].
const MIN_HEADING_CHARS: usize = 4;

fn keep_lines(text: &str, keep: impl Fn(&str) -> bool) -> String {
    text.lines().filter(|line| keep(line)).collect::<Vec<_>>().join("\n")
}

// === Markup residue ===

#[must_use]
pub fn mime_quoted_attributes(text: &str) -> String {
    MIME_QUOTED_ATTRIBUTE
        .replace_all(text, r#""${1}""#)
        .into_owned()
}

#[must_use]
pub fn html_entities(text: &str) -> String {
    HTML_ENTITY.replace_all(text, " ").into_owned()
}

#[must_use]
pub fn markup_tags(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

#[must_use]
pub fn strict_markup_tags(text: &str) -> String {
    STRICT_MARKUP_TAG.replace_all(text, "").into_owned()
}

/// Delete `class=` / `style=` and everything after it on the line.
#[must_use]
pub fn attribute_fragments(text: &str) -> String {
    ATTRIBUTE_FRAGMENT.replace_all(text, "").into_owned()
}

#[must_use]
pub fn quoted_attribute_fragments(text: &str) -> String {
    QUOTED_ATTRIBUTE_FRAGMENT.replace_all(text, "").into_owned()
}

#[must_use]
pub fn quoted_url_refs(text: &str) -> String {
    QUOTED_URL_REF.replace_all(text, "").into_owned()
}

// === Whitespace and `=` residue ===

#[must_use]
pub fn collapse_blank_lines(text: &str) -> String {
    EXCESS_NEWLINES.replace_all(text, "\n\n").into_owned()
}

/// Delete soft-wrap `=` markers at line ends, then at line starts.
///
/// The whitespace matched around the marker may include further newlines, so
/// a marker followed by a blank line takes the blank line with it.
#[must_use]
pub fn soft_wraps(text: &str) -> String {
    let text = SOFT_WRAP_TRAILING.replace_all(text, "\n");
    SOFT_WRAP_LEADING.replace_all(&text, "\n").into_owned()
}

/// Delete every `=` that has no word character directly on either side.
///
/// Neighbours are judged on the input text, so in `a = = b` both signs go.
#[must_use]
pub fn standalone_equals(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '=' {
            let before = i.checked_sub(1).and_then(|j| chars.get(j)).copied();
            let after = chars.get(i + 1).copied();
            if !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char) {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// `=` touching whitespace on either side becomes a single space.
#[must_use]
pub fn equals_spacing(text: &str) -> String {
    text.lines()
        .map(|line| {
            let line = EQUALS_TRAILING_SPACE.replace_all(line, " ");
            EQUALS_LEADING_SPACE.replace_all(&line, " ").into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn collapse_spaces(text: &str) -> String {
    MULTIPLE_SPACES.replace_all(text, " ").into_owned()
}

// === Line filtering ===

/// Trim every line and drop the ones that cannot be prose.
///
/// Dropped: empty lines, separator-only lines, lines of two characters or
/// fewer and lines opening with a pixel size. Surviving lines get their
/// in-word `=` residue repaired and their word spacing normalized.
#[must_use]
pub fn line_filter(text: &str, policy: WordJoinPolicy) -> String {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty()
                || SEPARATOR_LINE.is_match(line)
                || line.chars().count() <= 2
                || PIXEL_FRAGMENT.is_match(line)
            {
                return None;
            }
            let line = EQUALS_AFTER_WORD.replace_all(line, "${1} ");
            let line = EQUALS_BEFORE_WORD.replace_all(&line, " ${1}");
            let line = line.replace("= ", "").replace(" =", "");
            // The repairs can expose edge whitespace or shrink a line.
            let line = space_words(line.trim(), policy);
            (line.chars().count() > 2).then_some(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop lines that are only a short lowercase hex run.
#[must_use]
pub fn hex_fragments(text: &str) -> String {
    keep_lines(text, |line| !HEX_FRAGMENT_LINE.is_match(line.trim()))
}

#[must_use]
pub fn blank_lines(text: &str) -> String {
    keep_lines(text, |line| !line.trim().is_empty())
}

/// Drop heading lines whose text, markers trimmed, is under four characters.
#[must_use]
pub fn short_headings(text: &str) -> String {
    keep_lines(text, |line| {
        !line.starts_with('#')
            || line.trim_matches('#').trim().chars().count() >= MIN_HEADING_CHARS
    })
}

#[must_use]
pub fn css_artifact_lines(text: &str) -> String {
    keep_lines(text, |line| {
        !CSS_ARTIFACTS.iter().any(|artifact| line.contains(artifact))
    })
}

/// Drop lines without a single letter or digit.
#[must_use]
pub fn symbol_lines(text: &str) -> String {
    keep_lines(text, |line| !SYMBOL_LINE.is_match(line.trim()))
}

// === Links and URLs ===

/// Close up whitespace that wrapping left inside http(s) URLs, then around
/// dots between word characters (`example .com`).
///
/// After the scheme, the next whitespace-separated piece on the same line is
/// always taken. Further pieces are taken while they start with URL
/// punctuation (`/ . ? # & = : %`), or while the previous piece ends in a dot
/// and the next starts with a lowercase letter or digit.
#[must_use]
pub fn url_repair(text: &str) -> String {
    let joined = join_url_pieces(text);
    SPACED_DOT.replace_all(&joined, "${1}.${2}").into_owned()
}

fn continues_url(previous: &str, next: &str) -> bool {
    let Some(first) = next.chars().next() else {
        return false;
    };
    if matches!(first, '/' | '.' | '?' | '#' | '&' | '=' | ':' | '%') {
        return true;
    }
    if !previous.ends_with('.') || !(first.is_ascii_lowercase() || first.is_ascii_digit()) {
        return false;
    }
    // A trailing dot on a longer piece may end a sentence.
    previous == "."
        || next
            .trim_end_matches(['.', ',', ';', ':', '!', '?', ')'])
            .contains(['/', '.'])
}

fn join_url_pieces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(scheme) = URL_SCHEME.find(rest) {
        out.push_str(&rest[..scheme.end()]);
        let mut tail = &rest[scheme.end()..];
        let mut previous = scheme.as_str();
        let mut first_piece = true;

        loop {
            let after_gap = tail.trim_start_matches([' ', '\t']);
            let gap = tail.len() - after_gap.len();
            let piece_len = after_gap
                .find(char::is_whitespace)
                .unwrap_or(after_gap.len());
            if piece_len == 0 {
                break;
            }
            let piece = &after_gap[..piece_len];
            if gap > 0 && !first_piece && !continues_url(previous, piece) {
                break;
            }
            out.push_str(piece);
            previous = piece;
            first_piece = false;
            tail = &after_gap[piece_len..];
        }

        rest = tail;
    }

    out.push_str(rest);
    out
}

/// Delete spaces inside parenthesized http(s) link targets.
#[must_use]
pub fn link_target_spaces(text: &str) -> String {
    LINK_TARGET
        .replace_all(text, |caps: &regex::Captures| caps[0].replace(' ', ""))
        .into_owned()
}

/// `[text](target)` becomes `text`.
#[must_use]
pub fn flatten_links(text: &str) -> String {
    MARKDOWN_LINK.replace_all(text, "${1}").into_owned()
}
