//! Compiled regex patterns for container parsing and text cleanup.
//!
//! All patterns are compiled once at first use via `LazyLock`.
//! Patterns are organized by the pipeline stage that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Container Patterns
// =============================================================================

/// Header line opening a markup part.
pub static HTML_CONTENT_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)content-type:\s*text/html").expect("HTML_CONTENT_TYPE regex")
});

/// `boundary="..."` parameter of the top-level multipart header.
pub static BOUNDARY_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)boundary\s*=\s*"?([^";\s]+)"?"#).expect("BOUNDARY_PARAM regex")
});

/// Interior of the `<body>` element, case-insensitive, across lines.
pub static BODY_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<body[^>]*>(.*?)</body>").expect("BODY_REGION regex")
});

/// Markup comments, matched non-greedily.
pub static MARKUP_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->").expect("MARKUP_COMMENT regex")
});

// =============================================================================
// Artifact Patterns
// =============================================================================

/// Quoted-printable `=3D"value"` leftovers (the `=` is already gone).
pub static MIME_QUOTED_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"3D"([^"]*)""#).expect("MIME_QUOTED_ATTRIBUTE regex")
});

/// Named or numeric character references.
pub static HTML_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&[a-zA-Z0-9#]+;").expect("HTML_ENTITY regex")
});

/// Anything shaped like a tag.
pub static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[^>]*>").expect("MARKUP_TAG regex")
});

/// Strict tag shape, used by the line-oriented pass order.
pub static STRICT_MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<\s*/?\s*[a-zA-Z][^>]*>").expect("STRICT_MARKUP_TAG regex")
});

/// `class=` / `style=` to end of line.
pub static ATTRIBUTE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:class|style)=.*").expect("ATTRIBUTE_FRAGMENT regex")
});

/// Complete quoted `id`, `class` or `style` attributes.
pub static QUOTED_ATTRIBUTE_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:id|class|style)="[^"]*""#).expect("QUOTED_ATTRIBUTE_FRAGMENT regex")
});

/// Parenthesized URLs left over from quoted attribute values.
pub static QUOTED_URL_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\((?:3D)?"https?://[^"]*"\)"#).expect("QUOTED_URL_REF regex")
});

// =============================================================================
// Whitespace Patterns
// =============================================================================

/// Three or more consecutive newlines.
pub static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("EXCESS_NEWLINES regex")
});

/// Trailing soft-wrap marker: `=` then whitespace up to a newline.
pub static SOFT_WRAP_TRAILING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"=\s*\n").expect("SOFT_WRAP_TRAILING regex")
});

/// Leading soft-wrap marker: newline, whitespace, then `=`.
pub static SOFT_WRAP_LEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s*=").expect("SOFT_WRAP_LEADING regex")
});

/// Two or more spaces.
pub static MULTIPLE_SPACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" {2,}").expect("MULTIPLE_SPACES regex")
});

/// Horizontal whitespace run.
pub static HORIZONTAL_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t]+").expect("HORIZONTAL_SPACE regex")
});

/// Two word tokens separated by horizontal whitespace.
pub static WORD_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)[ \t]+(\w+)").expect("WORD_PAIR regex")
});

// =============================================================================
// Line Filter Patterns
// =============================================================================

/// Lines made only of separator characters.
pub static SEPARATOR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[=\-_\s]+$").expect("SEPARATOR_LINE regex")
});

/// Lines made only of non-word characters.
pub static SYMBOL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\W_]+$").expect("SYMBOL_LINE regex")
});

/// Pixel dimensions at the start of a line, e.g. `12px` or `> 4px`.
pub static PIXEL_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[#<>]?\s*\d+px").expect("PIXEL_FRAGMENT regex")
});

/// A word character followed by `=` and whitespace.
pub static EQUALS_AFTER_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w)=\s+").expect("EQUALS_AFTER_WORD regex")
});

/// Whitespace then `=` directly before a word character.
pub static EQUALS_BEFORE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+=(\w)").expect("EQUALS_BEFORE_WORD regex")
});

/// `=` followed by whitespace, anywhere.
pub static EQUALS_TRAILING_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"=\s+").expect("EQUALS_TRAILING_SPACE regex")
});

/// Whitespace followed by `=`, anywhere.
pub static EQUALS_LEADING_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+=").expect("EQUALS_LEADING_SPACE regex")
});

/// Lines that are nothing but a short lowercase hex run (anchor ids).
pub static HEX_FRAGMENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\da-f]{1,6}$").expect("HEX_FRAGMENT_LINE regex")
});

// =============================================================================
// URL and Link Patterns
// =============================================================================

/// Start of an http(s) URL.
pub static URL_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://").expect("URL_SCHEME regex")
});

/// A dot preceded by horizontal space inside a token, e.g. `example .com`.
pub static SPACED_DOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w)[ \t]+\.(\w)").expect("SPACED_DOT regex")
});

/// Parenthesized link target.
pub static LINK_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(https?://[^)]*\)").expect("LINK_TARGET regex")
});

/// Inline Markdown link `[text](target)`.
pub static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\s*\([^)]*\)").expect("MARKDOWN_LINK regex")
});

// =============================================================================
// Heading Patterns
// =============================================================================

/// ATX heading line: marker run and text.
pub static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})[ \t]+(.*)$").expect("HEADING_LINE regex")
});
