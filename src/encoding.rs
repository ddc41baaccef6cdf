//! Character encoding detection and transcoding.
//!
//! Saved pages declare their charset on the markup part header
//! (`Content-Type: text/html; charset="windows-1252"`) and sometimes again in a
//! `<meta>` tag. Each part of a container may declare its own, so
//! [`transcode_parts`] decodes part by part; [`transcode_to_utf8`] applies the
//! first declaration to the whole input. Neither fails on bad bytes.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Match the charset parameter of a markup part header.
#[allow(clippy::expect_used)]
static PART_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)content-type:\s*text/html\s*;\s*charset\s*=\s*["']?([^"'\s;]+)"#)
        .expect("valid regex")
});

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*(?:3D)?["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Header bytes examined for a declaration.
pub(crate) const SNIFF_LIMIT: usize = 64 * 1024;

/// Detect the character encoding of a container or of one part.
///
/// Looks for charset declarations in the following order:
/// 1. the `text/html` part header
/// 2. `<meta charset="...">`
/// 3. Defaults to UTF-8 if no declaration resolves
///
/// Only the first declaration within the first 64 KiB counts. On a whole
/// container that may belong to a frame rather than the main page; use
/// [`transcode_parts`] when the part delimiter is known.
#[must_use]
pub fn detect_encoding(raw: &[u8]) -> &'static Encoding {
    let head = &raw[..raw.len().min(SNIFF_LIMIT)];
    let head_str = String::from_utf8_lossy(head);

    [&*PART_CHARSET_RE, &*CHARSET_META_RE]
        .into_iter()
        .filter_map(|re| re.captures(&head_str))
        .filter_map(|caps| caps.get(1))
        .find_map(|m| Encoding::for_label(m.as_str().as_bytes()))
        // The header was just read as ASCII, so UTF-16 labels cannot be right.
        .map_or(UTF_8, Encoding::output_encoding)
}

/// Transcode container bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than reported.
///
/// # Examples
///
/// ```
/// use mhtml2md::encoding::transcode_to_utf8;
///
/// let raw = b"Content-Type: text/html; charset=\"iso-8859-1\"\n\n<p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(raw).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(raw: &[u8]) -> String {
    decode(raw, detect_encoding(raw)).into_owned()
}

/// Transcode a container part by part.
///
/// The input is split on `delimiter` and every piece is decoded with the
/// charset it declares itself, UTF-8 otherwise. Delimiters are kept, so the
/// result has the same part layout as the input.
#[must_use]
pub fn transcode_parts(raw: &[u8], delimiter: &str) -> String {
    if delimiter.is_empty() {
        return transcode_to_utf8(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    loop {
        let Some(at) = find_bytes(rest, delimiter.as_bytes()) else {
            out.push_str(&decode(rest, detect_encoding(rest)));
            return out;
        };
        let part = &rest[..at];
        out.push_str(&decode(part, detect_encoding(part)));
        out.push_str(delimiter);
        rest = &rest[at + delimiter.len()..];
    }
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn decode<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Cow<'a, str> {
    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes);
    }
    let (decoded, _encoding_used, _had_errors) = encoding.decode(bytes);
    decoded
}
