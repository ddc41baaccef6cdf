//! Container extraction.
//!
//! A saved page is a multipart document: a block of top-level headers, then
//! parts separated by a boundary line, each with its own `Content-Type:`.
//! The page markup is the `text/html` part; pages that embed frames carry
//! several, and the longest one is taken as the page itself.

use chrono::DateTime;
use url::Url;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::{BODY_REGION, BOUNDARY_PARAM, HTML_CONTENT_TYPE};
use crate::result::ContainerHeaders;

/// The markup section chosen from a container.
///
/// Starts at its `Content-Type: text/html` header and runs up to the next
/// part delimiter or the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSection<'a> {
    text: &'a str,
}

impl<'a> ContentSection<'a> {
    /// Full section text, part headers included.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Interior of the `<body>` element, or the whole section when the
    /// markup has no body delimiters.
    #[must_use]
    pub fn body(&self) -> &'a str {
        BODY_REGION
            .captures(self.text)
            .and_then(|caps| caps.get(1))
            .map_or(self.text, |m| m.as_str())
    }
}

/// Read the top-level header block of a container.
///
/// The block ends at the first blank line. Folded continuation lines (those
/// starting with whitespace) are joined to the header they continue.
#[must_use]
pub fn parse_headers(raw: &str) -> ContainerHeaders {
    let mut unfolded: Vec<String> = Vec::new();
    for line in raw.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            break;
        }
        match unfolded.last_mut() {
            Some(previous) if line.starts_with([' ', '\t']) => {
                previous.push(' ');
                previous.push_str(line.trim());
            }
            _ => unfolded.push(line.to_string()),
        }
    }

    let mut headers = ContainerHeaders::default();
    for line in &unfolded {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match name.trim().to_ascii_lowercase().as_str() {
            "subject" if !value.is_empty() => headers.subject = Some(value.to_string()),
            "date" => headers.date = DateTime::parse_from_rfc2822(value).ok(),
            "snapshot-content-location" => headers.location = Url::parse(value).ok(),
            "content-type" if value.to_ascii_lowercase().starts_with("multipart/") => {
                headers.boundary = BOUNDARY_PARAM
                    .captures(value)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string());
            }
            _ => {}
        }
    }
    headers
}

/// Part delimiter for a container: the declared boundary prefixed with `--`,
/// or the configured fallback marker.
#[must_use]
pub fn part_delimiter(headers: &ContainerHeaders, options: &Options) -> String {
    headers
        .boundary
        .as_ref()
        .map_or_else(|| options.boundary_marker.clone(), |b| format!("--{b}"))
}

/// Every markup section of a container, in order of appearance.
///
/// A section begins at a `text/html` content-type header and ends just before
/// the next `delimiter` or at end of input. Sections never overlap: a second
/// markup header inside an unterminated section belongs to that section.
#[must_use]
pub fn find_sections<'a>(raw: &'a str, delimiter: &str) -> Vec<&'a str> {
    let mut sections = Vec::new();
    let mut pos = 0;

    while let Some(marker) = HTML_CONTENT_TYPE.find_at(raw, pos) {
        let end = if delimiter.is_empty() {
            raw.len()
        } else {
            raw[marker.end()..]
                .find(delimiter)
                .map_or(raw.len(), |offset| marker.end() + offset)
        };
        sections.push(&raw[marker.start()..end]);
        pos = end;
    }

    sections
}

/// Choose the longest markup section of a container.
///
/// Ties go to the section that appears first.
pub fn extract_section<'a>(raw: &'a str, delimiter: &str) -> Result<ContentSection<'a>> {
    let mut best: Option<(&str, usize)> = None;
    for section in find_sections(raw, delimiter) {
        let len = section.chars().count();
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((section, len));
        }
    }

    best.map(|(text, _)| ContentSection { text })
        .ok_or(Error::NotExtractable)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_SAVE: &str = "From: <Saved by Blink>\r\n\
Snapshot-Content-Location: https://example.com/articles/42\r\n\
Subject: Example Article\r\n\
Date: Tue, 1 Aug 2023 10:15:00 -0000\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/related;\r\n\
\ttype=\"text/html\";\r\n\
\tboundary=\"----MultipartBoundary--abc123----\"\r\n\
\r\n\
\r\n\
------MultipartBoundary--abc123----\r\n\
Content-Type: text/html\r\n\
Content-Transfer-Encoding: quoted-printable\r\n\
\r\n\
<html><body><p>Page body</p></body></html>\r\n\
------MultipartBoundary--abc123----\r\n\
Content-Type: text/css\r\n\
\r\n\
p { color: red; }\r\n\
------MultipartBoundary--abc123------\r\n";

    #[test]
    fn parses_top_level_headers_with_folding() {
        let headers = parse_headers(CHROME_SAVE);
        assert_eq!(headers.subject.as_deref(), Some("Example Article"));
        assert_eq!(headers.hostname(), Some("example.com"));
        assert_eq!(
            headers.boundary.as_deref(),
            Some("----MultipartBoundary--abc123----")
        );
        let date = headers.date.unwrap();
        assert_eq!(date.to_rfc3339(), "2023-08-01T10:15:00+00:00");
    }

    #[test]
    fn headers_of_bare_part_have_no_boundary() {
        let headers = parse_headers("Content-Type: text/html\n\n<p>x</p>");
        assert_eq!(headers, ContainerHeaders::default());
    }

    #[test]
    fn delimiter_prefers_declared_boundary() {
        let options = Options::default();
        let headers = parse_headers(CHROME_SAVE);
        assert_eq!(
            part_delimiter(&headers, &options),
            "------MultipartBoundary--abc123----"
        );
        assert_eq!(
            part_delimiter(&ContainerHeaders::default(), &options),
            "------MultipartBoundary"
        );
    }

    #[test]
    fn section_stops_at_next_delimiter() {
        let section = extract_section(CHROME_SAVE, "------MultipartBoundary--abc123----").unwrap();
        assert!(section.as_str().starts_with("Content-Type: text/html"));
        assert!(section.as_str().contains("Page body"));
        assert!(!section.as_str().contains("color: red"));
        assert_eq!(section.body(), "<p>Page body</p>");
    }

    #[test]
    fn longest_section_wins() {
        let raw = "--B\nContent-Type: text/html\n\n<body>short</body>\n\
--B\nContent-Type: text/html\n\n<body>the much longer page body</body>\n--B--";
        let section = extract_section(raw, "--B").unwrap();
        assert_eq!(section.body(), "the much longer page body");
    }

    #[test]
    fn equal_length_sections_keep_the_first() {
        let raw = "--B\nContent-Type: text/html\n\n<body>first</body>\n\
--B\nContent-Type: text/html\n\n<body>other</body>\n";
        let section = extract_section(raw, "--B").unwrap();
        assert_eq!(section.body(), "first");
    }

    #[test]
    fn section_without_delimiter_runs_to_end() {
        let raw = "Content-Type: text/html\n\n<body><p>tail</p></body>";
        let sections = find_sections(raw, "------MultipartBoundary");
        assert_eq!(sections, vec![raw]);
    }

    #[test]
    fn body_falls_back_to_whole_section() {
        let raw = "Content-Type: text/html\n\n<p>no body tag</p>";
        let section = extract_section(raw, "--B").unwrap();
        assert_eq!(section.body(), raw);
    }

    #[test]
    fn missing_markup_part_is_not_extractable() {
        let raw = "Content-Type: text/plain\n\njust text";
        assert!(matches!(
            extract_section(raw, "--B"),
            Err(Error::NotExtractable)
        ));
    }
}
