//! Result types for conversion output.
//!
//! This module defines the cleaned document produced for one container and
//! the provenance headers read from the container itself.

use chrono::{DateTime, FixedOffset};
use url::Url;

/// Top-level headers of a saved page container.
///
/// All fields are optional since producers disagree on what they write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerHeaders {
    /// `Subject:` header, usually the page title at save time.
    pub subject: Option<String>,

    /// `Date:` header, when the page was saved.
    pub date: Option<DateTime<FixedOffset>>,

    /// `Snapshot-Content-Location:` header, the page's original address.
    pub location: Option<Url>,

    /// Multipart boundary declared in the top-level `Content-Type:` header.
    pub boundary: Option<String>,
}

impl ContainerHeaders {
    /// Hostname of the saved page, if its location is known.
    #[must_use]
    pub fn hostname(&self) -> Option<&str> {
        self.location.as_ref().and_then(Url::host_str)
    }
}

/// Final output of one conversion.
///
/// The title is never empty: it comes from a qualifying heading in the text
/// or, failing that, from the input file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedDocument {
    /// Document title, without heading markers.
    pub title: String,

    /// Cleaned body, one entry per line.
    pub body: Vec<String>,

    /// Provenance read from the container.
    pub headers: ContainerHeaders,
}

impl CleanedDocument {
    /// Render the document as Markdown: a level-1 title heading, a blank
    /// line, then the body.
    ///
    /// ```
    /// use mhtml2md::CleanedDocument;
    ///
    /// let doc = CleanedDocument {
    ///     title: "Notes".to_string(),
    ///     body: vec!["first".to_string(), "second".to_string()],
    ///     ..CleanedDocument::default()
    /// };
    /// assert_eq!(doc.to_markdown(), "# Notes\n\nfirst\nsecond");
    /// ```
    #[must_use]
    pub fn to_markdown(&self) -> String {
        format!("# {}\n\n{}", self.title, self.body.join("\n"))
    }

    /// Body text as a single string.
    #[must_use]
    pub fn body_text(&self) -> String {
        self.body.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_still_renders_title() {
        let doc = CleanedDocument {
            title: "page".to_string(),
            ..CleanedDocument::default()
        };
        assert_eq!(doc.to_markdown(), "# page\n\n");
    }

    #[test]
    fn hostname_comes_from_location() {
        let headers = ContainerHeaders {
            location: Url::parse("https://blog.example.com/post/1").ok(),
            ..ContainerHeaders::default()
        };
        assert_eq!(headers.hostname(), Some("blog.example.com"));
        assert_eq!(ContainerHeaders::default().hostname(), None);
    }
}
