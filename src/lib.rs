//! # mhtml2md
//!
//! Batch conversion of saved web-page archives (MHTML) into cleaned Markdown.
//!
//! A container is converted in four stages: the largest `text/html` part is
//! pulled out of the multipart container, the markup is pruned down to its
//! main content, the result is rendered as Markdown, and a chain of cleanup
//! passes removes the artifacts the container format leaves behind.
//!
//! ## Quick Start
//!
//! ```rust
//! use mhtml2md::convert;
//!
//! let raw = "Content-Type: multipart/related; boundary=\"B\"\n\n\
//! --B\nContent-Type: text/html\n\n\
//! <html><body><main><h1>Title</h1><p>Hello world.</p></main></body></html>\n--B--\n";
//!
//! let doc = convert(raw, "saved-page")?;
//! assert_eq!(doc.title, "Title");
//! assert_eq!(doc.to_markdown(), "# Title\n\nHello world.");
//! # Ok::<(), mhtml2md::Error>(())
//! ```
//!
//! ## Configuration
//!
//! Every heuristic lives in [`Options`]. The [`Preset`]s reproduce the known
//! pipeline variants; individual fields can be overridden on top of them.

mod convert;
mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Container header parsing and markup section extraction.
pub mod container;

/// Main-content selection by priority list.
pub mod selector;

/// HTML processing and pruning functions.
pub mod html_processing;

/// Markdown rendering.
pub mod markdown;

/// Text cleanup passes and title extraction.
pub mod normalize;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Directory batch conversion.
pub mod batch;

use std::path::Path;

// Public API - re-exports
pub use batch::{convert_directory, BatchReport};
pub use error::{Error, Result};
pub use normalize::CleanupPass;
pub use options::{ContentSelector, ImageMode, Options, Preset, TitleRule, WordJoinPolicy};
pub use result::{CleanedDocument, ContainerHeaders};

/// Converts container text using default options.
///
/// `fallback_title` is used when the text has no qualifying heading; it is
/// normally the input file's stem.
///
/// # Errors
///
/// Returns [`Error::NotExtractable`] when the container has no `text/html`
/// part.
pub fn convert(raw: &str, fallback_title: &str) -> Result<CleanedDocument> {
    convert_with_options(raw, fallback_title, &Options::default())
}

/// Converts container text with custom options.
///
/// # Example
///
/// ```rust
/// use mhtml2md::{convert_with_options, Options, Preset};
///
/// let raw = "Content-Type: text/html\n\n<body><p>Just a note.</p></body>";
/// let doc = convert_with_options(raw, "note", &Options::preset(Preset::Classic))?;
/// assert_eq!(doc.title, "note");
/// # Ok::<(), mhtml2md::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::NotExtractable`] when the container has no `text/html`
/// part.
pub fn convert_with_options(
    raw: &str,
    fallback_title: &str,
    options: &Options,
) -> Result<CleanedDocument> {
    convert::convert_content(raw, fallback_title, options)
}

/// Converts raw container bytes with automatic encoding detection.
///
/// The charset is taken from the markup part header, then from a `<meta>`
/// declaration, and defaults to UTF-8. Invalid sequences are replaced with
/// U+FFFD rather than causing errors.
///
/// # Errors
///
/// Returns [`Error::NotExtractable`] when the container has no `text/html`
/// part.
pub fn convert_bytes(raw: &[u8], fallback_title: &str, options: &Options) -> Result<CleanedDocument> {
    convert::convert_bytes(raw, fallback_title, options)
}

/// Reads and converts one container file. The file stem is the fallback
/// title.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and
/// [`Error::NotExtractable`] when it has no `text/html` part.
pub fn convert_file(path: &Path, options: &Options) -> Result<CleanedDocument> {
    convert::convert_file(path, options)
}
