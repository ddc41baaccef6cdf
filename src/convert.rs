//! Conversion pipeline for one container.
//!
//! Stages run strictly in order: container extraction, markup reduction,
//! Markdown rendering, text normalization. Only the first stage can fail.

use std::path::Path;

use tracing::{debug, warn};

use crate::container;
use crate::encoding;
use crate::error::{Error, Result};
use crate::html_processing;
use crate::markdown;
use crate::normalize;
use crate::options::Options;
use crate::result::CleanedDocument;

/// Run the full pipeline over container text.
pub(crate) fn convert_content(
    raw: &str,
    fallback_title: &str,
    options: &Options,
) -> Result<CleanedDocument> {
    let headers = container::parse_headers(raw);
    let delimiter = container::part_delimiter(&headers, options);

    let section = container::extract_section(raw, &delimiter).inspect_err(|_| {
        warn!(fallback_title, "no text/html section found");
    })?;
    let body = section.body();
    debug!(
        raw_len = raw.len(),
        section_len = section.as_str().len(),
        body_len = body.len(),
        "container section extracted"
    );

    let reduced = html_processing::reduce(body, options);
    let rendered = markdown::render(&reduced, options);
    debug!(reduced_len = reduced.len(), markdown_len = rendered.len(), "markup rendered");

    let (title, body) = normalize::normalize(&rendered, fallback_title, options);
    debug!(%title, lines = body.len(), "text normalized");

    Ok(CleanedDocument {
        title,
        body,
        headers,
    })
}

/// Decode raw bytes part by part, then run the pipeline.
///
/// The container header is plain ASCII, so the part delimiter is read before
/// any charset is chosen.
pub(crate) fn convert_bytes(
    raw: &[u8],
    fallback_title: &str,
    options: &Options,
) -> Result<CleanedDocument> {
    let head = String::from_utf8_lossy(&raw[..raw.len().min(encoding::SNIFF_LIMIT)]);
    let delimiter = container::part_delimiter(&container::parse_headers(&head), options);
    let text = encoding::transcode_parts(raw, &delimiter);
    convert_content(&text, fallback_title, options)
}

/// Read a container file and convert it, using the file stem as the
/// fallback title.
pub(crate) fn convert_file(path: &Path, options: &Options) -> Result<CleanedDocument> {
    let raw = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    convert_bytes(&raw, &stem, options)
}
