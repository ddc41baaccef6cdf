//! Batch conversion of a directory.
//!
//! Every container file directly inside the directory is converted to a
//! Markdown file beside it. A file that fails is reported and skipped; only
//! an unusable directory stops the run.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::convert;
use crate::error::{Error, Result};
use crate::options::Options;

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Markdown files written, in processing order.
    pub converted: Vec<PathBuf>,

    /// Inputs that produced no output, with the reason.
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    /// Number of inputs seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

/// Container files directly inside `dir`, sorted by name.
///
/// A name qualifies when it ends with `.{extension}` (case-sensitive) and
/// names a regular file.
pub fn discover(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::InvalidDirectory(dir.to_path_buf()));
    }

    let suffix = format!(".{extension}");
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(&suffix));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Output path for an input: same directory, same stem, output extension.
#[must_use]
pub fn output_path(input: &Path, options: &Options) -> PathBuf {
    input.with_extension(&options.output_extension)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn progress(out: &mut impl Write, line: &str) {
    if let Err(e) = writeln!(out, "{line}") {
        warn!(error = %e, "could not write progress line");
    }
}

fn convert_one(input: &Path, options: &Options) -> Result<PathBuf> {
    let document = convert::convert_file(input, options)?;
    let output = output_path(input, options);
    fs::write(&output, document.to_markdown()).map_err(|e| Error::io(&output, e))?;
    Ok(output)
}

/// Convert every container in `dir`, writing progress lines to `out`.
///
/// Existing outputs are overwritten. The returned report lists what was
/// written and what failed.
pub fn convert_directory(
    dir: &Path,
    options: &Options,
    out: &mut impl Write,
) -> Result<BatchReport> {
    let inputs = discover(dir, &options.input_extension)?;
    info!(dir = %dir.display(), count = inputs.len(), "starting batch");

    let mut report = BatchReport::default();
    for input in inputs {
        let name = display_name(&input);
        progress(out, &format!("Converting {name}..."));

        match convert_one(&input, options) {
            Ok(output) => {
                info!(output = %output.display(), "wrote markdown");
                progress(out, &format!("  Created {}", display_name(&output)));
                report.converted.push(output);
            }
            Err(Error::NotExtractable) => {
                progress(out, &format!("  Could not extract HTML content from {name}"));
                report.failed.push((input, Error::NotExtractable));
            }
            Err(e) => {
                warn!(input = %input.display(), error = %e, "conversion failed");
                progress(out, &format!("  Failed to convert {name}: {e}"));
                report.failed.push((input, e));
            }
        }
    }

    progress(out, "Conversion complete!");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_swaps_extension() {
        let options = Options::default();
        assert_eq!(
            output_path(Path::new("/tmp/pages/a.b.mhtml"), &options),
            PathBuf::from("/tmp/pages/a.b.md")
        );
    }

    #[test]
    fn missing_directory_is_rejected() {
        let err = discover(Path::new("/definitely/not/here"), "mhtml").unwrap_err();
        assert!(matches!(err, Error::InvalidDirectory(_)));
        assert_eq!(err.to_string(), "/definitely/not/here is not a valid directory");
    }

    #[test]
    fn discovery_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.mhtml", "a.mhtml", "notes.txt", "c.MHTML", "page.mhtml.bak"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("folder.mhtml")).unwrap();

        let found: Vec<String> = discover(dir.path(), "mhtml")
            .unwrap()
            .iter()
            .map(|p| display_name(p))
            .collect();
        assert_eq!(found, vec!["a.mhtml", "b.mhtml"]);
    }
}
