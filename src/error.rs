//! Error types for mhtml2md.
//!
//! Only two things can go wrong while converting: the container holds no
//! markup section at all, or the filesystem refuses a read or a write. Every
//! text stage after extraction is total and degrades instead of failing.

use std::path::PathBuf;

/// Error type for conversion operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The container has no `Content-Type: text/html` section.
    #[error("Could not extract HTML content")]
    NotExtractable,

    /// The batch argument does not name an existing directory.
    #[error("{} is not a valid directory", .0.display())]
    InvalidDirectory(PathBuf),

    /// Reading an input or writing an output failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
