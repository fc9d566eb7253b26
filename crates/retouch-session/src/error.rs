//! Session-level errors.
//!
//! Every error here is recoverable: it is reported to the caller and the
//! session keeps its prior state. No error terminates the session.

use std::path::PathBuf;

use retouch_filters::RasterError;

/// Errors surfaced by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The image file could not be read from disk.
    #[error("failed to read image file {path}: {source}")]
    Read {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but could not be decoded as an image.
    #[error(transparent)]
    Raster(#[from] RasterError),
}
