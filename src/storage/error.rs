//! Persistence errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned by a [`ThemeStorage`](super::ThemeStorage) backend.
///
/// The store never surfaces these to callers; they are logged and the
/// in-memory state stays authoritative.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend cannot be used at all (disabled, private mode, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the write because it is full.
    #[error("storage quota exceeded while writing '{key}'")]
    QuotaExceeded { key: String },

    /// Reading or writing the backing file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("malformed storage file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
