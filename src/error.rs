//! Error types for Pixio

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Pixio operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a data file failed
    #[error("Failed to access '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file did not contain the expected JSON
    #[error("Failed to parse JSON from '{}': {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a value to JSON failed
    #[error("Failed to serialize data: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A timestamp argument was not valid RFC 3339
    #[error("Invalid timestamp '{input}': {source}")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}
