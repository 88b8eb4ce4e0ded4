//! Error types for sift
//!
//! Ingestion has exactly one failure mode: the named source cannot be
//! read. Degenerate input (empty lines, all-punctuation words, empty
//! queries) is never an error. We use `thiserror` for automatic `Display`
//! and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for sift operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sift
#[derive(Debug, Error)]
pub enum Error {
    /// The named source could not be opened, or a read failed mid-stream
    #[error("source unavailable: {name}: {cause}")]
    SourceUnavailable {
        /// Identifier of the source (usually a file path)
        name: String,
        /// Underlying I/O failure
        #[source]
        cause: io::Error,
    },

    /// Configuration file could not be read, parsed, or written
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build a `SourceUnavailable` error for the named source
    pub fn source_unavailable(name: impl Into<String>, cause: io::Error) -> Self {
        Error::SourceUnavailable {
            name: name.into(),
            cause,
        }
    }

    /// Check whether this is a `SourceUnavailable` error
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Error::SourceUnavailable { .. })
    }
}
