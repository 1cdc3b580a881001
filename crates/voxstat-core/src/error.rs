//! Error types for voxstat-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by the transcript store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("store I/O failed for {path}: {source}")]
    Io {
        /// File the operation touched.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A stored line could not be parsed as a record.
    #[error("malformed record at {path}:{line}: {source}")]
    Malformed {
        /// Store file containing the bad line.
        path: Utf8PathBuf,
        /// 1-indexed line number.
        line: usize,
        /// Parse failure.
        source: serde_json::Error,
    },

    /// A record could not be encoded for storage.
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    /// The store lock was poisoned by a panicking writer.
    #[error("transcript store lock poisoned")]
    Poisoned,
}

/// Result type alias using [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during ingestion or analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input text is empty or whitespace only.
    #[error("no text in input")]
    EmptyInput,

    /// A user identifier failed validation.
    #[error("invalid user id {id:?}: {reason}")]
    InvalidUserId {
        /// The rejected identifier.
        id: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// An n-gram width of zero was requested.
    #[error("n-gram width must be at least 1")]
    InvalidNgramWidth,

    /// The corpus provider failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
