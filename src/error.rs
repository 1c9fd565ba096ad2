//! Error types for the Lancea library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LanceaError`] enum.
//!
//! # Examples
//!
//! ```
//! use lancea::error::{LanceaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LanceaError::query("malformed query"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lancea operations.
#[derive(Error, Debug)]
pub enum LanceaError {
    /// I/O errors (reading a document source, writing output, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document source file does not exist.
    #[error("source not found: {0}")]
    SourceNotFound(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Index-related errors
    #[error("Index error: {0}")]
    Index(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`LanceaError`].
pub type Result<T> = std::result::Result<T, LanceaError>;

impl LanceaError {
    /// Create a new source-not-found error.
    pub fn source_not_found<S: Into<String>>(path: S) -> Self {
        LanceaError::SourceNotFound(path.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LanceaError::Analysis(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        LanceaError::Index(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        LanceaError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LanceaError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LanceaError::analysis("bad token");
        assert_eq!(err.to_string(), "Analysis error: bad token");

        let err = LanceaError::source_not_found("missing.txt");
        assert_eq!(err.to_string(), "source not found: missing.txt");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: LanceaError = io_err.into();
        assert!(matches!(err, LanceaError::Io(_)));
    }
}
