//! Error types for the Rinku library.
//!
//! All fallible operations in the crate return [`Result`], whose error type
//! is the [`RinkuError`] enum.
//!
//! # Examples
//!
//! ```
//! use rinku::error::{Result, RinkuError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RinkuError::invalid_input("word text must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Rinku operations.
///
/// Propagation policy: `DataUnavailable` and `InvalidInput` abort the
/// operation that raised them, while `UpstreamUnavailable` is absorbed
/// per-character by the consolidated graph builder, which degrades the
/// graph instead of failing the whole request. Absence of a word or kanji
/// is reported as `Ok(None)` by the lookup APIs, not as an error; the
/// `NotFound` variant exists for surfaces (such as the CLI) that must
/// report absence as a failure.
#[derive(Error, Debug)]
pub enum RinkuError {
    /// I/O errors (reading the corpus file, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backing corpus could not be loaded or parsed
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// A requested word or kanji is absent from the current index
    #[error("Not found: {0}")]
    NotFound(String),

    /// The external lookup provider failed or timed out
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A required parameter is missing or malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RinkuError.
pub type Result<T> = std::result::Result<T, RinkuError>;

impl RinkuError {
    /// Create a new data-unavailable error.
    pub fn data_unavailable<S: Into<String>>(msg: S) -> Self {
        RinkuError::DataUnavailable(msg.into())
    }

    /// Create a new not-found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        RinkuError::NotFound(msg.into())
    }

    /// Create a new upstream-unavailable error.
    pub fn upstream<S: Into<String>>(msg: S) -> Self {
        RinkuError::UpstreamUnavailable(msg.into())
    }

    /// Create a new invalid-input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        RinkuError::InvalidInput(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RinkuError::Other(msg.into())
    }

    /// Create a new timeout error, reported as upstream unavailability.
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        RinkuError::UpstreamUnavailable(format!("Timeout: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = RinkuError::data_unavailable("corpus file missing");
        assert_eq!(error.to_string(), "Data unavailable: corpus file missing");

        let error = RinkuError::invalid_input("empty character");
        assert_eq!(error.to_string(), "Invalid input: empty character");

        let error = RinkuError::upstream("jisho returned 502");
        assert_eq!(
            error.to_string(),
            "Upstream unavailable: jisho returned 502"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let rinku_error = RinkuError::from(io_error);

        match rinku_error {
            RinkuError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_timeout_maps_to_upstream() {
        let error = RinkuError::timeout("lookup for 日");
        match error {
            RinkuError::UpstreamUnavailable(msg) => assert!(msg.starts_with("Timeout:")),
            _ => panic!("Expected upstream variant"),
        }
    }
}
