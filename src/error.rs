//! Error types for the wordladder library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LadderError`] enum. Some variants are recoverable outcomes rather than
//! failures: an unreadable source is logged and skipped during a build, and
//! a query for an unknown word or an unreachable pair is reported back to
//! the caller.
//!
//! # Examples
//!
//! ```
//! use wordladder::error::{LadderError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LadderError::invalid_query("start and end are the same word"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordladder operations.
#[derive(Error, Debug)]
pub enum LadderError {
    /// I/O errors (file operations, terminal, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A synset source could not be read or parsed
    #[error("Source unreadable: {name}: {reason}")]
    SourceUnreadable { name: String, reason: String },

    /// Every configured source failed to load
    #[error("No usable synset sources: {0}")]
    NoUsableSources(String),

    /// A query referenced a word that is not in the graph
    #[error("Word not known: '{0}'")]
    WordUnknown(String),

    /// Search exhausted the reachable words without meeting the target
    #[error("No path found from '{start}' to '{end}'")]
    NoPathFound { start: String, end: String },

    /// Query rejected before search
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The optional visited-word guard tripped
    #[error("Search limit exceeded: more than {0} words visited")]
    SearchLimitExceeded(usize),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LadderError.
pub type Result<T> = std::result::Result<T, LadderError>;

impl LadderError {
    /// Create a new source unreadable error.
    pub fn source_unreadable<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        LadderError::SourceUnreadable {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new word unknown error.
    pub fn word_unknown<S: Into<String>>(word: S) -> Self {
        LadderError::WordUnknown(word.into())
    }

    /// Create a new no path found error.
    pub fn no_path<S: Into<String>, E: Into<String>>(start: S, end: E) -> Self {
        LadderError::NoPathFound {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Create a new invalid query error.
    pub fn invalid_query<S: Into<String>>(msg: S) -> Self {
        LadderError::InvalidQuery(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LadderError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LadderError::Other(msg.into())
    }
}
