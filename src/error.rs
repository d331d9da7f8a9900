//! Error types for the Pickline library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`PicklineError`] enum. User input never produces an error: a query that
//! matches nothing narrows the result set, and an out-of-range selection
//! resolves to "no entry". Errors are reserved for I/O, malformed input
//! lines, bad configuration and terminal failures.
//!
//! # Examples
//!
//! ```
//! use pickline::error::{PicklineError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PicklineError::config("unknown line format"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Pickline operations.
#[derive(Error, Debug)]
pub enum PicklineError {
    /// I/O errors (stdin, files, spawned processes).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line could not be parsed under the configured format.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid configuration or command line arguments.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failures while enumerating input lines.
    #[error("Source error: {0}")]
    Source(String),

    /// Terminal setup, drawing or input failures.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A channel between the ingestion, event and presentation threads closed unexpectedly.
    #[error("Channel error: {0}")]
    Channel(String),

    /// Rendering the selected entry failed.
    #[error("Output error: {0}")]
    Output(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid regular expression.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with PicklineError.
pub type Result<T> = std::result::Result<T, PicklineError>;

impl PicklineError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        PicklineError::Parse(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PicklineError::Config(msg.into())
    }

    /// Create a new source error.
    pub fn line_source<S: Into<String>>(msg: S) -> Self {
        PicklineError::Source(msg.into())
    }

    /// Create a new terminal error.
    pub fn terminal<S: Into<String>>(msg: S) -> Self {
        PicklineError::Terminal(msg.into())
    }

    /// Create a new channel error.
    pub fn channel<S: Into<String>>(msg: S) -> Self {
        PicklineError::Channel(msg.into())
    }

    /// Create a new output error.
    pub fn output<S: Into<String>>(msg: S) -> Self {
        PicklineError::Output(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        PicklineError::Other(format!("Internal error: {}", msg.into()))
    }
}
