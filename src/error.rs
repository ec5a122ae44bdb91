//! Error types for the zhseg library.
//!
//! All fallible operations return [`ZhsegError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use zhseg::error::{Result, ZhsegError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ZhsegError::invalid_input_type("need str|bytes input, but found number"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for zhseg operations.
#[derive(Error, Debug)]
pub enum ZhsegError {
    /// I/O errors (dictionary files, configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (segmentation, invalid patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Dictionary loading errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested segmentation engine is not compiled into this build.
    #[error("Backend '{backend}' is unavailable: {hint}")]
    BackendUnavailable { backend: String, hint: String },

    /// A single-unit call received something that is neither text nor decodable bytes.
    #[error("Invalid input type: {0}")]
    InvalidInputType(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ZhsegError.
pub type Result<T> = std::result::Result<T, ZhsegError>;

impl ZhsegError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ZhsegError::Analysis(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        ZhsegError::Dictionary(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ZhsegError::Config(msg.into())
    }

    /// Create a new backend unavailable error with a remediation hint.
    pub fn backend_unavailable<B: Into<String>, H: Into<String>>(backend: B, hint: H) -> Self {
        ZhsegError::BackendUnavailable {
            backend: backend.into(),
            hint: hint.into(),
        }
    }

    /// Create a new invalid input type error.
    pub fn invalid_input_type<S: Into<String>>(msg: S) -> Self {
        ZhsegError::InvalidInputType(msg.into())
    }
}
