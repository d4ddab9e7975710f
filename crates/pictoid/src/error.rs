//! Error types for pictoid.
//!
//! Every failure the annotator or the configuration layer can hit is a
//! variant of [`Error`]. The binary turns any of them into a single
//! `Error: ...` line and exit status 1.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pictoid operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    /// The input file does not exist.
    #[error("Input file '{}' not found.", path.display())]
    InputNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Failed to read the input file.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid JSON.
    #[error("failed to parse {} as JSON: {source}", path.display())]
    Parse {
        /// Path being parsed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// JSON text handed over without a file is not valid.
    #[error("failed to parse JSON: {source}")]
    ParseText {
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    // === Shape Errors ===
    /// The root JSON value is not an array.
    #[error("root value is not a list (found {found})")]
    NotAList {
        /// JSON kind of the root value.
        found: &'static str,
    },

    /// An element of the list cannot carry an `id` field.
    #[error("element at index {index} is not an object (found {found})")]
    ElementNotObject {
        /// Zero-based position of the element.
        index: usize,
        /// JSON kind of the element.
        found: &'static str,
    },

    // === Output Errors ===
    /// Failed to render the annotated document.
    #[error("failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write the destination file.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for pictoid operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an input-not-found error.
    #[must_use]
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }
}
