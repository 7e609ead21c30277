//! Error handling for the toyc driver.
//!
//! Lexical errors are not `DriverError`s while scanning; they are collected
//! by the `Handler`. Once output has been written, a non-zero error count
//! is turned into [`DriverError::LexicalErrors`] so the process fails.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the toyc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The input file could not be read.
    #[error("could not read `{}`: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// A token could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the token stream failed.
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),

    /// Scanning finished but reported errors.
    #[error("aborting due to {0} lexical error{}", plural(.0))]
    LexicalErrors(usize),
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
