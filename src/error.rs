//! Error types for Strigo client operations.
//!
//! This module defines [`StrigoError`], the error type used throughout the
//! client, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - No error is recovered locally; every variant ends the process with exit code 1
//! - [`StrigoError::diagnostic_lines`] renders what the user sees on stdout

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Strigo client operations.
#[derive(Debug, Error)]
pub enum StrigoError {
    /// One or more required credential environment variables are not set.
    #[error("Missing credentials: {}", .vars.join(", "))]
    MissingCredentials { vars: Vec<&'static str> },

    /// The command was invoked without a required value.
    #[error("{message}")]
    Usage { message: String },

    /// The API reported a failure, or answered with something that is not an envelope.
    #[error("API request failed: {body}")]
    Api { body: String },

    /// The configured API base URL could not be parsed.
    #[error("Invalid API base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// A student list file could not be read.
    #[error("Failed to read student file {path}: {source}")]
    StudentFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response payload did not have the expected shape.
    #[error("Unexpected response payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl StrigoError {
    /// Lines to print when this error terminates the process.
    ///
    /// API failures print the raw response body untouched, and missing
    /// credentials print one line per absent variable.
    pub fn diagnostic_lines(&self) -> Vec<String> {
        match self {
            Self::MissingCredentials { vars } => vars
                .iter()
                .map(|var| format!("ERROR: Environment Variable '{}' not set.", var))
                .collect(),
            Self::Api { body } => vec![body.clone()],
            other => vec![format!("Error: {}", other)],
        }
    }
}

/// Result type alias for Strigo client operations.
pub type Result<T> = std::result::Result<T, StrigoError>;
