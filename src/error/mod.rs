//! Error handling module for the chapter converter

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for chapter conversion
#[derive(Error, Debug)]
pub enum ConverterError {
    /// Neither a readable input file nor clipboard data was available
    #[error("No input: {reason}")]
    NoInput { reason: String },

    /// The format detector exhausted every rule
    #[error("Can't guess the chapter format of the input")]
    UnknownFormat,

    /// OGM input ended in the middle of a CHAPTERnn / CHAPTERnnNAME pair
    #[error("Truncated OGM input: line {line} has no matching name line")]
    TruncatedInput { line: usize },

    /// Malformed timestamp or chapter line
    #[error("Failed to parse '{input}': {reason}")]
    ParseError { input: String, reason: String },

    /// Millisecond value that is negative, non-numeric or out of range
    #[error("Invalid millisecond value: {value}")]
    InvalidInput { value: String },

    /// A container tool ran but reported failure
    #[error("{tool} failed with {status}: {stderr}")]
    ExternalToolFailure {
        tool: String,
        status: String,
        stderr: String,
    },

    /// A container tool could not be located
    #[error("{tool} not found; is MKVToolNix installed and in PATH?")]
    ToolNotFound { tool: String },

    /// Clipboard access failed
    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    /// Unknown charset label or text not representable in it
    #[error("Encoding error: {message}")]
    Encoding { message: String },

    /// Invalid configuration file or value
    #[error("Configuration error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConverterError {
    /// Shorthand for a [`ConverterError::ParseError`]
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParseError {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for chapter conversion
pub type ConverterResult<T> = std::result::Result<T, ConverterError>;
