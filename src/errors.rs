/*!
 * Error types for the subtempo library.
 *
 * This module contains custom error types for different parts of the library,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when parsing canonical time strings
#[derive(Error, Debug)]
pub enum TimeError {
    /// The string does not match the `H:MM:SS.mmm` grammar
    #[error("time string {0:?} does not match H:MM:SS.mmm")]
    InvalidTimeString(String),
}

/// Hard failures of a whole-file codec operation.
///
/// Isolated malformed lines are never errors; codecs skip them and continue.
#[derive(Error, Debug)]
pub enum FormatError {
    /// No registered format recognizes the file content
    #[error("no registered format matches the file content")]
    UnknownFormat,

    /// The codec matched the file but produced no entries
    #[error("no subtitle entries were found in the input")]
    NoEntries,

    /// A structurally required time value failed to parse
    #[error("time value error: {0}")]
    Time(#[from] TimeError),
}

/// Main library error type that wraps all other errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a format codec
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Error from time parsing
    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for CoreError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
