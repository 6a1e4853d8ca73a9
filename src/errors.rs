/*!
 * Error types for the subtidy application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur during subtitle processing
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Error when a timestamp cannot be parsed
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    /// Error when no usable entries are found in a file
    #[error("No valid subtitle entries were found in {0}")]
    EmptyTrack(String),

    /// Error when an entry is structurally unusable
    #[error("Invalid subtitle entry {seq_num}: {reason}")]
    InvalidEntry {
        /// Sequence number of the offending entry
        seq_num: usize,
        /// What was wrong with it
        reason: String,
    },
}

/// Errors that can occur when loading a term dictionary
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error reading the dictionary file
    #[error("Failed to read dictionary file: {0}")]
    ReadFailed(String),

    /// Error parsing the dictionary contents
    #[error("Failed to parse dictionary: {0}")]
    ParseError(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from the term dictionary
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
