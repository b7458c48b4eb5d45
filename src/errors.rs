/*!
 * Error types for the doctrans application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the document translation service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when sending a request to the service fails (transport level)
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing a service response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the service itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the service response body
        message: String,
    },

    /// Error reading the local document before submission
    #[error("Failed to read document: {0}")]
    DocumentRead(String),
}

/// Errors that can occur while driving a single document through translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the service client
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The service reported the translation as failed
    #[error("Service reported translation failure for {file}")]
    RemoteFailure {
        /// Name of the offending input file
        file: String,
    },

    /// The status poll budget was exhausted before a terminal status appeared
    #[error("Translation did not finish within {attempts} status checks")]
    PollLimitExceeded {
        /// Number of poll attempts made
        attempts: u32,
    },

    /// Error writing the translated artifact to disk
    #[error("Failed to write output file: {0}")]
    OutputWrite(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the service client
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the translation workflow
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

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
