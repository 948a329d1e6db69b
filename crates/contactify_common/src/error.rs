// --- File: crates/contactify_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Contactify errors.
///
/// This enum mirrors the failure taxonomy of the application: transport
/// failures, server-side rejections carrying a message payload (validation
/// rejections and anything else unclassified), not-found lookups, and decode
/// failures. The service client classifies, logs and returns these
/// unchanged; controllers decide what (if anything) is shown to the user.
#[derive(Error, Debug)]
pub enum ContactifyError {
    /// Error occurred during an HTTP request (connection, TLS, I/O)
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error returned by the contact API with a message payload
    #[error("Contact API returned an error: {message} (status {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),
}

impl ContactifyError {
    /// The human-readable message supplied by the server, if this error
    /// carries one. Used by the write paths, which prefer the server's own
    /// wording over a generic fallback.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ContactifyError::ApiError { message, .. } => Some(message),
            ContactifyError::NotFoundError(message) => Some(message),
            _ => None,
        }
    }
}

// Utility functions for error handling
pub fn api_error<T: fmt::Display>(status_code: u16, message: T) -> ContactifyError {
    ContactifyError::ApiError {
        status_code,
        message: message.to_string(),
    }
}

pub fn not_found<T: fmt::Display>(message: T) -> ContactifyError {
    ContactifyError::NotFoundError(message.to_string())
}
