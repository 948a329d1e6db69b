// --- File: crates/contactify_client/src/error.rs ---
use contactify_common::ContactifyError;
use thiserror::Error;

/// Contact-API-specific error types.
#[derive(Error, Debug)]
pub enum ContactApiError {
    /// Error occurred during the HTTP request to the contact API
    #[error("Contact API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the contact API
    #[error("Contact API returned an error: {message} (status {status_code})")]
    ApiError { status_code: u16, message: String },

    /// The requested contact does not exist (stale or invalid identifier)
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Error parsing a contact API response body
    #[error("Failed to parse contact API response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Convert ContactApiError to ContactifyError
impl From<ContactApiError> for ContactifyError {
    fn from(err: ContactApiError) -> Self {
        match err {
            ContactApiError::RequestError(e) => ContactifyError::HttpError(e.to_string()),
            ContactApiError::ApiError {
                status_code,
                message,
            } => ContactifyError::ApiError {
                status_code,
                message,
            },
            ContactApiError::NotFound(message) => ContactifyError::NotFoundError(message),
            ContactApiError::ParseError(e) => ContactifyError::ParseError(e.to_string()),
        }
    }
}
