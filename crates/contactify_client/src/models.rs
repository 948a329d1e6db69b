// --- File: crates/contactify_client/src/models.rs ---
use serde::Deserialize;

/// Error payload returned by the contact API.
///
/// The backend puts its human-readable message in an `error` field; some
/// deployments use `message` instead, so both are accepted.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// The server's message, preferring the `error` field.
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}
