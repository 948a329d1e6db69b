//! Contact API client module
//!
//! This module provides the client for the remote contact resource. It maps
//! the five logical operations (list all, get one, create, update, delete)
//! onto HTTP requests against the configured base resource path and decodes
//! the response bodies.
//!
//! The client is the sole boundary between the application and external
//! state. It performs no recovery: every operation issues exactly one
//! request, and every failure is classified, logged and returned unchanged
//! to the caller.

use contactify_common::logging::log_error;
use contactify_common::{Contact, ContactDraft, DeleteConfirmation};
use contactify_config::ApiConfig;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::ContactApiError;
use crate::models::ApiErrorBody;

/// Client for the remote contact resource.
///
/// Holds the HTTP client and the location of the collection. Per-record
/// paths are derived by appending the identifier to the base URL.
pub struct ContactClient {
    /// HTTP client for making requests to the contact API
    client: Client,

    /// Configuration, including the base URL of the contact collection
    config: ApiConfig,
}

impl ContactClient {
    /// Creates a new contact client with the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// URL of the collection.
    fn collection_url(&self) -> &str {
        &self.config.base_url
    }

    /// URL of a single record.
    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), id)
    }

    /// Fetch all contacts, in the order the server returns them.
    ///
    /// No local sorting is applied. Fails by propagating the transport or
    /// HTTP error to the caller.
    pub async fn fetch_all(&self) -> Result<Vec<Contact>, ContactApiError> {
        const CONTEXT: &str = "Error fetching contacts";
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| {
                log_error(&e, CONTEXT);
                ContactApiError::from(e)
            })?;
        Self::decode(CONTEXT, response).await
    }

    /// Fetch a single contact by identifier.
    ///
    /// Fails with [`ContactApiError::NotFound`] when the identifier does not
    /// resolve.
    pub async fn get_by_id(&self, id: &str) -> Result<Contact, ContactApiError> {
        const CONTEXT: &str = "Error fetching contact";
        let response = self
            .client
            .get(self.record_url(id))
            .send()
            .await
            .map_err(|e| {
                log_error(&e, CONTEXT);
                ContactApiError::from(e)
            })?;
        Self::decode(CONTEXT, response).await
    }

    /// Create a contact from the submitted fields.
    ///
    /// The payload carries no identifier; the server assigns the id and the
    /// timestamps and returns the persisted record. Validation rejections
    /// (e.g. a duplicate or invalid email) surface as
    /// [`ContactApiError::ApiError`] carrying the server's message.
    pub async fn create(&self, draft: &ContactDraft) -> Result<Contact, ContactApiError> {
        const CONTEXT: &str = "Error creating contact";
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(|e| {
                log_error(&e, CONTEXT);
                ContactApiError::from(e)
            })?;
        Self::decode(CONTEXT, response).await
    }

    /// Replace the record at `id` with the given full record.
    ///
    /// Returns the updated record; the server refreshes the modification
    /// timestamp. Fails like [`create`](Self::create), plus a not-found case
    /// when `id` no longer exists.
    pub async fn update(&self, id: &str, contact: &Contact) -> Result<Contact, ContactApiError> {
        const CONTEXT: &str = "Error updating contact";
        let response = self
            .client
            .put(self.record_url(id))
            .json(contact)
            .send()
            .await
            .map_err(|e| {
                log_error(&e, CONTEXT);
                ContactApiError::from(e)
            })?;
        Self::decode(CONTEXT, response).await
    }

    /// Request removal of the record at `id`.
    ///
    /// Returns the server's confirmation payload; fails when `id` does not
    /// exist.
    pub async fn delete(&self, id: &str) -> Result<DeleteConfirmation, ContactApiError> {
        const CONTEXT: &str = "Error deleting contact";
        let response = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(|e| {
                log_error(&e, CONTEXT);
                ContactApiError::from(e)
            })?;
        Self::decode(CONTEXT, response).await
    }

    /// Read the response body, classify non-success statuses, decode the
    /// rest. Every failure is logged here with the operation's context.
    async fn decode<T: DeserializeOwned>(
        context: &str,
        response: Response,
    ) -> Result<T, ContactApiError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            log_error(&e, context);
            ContactApiError::from(e)
        })?;

        if !status.is_success() {
            let err = Self::classify(status, body);
            log_error(&err, context);
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| {
            log_error(&e, context);
            ContactApiError::from(e)
        })
    }

    /// Classify a non-success response: 404 means not-found, everything else
    /// is a server rejection carrying whatever message the body provides.
    fn classify(status: StatusCode, body: String) -> ContactApiError {
        let parsed = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(ApiErrorBody::into_message);
        let message = match parsed {
            Some(message) => message,
            None if body.trim().is_empty() => status.to_string(),
            None => body,
        };

        if status == StatusCode::NOT_FOUND {
            ContactApiError::NotFound(message)
        } else {
            ContactApiError::ApiError {
                status_code: status.as_u16(),
                message,
            }
        }
    }
}
