// --- File: crates/contactify_common/src/services.rs ---
//! Service abstractions for the remote contact resource.
//!
//! This module provides the trait definition for the contact service used by
//! the controllers. The trait allows for dependency injection and easier
//! testing by decoupling the controllers from the concrete HTTP client: the
//! client crate implements it against the real REST API, and the test suites
//! implement it with in-memory recording fakes.
//!
//! The shared contact models live here as well so that the client and the
//! controllers agree on a single definition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

use crate::error::ContactifyError;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A contact record as persisted by the backend.
///
/// The identifier is assigned by the server on creation and is immutable
/// afterwards; this client never fabricates one. The serde renames reflect
/// the wire contract of the backend (`nom` is the last name, `prenom` the
/// first name, `numero` the phone number).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Server-assigned opaque identifier
    pub id: String,

    /// Last name (wire field `nom`)
    #[serde(rename = "nom")]
    pub last_name: String,

    /// First name (wire field `prenom`)
    #[serde(rename = "prenom")]
    pub first_name: String,

    /// Email address
    pub email: String,

    /// Phone number, decimal digits only (wire field `numero`)
    #[serde(rename = "numero")]
    pub phone: String,

    /// Creation timestamp, set by the server
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last-modification timestamp, refreshed by the server on update
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The user-entered contact fields, without identifier or timestamps.
///
/// This is the create payload and the working values of the contact form.
/// All four fields are mandatory; see the validation rules in the UI crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDraft {
    /// Last name (wire field `nom`)
    #[serde(rename = "nom")]
    pub last_name: String,

    /// First name (wire field `prenom`)
    #[serde(rename = "prenom")]
    pub first_name: String,

    /// Email address
    pub email: String,

    /// Phone number, decimal digits only (wire field `numero`)
    #[serde(rename = "numero")]
    pub phone: String,
}

impl Contact {
    /// The draft view of this record: the four user-entered fields.
    pub fn draft(&self) -> ContactDraft {
        ContactDraft {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Confirmation payload returned by the delete operation.
///
/// The backend returns a small acknowledgement object; only the optional
/// human-readable message is of interest here, and unknown fields are
/// tolerated.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteConfirmation {
    /// Human-readable confirmation message, if the server provides one
    #[serde(default)]
    pub message: Option<String>,
}

/// A trait for contact service operations.
///
/// This trait defines the five logical operations against the remote contact
/// resource. Every operation issues exactly one request, never retries, and
/// propagates its failure unchanged as a [`ContactifyError`] — classification
/// is pushed to the caller.
pub trait ContactService: Send + Sync {
    /// Fetch the full collection, in server-defined order.
    fn fetch_all(&self) -> BoxFuture<'_, Vec<Contact>, ContactifyError>;

    /// Fetch a single contact by its identifier.
    fn get_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Contact, ContactifyError>;

    /// Create a contact from the submitted fields; the server assigns the
    /// identifier and the timestamps.
    fn create<'a>(&'a self, draft: &'a ContactDraft) -> BoxFuture<'a, Contact, ContactifyError>;

    /// Replace the record at `id` with the given full record.
    fn update<'a>(
        &'a self,
        id: &'a str,
        contact: &'a Contact,
    ) -> BoxFuture<'a, Contact, ContactifyError>;

    /// Remove the record at `id`.
    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, DeleteConfirmation, ContactifyError>;
}
