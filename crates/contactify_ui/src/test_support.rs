// --- File: crates/contactify_ui/src/test_support.rs ---
//! Recording fakes for the controller tests.
//!
//! `RecordingService` plays the backend: it keeps an in-memory collection,
//! records every call in order, and can be scripted to fail specific
//! operations. `RecordingNotifier` records what would have been shown to
//! the user.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use contactify_common::{
    not_found, BoxFuture, Contact, ContactDraft, ContactService, ContactifyError,
    DeleteConfirmation,
};

use crate::notify::Notifier;

/// One observed service call, with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    FetchAll,
    GetById(String),
    Create(ContactDraft),
    Update(String, Contact),
    Delete(String),
}

pub struct RecordingService {
    calls: Mutex<Vec<ServiceCall>>,
    contacts: Mutex<Vec<Contact>>,
    next_id: AtomicU32,
    fail_fetch_all: AtomicBool,
    fail_get_by_id: AtomicBool,
    fail_delete: AtomicBool,
    write_rejection: Mutex<Option<ContactifyError>>,
}

impl RecordingService {
    pub fn with_contacts(contacts: Vec<Contact>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            contacts: Mutex::new(contacts),
            next_id: AtomicU32::new(1),
            fail_fetch_all: AtomicBool::new(false),
            fail_get_by_id: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            write_rejection: Mutex::new(None),
        })
    }

    /// Every call observed so far, in order.
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The backend's current collection.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    pub fn set_fail_fetch_all(&self, fail: bool) {
        self.fail_fetch_all.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_get_by_id(&self, fail: bool) {
        self.fail_get_by_id.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    /// Make the next create or update fail with the given error.
    pub fn reject_next_write_with(&self, err: ContactifyError) {
        *self.write_rejection.lock().unwrap() = Some(err);
    }

    fn record(&self, call: ServiceCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn take_write_rejection(&self) -> Option<ContactifyError> {
        self.write_rejection.lock().unwrap().take()
    }
}

impl ContactService for RecordingService {
    fn fetch_all(&self) -> BoxFuture<'_, Vec<Contact>, ContactifyError> {
        self.record(ServiceCall::FetchAll);
        let result = if self.fail_fetch_all.load(Ordering::SeqCst) {
            Err(ContactifyError::HttpError("connection refused".to_string()))
        } else {
            Ok(self.contacts.lock().unwrap().clone())
        };
        Box::pin(async move { result })
    }

    fn get_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Contact, ContactifyError> {
        self.record(ServiceCall::GetById(id.to_string()));
        let result = if self.fail_get_by_id.load(Ordering::SeqCst) {
            Err(ContactifyError::HttpError("connection refused".to_string()))
        } else {
            self.contacts
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| not_found("Contact not found"))
        };
        Box::pin(async move { result })
    }

    fn create<'a>(&'a self, draft: &'a ContactDraft) -> BoxFuture<'a, Contact, ContactifyError> {
        self.record(ServiceCall::Create(draft.clone()));
        let result = match self.take_write_rejection() {
            Some(err) => Err(err),
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let contact = Contact {
                    id: format!("gen-{id}"),
                    last_name: draft.last_name.clone(),
                    first_name: draft.first_name.clone(),
                    email: draft.email.clone(),
                    phone: draft.phone.clone(),
                    created_at: None,
                    updated_at: None,
                };
                self.contacts.lock().unwrap().push(contact.clone());
                Ok(contact)
            }
        };
        Box::pin(async move { result })
    }

    fn update<'a>(
        &'a self,
        id: &'a str,
        contact: &'a Contact,
    ) -> BoxFuture<'a, Contact, ContactifyError> {
        self.record(ServiceCall::Update(id.to_string(), contact.clone()));
        let result = match self.take_write_rejection() {
            Some(err) => Err(err),
            None => {
                let mut contacts = self.contacts.lock().unwrap();
                match contacts.iter_mut().find(|c| c.id == id) {
                    Some(slot) => {
                        *slot = contact.clone();
                        Ok(contact.clone())
                    }
                    None => Err(not_found("Contact not found")),
                }
            }
        };
        Box::pin(async move { result })
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, DeleteConfirmation, ContactifyError> {
        self.record(ServiceCall::Delete(id.to_string()));
        let result = if self.fail_delete.load(Ordering::SeqCst) {
            Err(ContactifyError::ApiError {
                status_code: 500,
                message: "internal error".to_string(),
            })
        } else {
            let mut contacts = self.contacts.lock().unwrap();
            let before = contacts.len();
            contacts.retain(|c| c.id != id);
            if contacts.len() < before {
                Ok(DeleteConfirmation {
                    message: Some("Contact deleted".to_string()),
                })
            } else {
                Err(not_found("Contact not found"))
            }
        };
        Box::pin(async move { result })
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// A contact with plausible derived email and phone, for test fixtures.
pub fn contact(id: &str, last_name: &str, first_name: &str) -> Contact {
    Contact {
        id: id.to_string(),
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        email: format!("{}.{}@example.com", first_name, last_name).to_lowercase(),
        phone: "0600000000".to_string(),
        created_at: None,
        updated_at: None,
    }
}
