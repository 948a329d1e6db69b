// --- File: crates/contactify_ui/src/list.rs ---
//! Contact list controller.
//!
//! Owns the working set (the full collection as last loaded from the
//! server), a free-text filter over it, and the detail selection. Every
//! successful mutation triggers a full reload rather than a local patch;
//! staleness between a remote mutation and the next reload is accepted.

use std::sync::Arc;

use contactify_common::{Contact, ContactService};
use tracing::error;

use crate::notify::Notifier;

/// Load state of the working set.
///
/// `Loaded` is re-entered after any mutation via the reload; `Errored` keeps
/// whatever working set the last successful load produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// The filtered view of a working set: contacts whose first or last name
/// contains the trimmed filter, case-insensitively. An empty or
/// whitespace-only filter yields the full set.
pub fn filter_contacts<'a>(contacts: &'a [Contact], filter: &str) -> Vec<&'a Contact> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return contacts.iter().collect();
    }
    contacts
        .iter()
        .filter(|contact| {
            contact.first_name.to_lowercase().contains(&needle)
                || contact.last_name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Controller behind the contact list page.
pub struct ContactListController {
    service: Arc<dyn ContactService>,
    notifier: Arc<dyn Notifier>,
    state: LoadState,
    contacts: Vec<Contact>,
    filter: String,
    selected: Option<Contact>,
}

impl ContactListController {
    pub fn new(service: Arc<dyn ContactService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service,
            notifier,
            state: LoadState::Idle,
            contacts: Vec::new(),
            filter: String::new(),
            selected: None,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The full working set, in server order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// The rows currently displayed.
    pub fn filtered(&self) -> Vec<&Contact> {
        filter_contacts(&self.contacts, &self.filter)
    }

    /// The contact shown in the read-only detail view, if any.
    pub fn selected(&self) -> Option<&Contact> {
        self.selected.as_ref()
    }

    /// Load the full collection, replacing the working set on success.
    ///
    /// On failure the error is logged and the working set is left exactly as
    /// it was; no user-facing dialog is shown for read failures.
    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        match self.service.fetch_all().await {
            Ok(contacts) => {
                self.contacts = contacts;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                error!("An error occurred while loading contacts: {}", e);
                self.state = LoadState::Errored;
            }
        }
    }

    /// Fetch one contact and hold it as the detail selection.
    ///
    /// A fetch failure is logged and the selection is not set.
    pub async fn view(&mut self, id: &str) {
        match self.service.get_by_id(id).await {
            Ok(contact) => self.selected = Some(contact),
            Err(e) => error!("Failed to fetch contact details: {}", e),
        }
    }

    /// Close the detail view.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Delete a contact, gated on the user's explicit confirmation.
    ///
    /// Without confirmation no call is issued. On success the user is
    /// notified and the working set is reloaded in full; on failure the
    /// user is notified and the working set is left untouched.
    pub async fn delete(&mut self, id: &str, confirmed: bool) {
        if !confirmed {
            return;
        }
        match self.service.delete(id).await {
            Ok(_) => {
                self.notifier.success("Contact deleted successfully.");
                self.load().await;
            }
            Err(e) => {
                error!("Failed to delete contact: {}", e);
                self.notifier
                    .error("An error occurred while deleting the contact.");
            }
        }
    }
}
