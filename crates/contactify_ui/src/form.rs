// --- File: crates/contactify_ui/src/form.rs ---
//! Contact form controller.
//!
//! Drives both the create and the edit workflow. In edit mode the existing
//! record is fetched and kept as the original; on submit the entered fields
//! are merged over it so unedited values fall back to the original and the
//! identifier is never touched. Validation runs before any submission, so
//! an invalid draft never reaches the service client.

use std::sync::Arc;

use contactify_common::{Contact, ContactDraft, ContactService};
use tracing::error;

use crate::notify::Notifier;
use crate::validate;

/// Outcome of a submission attempt.
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The record was persisted; carries what the server returned.
    Saved(Contact),
    /// Client-side validation rejected the draft; nothing was sent.
    Invalid(Vec<String>),
    /// The server rejected the submission; the entered values are intact.
    Failed,
}

/// Merge the submitted fields over the original record.
///
/// Increasing precedence: the original's identifier, the original's other
/// fields (timestamps), then the submitted values — an edited field always
/// overrides the stale original value.
pub fn merged_record(original: &Contact, fields: &ContactDraft) -> Contact {
    Contact {
        id: original.id.clone(),
        last_name: fields.last_name.clone(),
        first_name: fields.first_name.clone(),
        email: fields.email.clone(),
        phone: fields.phone.clone(),
        created_at: original.created_at,
        updated_at: original.updated_at,
    }
}

/// Controller behind the create/edit form page.
pub struct ContactFormController {
    service: Arc<dyn ContactService>,
    notifier: Arc<dyn Notifier>,
    route_id: Option<String>,
    original: Option<Contact>,
    fields: ContactDraft,
}

impl ContactFormController {
    /// A route-supplied identifier puts the controller in edit mode; without
    /// one it is in create mode with empty fields.
    pub fn new(
        service: Arc<dyn ContactService>,
        notifier: Arc<dyn Notifier>,
        route_id: Option<String>,
    ) -> Self {
        Self {
            service,
            notifier,
            route_id,
            original: None,
            fields: ContactDraft::default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.route_id.is_some()
    }

    /// The pre-edit snapshot used as the merge base, once loaded.
    pub fn original(&self) -> Option<&Contact> {
        self.original.as_ref()
    }

    pub fn fields(&self) -> &ContactDraft {
        &self.fields
    }

    pub fn set_fields(&mut self, fields: ContactDraft) {
        self.fields = fields;
    }

    /// In edit mode, fetch the record being edited and prefill the fields.
    ///
    /// A fetch failure is logged only: the original stays unset, no field
    /// defaults are set, and a later submit falls back to create.
    pub async fn load_original(&mut self) {
        let Some(id) = self.route_id.clone() else {
            return;
        };
        match self.service.get_by_id(&id).await {
            Ok(contact) => {
                self.fields = contact.draft();
                self.original = Some(contact);
            }
            Err(e) => error!("Failed to fetch the contact being edited: {}", e),
        }
    }

    /// Validate and submit the entered fields.
    ///
    /// With an original record present this updates at the original's id,
    /// otherwise it creates. On failure the server's own message is shown
    /// when it provides one, and the entered values are kept so the user can
    /// correct and resubmit.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let issues = validate::validate_draft(&self.fields);
        if !issues.is_empty() {
            return SubmitOutcome::Invalid(issues);
        }

        let result = match &self.original {
            Some(original) => {
                let merged = merged_record(original, &self.fields);
                self.service.update(&original.id, &merged).await
            }
            None => self.service.create(&self.fields).await,
        };

        match result {
            Ok(saved) => {
                self.notifier.success("Contact saved successfully.");
                SubmitOutcome::Saved(saved)
            }
            Err(e) => {
                error!("Error saving contact: {}", e);
                let message = e
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| "An error occurred while saving the contact.".to_string());
                self.notifier.error(&message);
                SubmitOutcome::Failed
            }
        }
    }
}
