// --- File: crates/contactify_client/src/service.rs ---
//! [`ContactService`] implementation for the HTTP client.
//!
//! Controllers depend on the trait, not on [`ContactClient`], so this is the
//! only place where the crate-local error type is funneled into the shared
//! [`ContactifyError`].

use contactify_common::{
    BoxFuture, Contact, ContactDraft, ContactService, ContactifyError, DeleteConfirmation,
};

use crate::client::ContactClient;

impl ContactService for ContactClient {
    fn fetch_all(&self) -> BoxFuture<'_, Vec<Contact>, ContactifyError> {
        Box::pin(async move { ContactClient::fetch_all(self).await.map_err(Into::into) })
    }

    fn get_by_id<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Contact, ContactifyError> {
        Box::pin(async move { ContactClient::get_by_id(self, id).await.map_err(Into::into) })
    }

    fn create<'a>(&'a self, draft: &'a ContactDraft) -> BoxFuture<'a, Contact, ContactifyError> {
        Box::pin(async move { ContactClient::create(self, draft).await.map_err(Into::into) })
    }

    fn update<'a>(
        &'a self,
        id: &'a str,
        contact: &'a Contact,
    ) -> BoxFuture<'a, Contact, ContactifyError> {
        Box::pin(async move {
            ContactClient::update(self, id, contact)
                .await
                .map_err(Into::into)
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, DeleteConfirmation, ContactifyError> {
        Box::pin(async move { ContactClient::delete(self, id).await.map_err(Into::into) })
    }
}
