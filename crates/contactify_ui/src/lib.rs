// --- File: crates/contactify_ui/src/lib.rs ---

// Declare modules within this crate
pub mod form;
#[cfg(test)]
mod form_proptest;
pub mod list;
#[cfg(test)]
mod list_proptest;
pub mod notify;
#[cfg(test)]
mod test_support;
pub mod validate;

// Re-export the controllers and their state types for easier access
pub use form::{ContactFormController, SubmitOutcome};
pub use list::{ContactListController, LoadState};
pub use notify::Notifier;
