// --- File: crates/contactify_ui/src/notify.rs ---
//! Notification seam for the write paths.
//!
//! Create, update and delete surface their outcome to the user; read paths
//! never do. The controllers emit through this trait so the rendering layer
//! decides how a notification looks, and tests can record what was shown.

/// A sink for user-facing outcome notifications.
pub trait Notifier: Send + Sync {
    /// A write operation succeeded.
    fn success(&self, message: &str);

    /// A write operation failed.
    fn error(&self, message: &str);
}
