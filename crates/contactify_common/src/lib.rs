// --- File: crates/contactify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;    // Error handling
pub mod logging;  // Logging utilities
pub mod services; // Service abstractions and shared models

// Re-export error types and utilities for easier access
pub use error::{api_error, not_found, ContactifyError};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error};

// Re-export the service seam and the shared contact models
pub use services::{BoxFuture, Contact, ContactDraft, ContactService, DeleteConfirmation};
