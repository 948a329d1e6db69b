// --- File: crates/contactify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Default base URL of the contact resource, used when neither the config
/// file nor the environment provides one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081/api/contacts";

// --- Contact API Config ---
// Holds the location of the remote contact resource. The base URL points at
// the collection itself; per-record paths are derived by appending the id.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String, // Loaded via CONTACTIFY__API__BASE_URL
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoggingConfig {
    pub level: Option<String>, // e.g. "info", "debug"
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // API config is mandatory but fully defaulted
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}
