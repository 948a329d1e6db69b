// --- File: crates/contactify_config/src/lib.rs ---
//! Configuration loading for the Contactify application.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file
//! (`config/default.toml`, or the path named by `CONTACTIFY_CONFIG`), then
//! `CONTACTIFY__`-prefixed environment variables with `__` separators
//! (e.g. `CONTACTIFY__API__BASE_URL`). A `.env` file is loaded first so
//! local development overrides work without touching the shell environment.

use config::{Config, ConfigError, Environment, File};
use std::sync::Once;

pub mod models;

pub use models::{ApiConfig, AppConfig, LoggingConfig, DEFAULT_BASE_URL};

/// The prefix for configuration environment variables
pub const ENV_PREFIX: &str = "CONTACTIFY";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

static DOTENV: Once = Once::new();

/// Load `.env` into the process environment, once per process.
pub fn ensure_dotenv_loaded() {
    DOTENV.call_once(|| {
        // A missing .env file is not an error
        let _ = dotenv::dotenv();
    });
}

/// Loads the application configuration.
///
/// This is used by the shell binary; dependent crates receive the typed
/// sections they need and do not know where the values came from.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let config_file =
        std::env::var("CONTACTIFY_CONFIG").unwrap_or_else(|_| "config/default".to_string());

    Config::builder()
        .set_default("api.base_url", DEFAULT_BASE_URL)?
        .add_source(File::with_name(&config_file).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(CONFIG_SEPARATOR)
                .separator(CONFIG_SEPARATOR),
        )
        .build()?
        .try_deserialize()
}
