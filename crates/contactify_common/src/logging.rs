//! Logging utilities for the Contactify application.
//!
//! This module provides a standardized approach to logging across all crates
//! in the Contactify application. It includes functions for initializing the
//! tracing subscriber and the `log_error` helper behind the
//! log-then-return-unchanged error policy used by the service client and the
//! controllers' read paths.

use tracing::{error, info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber.
///
/// This function should be called once at the start of the application to
/// set up logging with the default log level (INFO).
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// # Arguments
///
/// * `level` - The minimum log level to display.
pub fn init_with_level(level: Level) {
    // Default to the requested level; RUST_LOG directives still win
    let filter = EnvFilter::from_default_env().add_directive(LevelFilter::from_level(level).into());

    // Use try_init to handle the case where a global default subscriber has already been set
    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log an error with context at the ERROR level.
///
/// # Arguments
///
/// * `error` - The error to log.
/// * `context` - Additional context information about the error.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}
