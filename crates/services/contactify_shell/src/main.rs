// File: services/contactify_shell/src/main.rs
use std::sync::Arc;

use contactify_client::ContactClient;
use contactify_common::logging;
use contactify_config::load_config;
use tracing::Level;

mod render;
mod shell;

#[tokio::main]
async fn main() {
    let config = load_config().expect("Failed to load config");

    match config
        .logging
        .as_ref()
        .and_then(|logging| logging.level.as_deref())
    {
        Some(level) => logging::init_with_level(level.parse::<Level>().unwrap_or(Level::INFO)),
        None => logging::init(),
    }

    let client = Arc::new(ContactClient::new(config.api.clone()));

    let mut app = shell::Shell::new(client);
    if let Err(err) = app.run().await {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
