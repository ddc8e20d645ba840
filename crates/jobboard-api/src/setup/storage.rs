//! Storage setup and initialization

use anyhow::{Context, Result};
use jobboard_core::Config;
use jobboard_storage::{create_storage, Storage};
use std::sync::Arc;

/// Build the configured CV storage backend
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage abstraction...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage backend")?;
    tracing::info!(
        backend = ?storage.backend_type(),
        "Storage abstraction initialized successfully"
    );
    Ok(storage)
}
