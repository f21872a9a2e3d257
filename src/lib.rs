//! photo-share - a small photo-sharing upload service
//!
//! Uploaded photos are written to a directory under generated names, their
//! metadata is kept in a single JSON document, and a small REST API lists,
//! creates and deletes them. The stored files and a bundled front-end are
//! served as static content.

pub mod api;
pub mod config;
pub mod file_store;
pub mod storage;

use std::sync::Arc;

use config::Config;
use file_store::{FileStore, LocalStore};
use storage::Database;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub file_store: Arc<dyn FileStore>,
}

impl AppState {
    /// Create the upload and data directories and open the metadata document.
    pub fn open(config: Config) -> anyhow::Result<Self> {
        let db = Database::open(&config.storage.data_dir)?;
        let file_store = LocalStore::new(&config.storage.upload_dir)?;

        Ok(Self {
            config,
            db,
            file_store: Arc::new(file_store),
        })
    }
}
