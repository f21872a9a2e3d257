mod local;

pub use local::LocalStore;

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Invalid file name: {0}")]
    InvalidName(String),
}

/// Abstraction over the directory holding uploaded photos.
/// Names are generated on store and never reused for different content.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn put(&self, name: &str, data: Bytes) -> Result<(), FileStoreError>;
    async fn get(&self, name: &str) -> Result<Bytes, FileStoreError>;
    async fn delete(&self, name: &str) -> Result<(), FileStoreError>;

    /// Write `data` under a freshly generated name and return that name.
    async fn store(
        &self,
        data: Bytes,
        original_name: Option<&str>,
    ) -> Result<String, FileStoreError> {
        let name = generate_name(original_name);
        self.put(&name, data).await?;
        Ok(name)
    }

    /// Fire-and-forget removal: failures are logged and never returned.
    async fn discard(&self, name: &str) {
        if let Err(e) = self.delete(name).await {
            tracing::warn!(filename = %name, error = %e, "Failed to remove stored file");
        }
    }
}

/// `<uuid v4>` plus the lowercased extension of `original_name`, if it has one.
pub fn generate_name(original_name: Option<&str>) -> String {
    let id = uuid::Uuid::new_v4();
    match original_name.and_then(|n| Path::new(n).extension()) {
        Some(ext) => format!("{id}.{}", ext.to_string_lossy().to_lowercase()),
        None => id.to_string(),
    }
}

/// True when `name` is a single plain path component that cannot escape the store.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\', '\0'])
        && Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name)
}
