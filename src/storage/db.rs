use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

use super::models::PhotoRecord;

/// File name of the metadata document inside the data directory.
pub const DB_FILE: &str = "photos.json";

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The metadata store: one JSON array of [`PhotoRecord`], read and rewritten whole.
///
/// Reads never fail; a missing or corrupt document reads as empty. Mutations
/// go through [`Database::lock`] so concurrent read-modify-write cycles do
/// not overwrite each other.
#[derive(Clone)]
pub struct Database {
    path: Arc<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl Database {
    /// Open the document in `data_dir`, creating the directory and an empty array if needed.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(data_dir.as_ref())?;
        let path = data_dir.as_ref().join(DB_FILE);

        if !path.exists() {
            std::fs::write(&path, "[]")?;
        }

        Ok(Self {
            path: Arc::new(path),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize a read-modify-write cycle against other writers in this process.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Load every record in stored order. Read or parse failures yield an empty list.
    pub async fn read_all(&self) -> Vec<PhotoRecord> {
        let raw = match tokio::fs::read(self.path.as_path()).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read metadata document");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Metadata document is not a valid photo list, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the document with `records`, pretty-printed.
    ///
    /// The new content is written to a sibling file and renamed into place.
    pub async fn write_all(&self, records: &[PhotoRecord]) -> Result<(), DatabaseError> {
        let data = serde_json::to_vec_pretty(records)?;

        let tmp_path = self
            .path
            .with_extension(format!("json.{}.tmp", uuid::Uuid::new_v4().simple()));
        tokio::fs::write(&tmp_path, &data).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, self.path.as_path()).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        Ok(())
    }
}
