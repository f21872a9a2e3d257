use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};

use super::{is_valid_name, FileStore, FileStoreError};

/// Uploaded photos kept as plain files in one directory.
pub struct LocalStore {
    base_path: PathBuf,
}

impl LocalStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, std::io::Error> {
        let base_path = base_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    fn file_path(&self, name: &str) -> Result<PathBuf, FileStoreError> {
        if !is_valid_name(name) {
            return Err(FileStoreError::InvalidName(name.to_string()));
        }
        Ok(self.base_path.join(name))
    }
}

#[async_trait]
impl FileStore for LocalStore {
    async fn put(&self, name: &str, data: Bytes) -> Result<(), FileStoreError> {
        let path = self.file_path(name)?;
        tokio::fs::write(&path, &data).await?;
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Bytes, FileStoreError> {
        let path = self.file_path(name)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FileStoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, name: &str) -> Result<(), FileStoreError> {
        let path = self.file_path(name)?;
        tokio::fs::remove_file(&path).await?;
        Ok(())
    }
}
