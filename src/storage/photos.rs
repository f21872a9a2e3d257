use std::cmp::Reverse;

use super::db::{Database, DatabaseError};
use super::models::PhotoRecord;

impl Database {
    // ========================================================================
    // Photo operations
    // ========================================================================

    /// All photos, newest first. Records sharing a timestamp keep the later insert first.
    pub async fn list_photos(&self) -> Vec<PhotoRecord> {
        let mut photos = self.read_all().await;
        photos.reverse();
        photos.sort_by_key(|p| Reverse(p.ts));
        photos
    }

    /// Append `records` in order and persist them with a single write.
    pub async fn insert_photos(&self, records: &[PhotoRecord]) -> Result<(), DatabaseError> {
        let _guard = self.lock().await;

        let mut photos = self.read_all().await;
        photos.extend_from_slice(records);
        self.write_all(&photos).await
    }

    /// Remove the photo with `id`, returning it. `None` leaves the document untouched.
    pub async fn delete_photo(&self, id: &str) -> Result<Option<PhotoRecord>, DatabaseError> {
        let _guard = self.lock().await;

        let mut photos = self.read_all().await;
        let Some(idx) = photos.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        let removed = photos.remove(idx);
        self.write_all(&photos).await?;
        Ok(Some(removed))
    }
}
