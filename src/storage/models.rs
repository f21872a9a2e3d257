use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Label used when an upload arrives without a `friend` value ("no name").
pub const DEFAULT_FRIEND: &str = "ללא שם";

/// Public path prefix under which stored files are served.
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// Metadata for one uploaded photo, as persisted in photos.json and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    pub friend: String,
    pub caption: String,
    pub filename: String,
    pub url: String,
    /// Creation time in milliseconds since the Unix epoch
    pub ts: i64,
}

impl PhotoRecord {
    /// Build a record for a file already written under `filename`.
    pub fn new(friend: &str, caption: &str, filename: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            friend: friend.to_string(),
            caption: caption.to_string(),
            filename: filename.to_string(),
            url: url_for(filename),
            ts: Utc::now().timestamp_millis(),
        }
    }
}

pub fn url_for(filename: &str) -> String {
    format!("{UPLOADS_PREFIX}{filename}")
}
