use std::sync::Arc;

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;

use crate::api::response::{Ack, ApiError};
use crate::storage::models::{PhotoRecord, DEFAULT_FRIEND};
use crate::AppState;

/// Upper bound on file parts accepted by a single upload request.
pub const MAX_FILES_PER_UPLOAD: usize = 20;

/// Multipart field carrying the photo files.
const FILES_FIELD: &str = "files";

/// A file part read from the upload form, not yet written to the store.
struct PendingFile {
    original_name: String,
    data: Bytes,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn list_photos(State(state): State<Arc<AppState>>) -> Json<Vec<PhotoRecord>> {
    Json(state.db.list_photos().await)
}

pub async fn upload_photos(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Vec<PhotoRecord>>), ApiError> {
    let mut pending: Vec<PendingFile> = Vec::new();
    let mut friend: Option<String> = None;
    let mut caption: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().unwrap_or("").to_string();

        if let Some(original_name) = field.file_name().map(str::to_string) {
            // An empty file input still submits a part, with `filename=""`
            if original_name.is_empty() {
                continue;
            }
            if field_name != FILES_FIELD {
                return Err(ApiError::unexpected_field(&field_name));
            }
            if pending.len() == MAX_FILES_PER_UPLOAD {
                return Err(ApiError::too_many_files(MAX_FILES_PER_UPLOAD));
            }

            let data = field.bytes().await.map_err(multipart_error)?;
            pending.push(PendingFile {
                original_name,
                data,
            });
            continue;
        }

        match field_name.as_str() {
            "friend" => friend = Some(field.text().await.map_err(multipart_error)?),
            "caption" => caption = Some(field.text().await.map_err(multipart_error)?),
            _ => {
                // Ignore unknown fields
            }
        }
    }

    let friend = friend
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| DEFAULT_FRIEND.to_string());
    let caption = caption.unwrap_or_default();

    // Phase 1: write every file under a generated name
    let mut created: Vec<PhotoRecord> = Vec::with_capacity(pending.len());
    for file in pending {
        match state
            .file_store
            .store(file.data, Some(file.original_name.as_str()))
            .await
        {
            Ok(filename) => created.push(PhotoRecord::new(&friend, &caption, &filename)),
            Err(e) => {
                discard_all(&state, &created).await;
                return Err(ApiError::internal(format!("Failed to store file: {e}")));
            }
        }
    }

    if created.is_empty() {
        return Ok((StatusCode::CREATED, Json(created)));
    }

    // Phase 2: append metadata in one document write
    if let Err(e) = state.db.insert_photos(&created).await {
        discard_all(&state, &created).await;
        return Err(ApiError::internal(format!("Failed to save metadata: {e}")));
    }

    for photo in &created {
        tracing::debug!(photo_id = %photo.id, filename = %photo.filename, "Uploaded photo");
    }

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_photo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, ApiError> {
    // Phase 1: drop the metadata entry
    let photo = state
        .db
        .delete_photo(&id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(ApiError::not_found)?;

    // Phase 2: remove the file (fire-and-forget)
    state.file_store.discard(&photo.filename).await;

    tracing::debug!(photo_id = %id, "Deleted photo");
    Ok(Ack::ok())
}

// ============================================================================
// Helpers
// ============================================================================

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::payload_too_large(e.body_text())
    } else {
        ApiError::bad_request(format!("Invalid multipart data: {}", e.body_text()))
    }
}

async fn discard_all(state: &AppState, photos: &[PhotoRecord]) {
    for photo in photos {
        state.file_store.discard(&photo.filename).await;
    }
}
