use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::api::response::ApiError;
use crate::file_store::FileStoreError;
use crate::AppState;

/// Stored names are never reused, so clients may keep them for 7 days without revalidating.
const UPLOAD_CACHE_CONTROL: &str = "public, max-age=604800, immutable";

/// Serve a stored photo by its generated file name.
/// Route: GET /uploads/:filename
pub async fn serve_upload(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let data = state
        .file_store
        .get(&filename)
        .await
        .map_err(|e| match e {
            FileStoreError::NotFound(_) | FileStoreError::InvalidName(_) => ApiError::not_found(),
            _ => ApiError::internal(format!("Failed to read file: {e}")),
        })?;

    let byte_size = data.len() as u64;
    let mut response = (StatusCode::OK, data).into_response();
    let headers = response.headers_mut();

    let mime_type = mime_guess::from_path(&filename).first_or_octet_stream();
    headers.insert(
        header::CONTENT_TYPE,
        mime_type
            .as_ref()
            .parse()
            .unwrap_or(HeaderValue::from_static("application/octet-stream")),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(byte_size));
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(UPLOAD_CACHE_CONTROL),
    );

    Ok(response)
}
