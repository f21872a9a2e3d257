use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let upload_limit = usize::try_from(state.config.max_upload_size).unwrap_or(usize::MAX);
    let front_end = ServeDir::new(&state.config.storage.public_dir);

    Router::new()
        // Photos
        .route("/api/photos", get(handlers::list_photos))
        .route("/api/photos/:id", delete(handlers::delete_photo))
        .route(
            "/api/upload",
            post(handlers::upload_photos).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Stored files
        .route("/uploads/:filename", get(handlers::serve_upload))
        // Internal
        .route("/_internal/health", get(handlers::health))
        // Bundled front-end
        .fallback_service(front_end)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
