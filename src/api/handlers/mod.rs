mod health;
mod photos;
mod static_files;

pub use health::health;
pub use photos::{delete_photo, list_photos, upload_photos, MAX_FILES_PER_UPLOAD};
pub use static_files::serve_upload;
