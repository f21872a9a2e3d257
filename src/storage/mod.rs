pub mod db;
pub mod models;
mod photos;

pub use db::{Database, DatabaseError};
