//! HTTP request handlers for JSON API endpoints.

pub mod create;
pub mod go;
pub mod health;

pub use create::create_handler;
pub use go::go_handler;
pub use health::health_handler;
