//! API route configuration.

use crate::api::handlers::{create_handler, go_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /api/create`  - Create a short link
/// - `POST /go/{slug}`   - Record a click and return the target
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/create", post(create_handler))
        .route("/go/{slug}", post(go_handler))
}
