//! HTML page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    confirm_handler, home_handler, safelink_final_handler, safelink_generate_handler,
    safelink_index_handler, safelink_step_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Shortener pages.
///
/// # Endpoints
///
/// - `GET /`         - Link creation form
/// - `GET /s/{slug}` - Countdown confirmation page
pub fn shortener_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/s/{slug}", get(confirm_handler))
}

/// SafeLink pages, nested under `/safelink` by the top-level router.
///
/// # Endpoints
///
/// - `GET  /`              - URL form
/// - `POST /generate`      - Encode and redirect to the step page
/// - `GET  /step/{token}`  - First countdown
/// - `GET  /final/{token}` - Wrapped redirect
pub fn safelink_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(safelink_index_handler))
        .route("/generate", post(safelink_generate_handler))
        .route("/step/{token}", get(safelink_step_handler))
        .route("/final/{token}", get(safelink_final_handler))
}
