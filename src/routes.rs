//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Shortener home page
//! - `POST /api/create`  - Create a short link (JSON)
//! - `GET  /s/{slug}`    - Countdown confirmation page
//! - `POST /go/{slug}`   - Record a click, return the target (JSON)
//! - `GET  /health`      - Liveness probe
//! - `/safelink/*`       - SafeLink pages (optional)
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `safelink_enabled` - when `true`, mounts the SafeLink pages under `/safelink`
pub fn app_router(state: AppState, safelink_enabled: bool) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, safelink_enabled))
}

/// Builds the routes and per-request middleware without path normalization.
///
/// Path normalization must wrap the whole router to run before routing, so it
/// is applied separately by [`app_router`].
pub fn build_router(state: AppState, safelink_enabled: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::routes())
        .merge(web::routes::shortener_routes());

    if safelink_enabled {
        router = router.nest("/safelink", web::routes::safelink_routes());
    }

    router
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}
