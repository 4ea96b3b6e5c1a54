//! Handler for resolving a slug after the countdown.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::go::GoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Records a click and returns the target URL.
///
/// # Endpoint
///
/// `POST /go/{slug}`
///
/// Called by the confirmation page once its countdown ends. Each call counts
/// exactly one click.
///
/// # Errors
///
/// Returns 404 `not_found` if the slug does not exist.
pub async fn go_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<GoResponse>, AppError> {
    let target = state.link_service.resolve_and_record_click(&slug).await?;

    Ok(Json(GoResponse {
        ok: true,
        redirect: target,
    }))
}
