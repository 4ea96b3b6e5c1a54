//! Handler for the link creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::create::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/create`
///
/// # Request Body
///
/// ```json
/// { "target": "https://example.com", "custom": "promo" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "short": "https://sho.rt/s/promo",
///   "slug": "promo",
///   "target": "https://example.com"
/// }
/// ```
///
/// # Errors
///
/// - 400 `invalid_url` / `invalid_slug`
/// - 400 `validation_error` for malformed JSON or an oversized target
/// - 409 `slug_taken`
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<CreateLinkResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    payload.validate()?;

    let link = state
        .link_service
        .create_link(&payload.target, payload.custom)
        .await?;

    Ok(Json(CreateLinkResponse {
        ok: true,
        short: state.link_service.short_url(&link.slug),
        slug: link.slug,
        target: link.target,
    }))
}
