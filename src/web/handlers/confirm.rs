//! Pre-redirect confirmation page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Confirmation page with a countdown. When it reaches zero the page calls
/// `POST /go/{slug}` and follows the returned target.
#[derive(Template, WebTemplate)]
#[template(path = "confirm.html")]
pub struct ConfirmTemplate {
    pub slug: String,
    pub target: String,
    pub countdown: u32,
}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub slug: String,
}

/// Shows where a short link leads without counting a click.
///
/// # Endpoint
///
/// `GET /s/{slug}`
///
/// # Errors
///
/// Unknown slugs render a 404 page; storage failures return the JSON
/// `internal_error` body.
pub async fn confirm_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.lookup(&slug).await {
        Ok(link) => Ok(ConfirmTemplate {
            slug: link.slug,
            target: link.target,
            countdown: state.countdown_seconds,
        }
        .into_response()),
        Err(AppError::NotFound(_)) => {
            Ok((StatusCode::NOT_FOUND, NotFoundTemplate { slug }).into_response())
        }
        Err(e) => Err(e),
    }
}
