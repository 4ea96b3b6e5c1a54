//! SafeLink page handlers.
//!
//! Flow: form → `POST /safelink/generate` → step page with countdown →
//! final page with countdown → Google-style redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::warn;

use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "safelink_index.html")]
struct SafeLinkIndexTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "safelink_step.html")]
struct SafeLinkStepTemplate {
    token: String,
    countdown: u32,
}

#[derive(Template, WebTemplate)]
#[template(path = "safelink_final.html")]
struct SafeLinkFinalTemplate {
    url: String,
    countdown: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub url: String,
}

/// `GET /safelink`
pub async fn safelink_index_handler() -> impl IntoResponse {
    SafeLinkIndexTemplate {}
}

/// Encodes the submitted URL and sends the visitor to the step page.
///
/// # Endpoint
///
/// `POST /safelink/generate` (form field `url`)
///
/// An empty field redirects back to the form.
pub async fn safelink_generate_handler(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Redirect {
    let url = form.url.trim();
    if url.is_empty() {
        return Redirect::to("/safelink");
    }

    let token = state.safelink_service.encode_token(url);
    Redirect::to(&format!("/safelink/step/{token}"))
}

/// `GET /safelink/step/{token}`
pub async fn safelink_step_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    SafeLinkStepTemplate {
        token,
        countdown: state.countdown_seconds,
    }
}

/// Decodes the token and shows the wrapped redirect.
///
/// # Endpoint
///
/// `GET /safelink/final/{token}`
///
/// A token that does not decode yields `400` with the plain-text message
/// `Invalid SafeLink Token!`.
pub async fn safelink_final_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.safelink_service.resolve(&token) {
        Ok(url) => SafeLinkFinalTemplate {
            url,
            countdown: state.countdown_seconds,
        }
        .into_response(),
        Err(e) => {
            warn!("Rejected SafeLink token");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
