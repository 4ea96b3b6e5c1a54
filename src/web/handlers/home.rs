//! Shortener home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Renders `templates/home.html`: the link creation form, which posts to
/// `/api/create` from the browser.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
struct HomeTemplate {}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}
