//! Application error type and its HTTP mapping.
//!
//! Every failure surfaced to a client carries an explicit status code and a
//! machine-readable `error` code:
//!
//! | Variant        | Status | `error`            |
//! |----------------|--------|--------------------|
//! | `InvalidUrl`   | 400    | `invalid_url`      |
//! | `InvalidSlug`  | 400    | `invalid_slug`     |
//! | `Validation`   | 400    | `validation_error` |
//! | `SlugTaken`    | 409    | `slug_taken`       |
//! | `NotFound`     | 404    | `not_found`        |
//! | `Internal`     | 500    | `internal_error`   |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error body returned by the JSON API.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    #[error("Slug '{0}' is already taken")]
    SlugTaken(String),

    #[error("Short link '{0}' not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl(_) | AppError::InvalidSlug(_) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::SlugTaken(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidUrl(_) => "invalid_url",
            AppError::InvalidSlug(_) => "invalid_slug",
            AppError::SlugTaken(_) => "slug_taken",
            AppError::NotFound(_) => "not_found",
            AppError::Validation(_) => "validation_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Builds the JSON body for this error.
    ///
    /// Internal details never leak to the client.
    pub fn to_body(&self) -> ErrorBody {
        let message = match self {
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        ErrorBody {
            ok: false,
            error: self.code(),
            message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(ref detail) = self {
            tracing::error!(detail = %detail, "Internal error");
        }

        (self.status(), Json(self.to_body())).into_response()
    }
}

/// Unique violations are resolved to [`AppError::SlugTaken`] by the repository,
/// which knows the offending slug; everything reaching this conversion is internal.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(format!("Database error: {e}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}
