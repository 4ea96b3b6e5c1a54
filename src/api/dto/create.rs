//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

/// Request to create a short link.
///
/// An empty `custom` is treated the same as an absent one.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The URL to redirect to. Scheme and format are checked by the link service.
    #[validate(length(max = 2048, message = "Target URL is too long"))]
    pub target: String,

    /// Optional custom slug.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub custom: Option<String>,
}

/// Successful creation response.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub ok: bool,
    /// Full public URL of the confirmation page.
    pub short: String,
    pub slug: String,
    pub target: String,
}
