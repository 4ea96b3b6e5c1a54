//! DTOs for the redirect resolution endpoint.

use serde::Serialize;

/// Successful resolution: the client should navigate to `redirect`.
#[derive(Debug, Serialize)]
pub struct GoResponse {
    pub ok: bool,
    pub redirect: String,
}
