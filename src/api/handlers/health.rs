//! Handler for health check endpoint.

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always answers `200 OK` with a plain-text body while the process serves
/// requests; storage connectivity is not checked here.
pub async fn health_handler() -> &'static str {
    "OK"
}
