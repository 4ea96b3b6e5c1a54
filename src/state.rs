//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, SafeLinkService};
use crate::domain::repositories::LinkRepository;

/// Handles shared by all request handlers.
///
/// Cloning is cheap: every field is reference-counted or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub safelink_service: SafeLinkService,
    /// Seconds shown on countdown pages before redirecting.
    pub countdown_seconds: u32,
}

impl AppState {
    /// Builds state around a link repository.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        base_url: impl Into<String>,
        countdown_seconds: u32,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository, base_url)),
            safelink_service: SafeLinkService::new(),
            countdown_seconds,
        }
    }
}
