//! Business logic services for the application layer.

pub mod link_service;
pub mod safelink_service;

pub use link_service::LinkService;
pub use safelink_service::{SafeLinkError, SafeLinkService};
