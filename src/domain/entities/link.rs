//! Link entity representing a slug → target mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored short link with its click counter.
///
/// `slug` and `target` never change after creation; only `clicks` grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub slug: String,
    pub target: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(slug: String, target: String, created_at: DateTime<Utc>, clicks: i64) -> Self {
        Self {
            slug,
            target,
            created_at,
            clicks,
        }
    }
}

/// Input data for creating a new link.
///
/// Both fields are expected to be validated already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub slug: String,
    pub target: String,
}

impl NewLink {
    /// Materializes the record as it looks right after insertion.
    pub fn into_link(self, created_at: DateTime<Utc>) -> Link {
        Link::new(self.slug, self.target, created_at, 0)
    }
}
