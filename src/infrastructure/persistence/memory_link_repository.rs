//! In-process implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link storage backed by a concurrent hash map.
///
/// Insert-if-absent and click increments run under the map's per-shard lock,
/// which gives the same guarantees as the unique constraint and atomic
/// `UPDATE` of [`super::PgLinkRepository`]. Data is lost on restart.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: DashMap<String, Link>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.slug.clone()) {
            Entry::Occupied(_) => Err(AppError::SlugTaken(new_link.slug)),
            Entry::Vacant(slot) => {
                let link = new_link.into_link(Utc::now());
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(slug).map(|entry| entry.value().clone()))
    }

    async fn record_click(&self, slug: &str) -> Result<Option<String>, AppError> {
        Ok(self.links.get_mut(slug).map(|mut entry| {
            entry.clicks += 1;
            entry.target.clone()
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
