//! Link creation, lookup and click recording.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::slug::{generate_slug, is_well_formed_slug, validate_custom_slug};
use crate::utils::url_validator::validate_target;

/// Service implementing the link store operations on top of a
/// [`LinkRepository`].
///
/// Uniqueness is left to the repository: inserts are attempted directly and a
/// [`AppError::SlugTaken`] result is either reported (custom slugs) or
/// retried with a fresh candidate (generated slugs).
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin used to build short URLs.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        Self {
            link_repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target` - The URL to redirect to (absolute, `http`/`https`)
    /// - `custom_slug` - Optional user-chosen slug; a random one is generated otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the target fails validation.
    /// Returns [`AppError::InvalidSlug`] if the custom slug fails validation.
    /// Returns [`AppError::SlugTaken`] if the custom slug already exists.
    pub async fn create_link(
        &self,
        target: &str,
        custom_slug: Option<String>,
    ) -> Result<Link, AppError> {
        let target = validate_target(target).map_err(|e| AppError::InvalidUrl(e.to_string()))?;

        let link = match custom_slug {
            Some(slug) => {
                validate_custom_slug(&slug)?;
                self.link_repository
                    .insert(NewLink { slug, target })
                    .await?
            }
            None => self.insert_with_generated_slug(target).await?,
        };

        metrics::counter!("links_created_total").increment(1);
        info!(slug = %link.slug, target = %link.target, "Link created");

        Ok(link)
    }

    /// Resolves a slug for redirection and counts the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this slug.
    pub async fn resolve_and_record_click(&self, slug: &str) -> Result<String, AppError> {
        if !is_well_formed_slug(slug) {
            return Err(AppError::NotFound(slug.to_string()));
        }

        let target = self
            .link_repository
            .record_click(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(slug.to_string()))?;

        metrics::counter!("link_clicks_total").increment(1);
        debug!(slug = %slug, "Click recorded");

        Ok(target)
    }

    /// Returns the link for `slug` without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this slug.
    pub async fn lookup(&self, slug: &str) -> Result<Link, AppError> {
        if !is_well_formed_slug(slug) {
            return Err(AppError::NotFound(slug.to_string()));
        }

        self.link_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(slug.to_string()))
    }

    /// Builds the public short URL for a slug, pointing at the confirmation page.
    pub fn short_url(&self, slug: &str) -> String {
        format!("{}/s/{}", self.base_url, slug)
    }

    /// Verifies the underlying store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    /// Inserts under freshly generated slugs until one is accepted.
    ///
    /// There is no attempt limit: with 62^6 candidates a collision streak long
    /// enough to matter is not expected.
    async fn insert_with_generated_slug(&self, target: String) -> Result<Link, AppError> {
        loop {
            let candidate = NewLink {
                slug: generate_slug(),
                target: target.clone(),
            };

            match self.link_repository.insert(candidate).await {
                Err(AppError::SlugTaken(slug)) => {
                    metrics::counter!("slug_collisions_total").increment(1);
                    debug!(slug = %slug, "Generated slug collided, retrying");
                }
                result => return result,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;
    use mockall::Sequence;

    fn link_from(new_link: NewLink) -> Link {
        new_link.into_link(Utc::now())
    }

    fn service(repo: MockLinkRepository) -> LinkService<MockLinkRepository> {
        LinkService::new(Arc::new(repo), "https://sho.rt/")
    }

    #[tokio::test]
    async fn test_create_link_with_generated_slug() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert()
            .withf(|l| l.slug.len() == 6 && l.target == "https://example.com")
            .times(1)
            .returning(|l| Ok(link_from(l)));

        let link = service(repo)
            .create_link("https://example.com", None)
            .await
            .unwrap();

        assert_eq!(link.target, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert!(link.slug.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_create_link_retries_on_generated_collision() {
        let mut repo = MockLinkRepository::new();
        let mut seq = Sequence::new();

        repo.expect_insert()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|l| Err(AppError::SlugTaken(l.slug)));
        repo.expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|l| Ok(link_from(l)));

        let result = service(repo)
            .create_link("https://example.com", None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_link_with_custom_slug() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert()
            .withf(|l| l.slug == "promo2025")
            .times(1)
            .returning(|l| Ok(link_from(l)));

        let link = service(repo)
            .create_link("https://example.com", Some("promo2025".to_string()))
            .await
            .unwrap();

        assert_eq!(link.slug, "promo2025");
    }

    #[tokio::test]
    async fn test_create_link_custom_slug_taken_is_not_retried() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|l| Err(AppError::SlugTaken(l.slug)));

        let err = service(repo)
            .create_link("https://example.com", Some("taken".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::SlugTaken(ref s) if s == "taken"));
    }

    #[tokio::test]
    async fn test_create_link_invalid_custom_slug() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert().times(0);

        let err = service(repo)
            .create_link("https://example.com", Some("ab".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidSlug(_)));
    }

    #[tokio::test]
    async fn test_create_link_rejects_ftp() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert().times(0);

        let err = service(repo)
            .create_link("ftp://example.com", None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_create_link_rejects_empty_target() {
        let repo = MockLinkRepository::new();

        let err = service(repo).create_link("", None).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_create_link_propagates_storage_errors() {
        let mut repo = MockLinkRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::Internal("db down".to_string())));

        let err = service(repo)
            .create_link("https://example.com", None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_resolve_and_record_click() {
        let mut repo = MockLinkRepository::new();
        repo.expect_record_click()
            .withf(|slug| slug == "abc")
            .times(1)
            .returning(|_| Ok(Some("https://example.com".to_string())));

        let target = service(repo).resolve_and_record_click("abc").await.unwrap();

        assert_eq!(target, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_slug() {
        let mut repo = MockLinkRepository::new();
        repo.expect_record_click().returning(|_| Ok(None));

        let err = service(repo)
            .resolve_and_record_click("missing")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref s) if s == "missing"));
    }

    #[tokio::test]
    async fn test_lookup_does_not_record_click() {
        let mut repo = MockLinkRepository::new();
        repo.expect_record_click().times(0);
        repo.expect_find_by_slug().times(1).returning(|slug| {
            Ok(Some(link_from(NewLink {
                slug: slug.to_string(),
                target: "https://example.com".to_string(),
            })))
        });

        let link = service(repo).lookup("abc").await.unwrap();

        assert_eq!(link.slug, "abc");
    }

    #[tokio::test]
    async fn test_lookup_unknown_slug() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_slug().returning(|_| Ok(None));

        let err = service(repo).lookup("missing").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_malformed_slug_is_not_found_without_store_access() {
        let mut repo = MockLinkRepository::new();
        repo.expect_record_click().times(0);
        repo.expect_find_by_slug().times(0);
        let service = service(repo);

        for slug in ["", "\0", "a\0b", "../etc"] {
            assert!(matches!(
                service.resolve_and_record_click(slug).await,
                Err(AppError::NotFound(_))
            ));
            assert!(matches!(
                service.lookup(slug).await,
                Err(AppError::NotFound(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_ping_delegates_to_repository() {
        let mut repo = MockLinkRepository::new();
        repo.expect_ping().times(1).returning(|| Ok(()));

        assert!(service(repo).ping().await.is_ok());
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let service = service(MockLinkRepository::new());
        assert_eq!(service.short_url("abc123"), "https://sho.rt/s/abc123");
    }
}
