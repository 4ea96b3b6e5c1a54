//! PostgreSQL repository tests.
//!
//! Ignored by default; run with a database:
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo test --test repository_link -- --ignored
//! ```

use sqlx::PgPool;
use std::sync::Arc;
use safelink_shortener::application::services::LinkService;
use safelink_shortener::domain::entities::NewLink;
use safelink_shortener::domain::repositories::LinkRepository;
use safelink_shortener::error::AppError;
use safelink_shortener::infrastructure::persistence::PgLinkRepository;
use safelink_shortener::utils::db_error::is_unique_violation_on_slug;

fn new_link(slug: &str, target: &str) -> NewLink {
    NewLink {
        slug: slug.to_string(),
        target: target.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .insert(new_link("test123", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(link.slug, "test123");
    assert_eq!(link.target, "https://example.com");
    assert_eq!(link.clicks, 0);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_duplicate_slug(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.insert(new_link("dup", "https://a.com")).await.unwrap();

    let err = repo
        .insert(new_link("dup", "https://b.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::SlugTaken(ref s) if s == "dup"));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_slug(pool: PgPool) {
    sqlx::query("INSERT INTO links (slug, target) VALUES ($1, $2)")
        .bind("abc123")
        .bind("https://example.com")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_slug("abc123").await.unwrap().unwrap();
    assert_eq!(link.target, "https://example.com");

    assert!(repo.find_by_slug("missing").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_record_click(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.insert(new_link("click", "https://example.com"))
        .await
        .unwrap();

    let target = repo.record_click("click").await.unwrap();
    assert_eq!(target.as_deref(), Some("https://example.com"));

    assert_eq!(repo.find_by_slug("click").await.unwrap().unwrap().clicks, 1);
    assert_eq!(repo.record_click("missing").await.unwrap(), None);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_clicks(pool: PgPool) {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    repo.insert(new_link("hot", "https://example.com"))
        .await
        .unwrap();

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..50 {
        let repo = repo.clone();
        tasks.spawn(async move { repo.record_click("hot").await });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }

    assert_eq!(repo.find_by_slug("hot").await.unwrap().unwrap().clicks, 50);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    assert!(repo.ping().await.is_ok());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_nul_slug_is_not_found(pool: PgPool) {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let service = LinkService::new(repo, "https://sho.rt");

    let err = service.resolve_and_record_click("\0").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = service.lookup("a\0b").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_unique_violation_on_primary_key(pool: PgPool) {
    sqlx::query("INSERT INTO links (slug, target) VALUES ('pk', 'https://a.com')")
        .execute(&pool)
        .await
        .unwrap();

    let err = sqlx::query("INSERT INTO links (slug, target) VALUES ('pk', 'https://b.com')")
        .execute(&pool)
        .await
        .unwrap_err();

    assert!(is_unique_violation_on_slug(&err));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_unique_violation_on_other_constraint(pool: PgPool) {
    sqlx::query("CREATE TABLE other (v TEXT UNIQUE)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO other (v) VALUES ('x')")
        .execute(&pool)
        .await
        .unwrap();

    let err = sqlx::query("INSERT INTO other (v) VALUES ('x')")
        .execute(&pool)
        .await
        .unwrap_err();

    assert!(!is_unique_violation_on_slug(&err));
}
