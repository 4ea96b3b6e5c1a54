#![allow(dead_code)]

use axum_test::TestServer;
use safelink_shortener::domain::repositories::LinkRepository;
use safelink_shortener::infrastructure::persistence::MemoryLinkRepository;
use safelink_shortener::routes::build_router;
use safelink_shortener::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://sho.rt";

pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(repo.clone() as Arc<dyn LinkRepository>, BASE_URL, 5);
    (state, repo)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(build_router(state, true)).unwrap();
    (server, repo)
}

pub async fn create_test_link(repo: &MemoryLinkRepository, slug: &str, target: &str) {
    repo.insert(safelink_shortener::domain::entities::NewLink {
        slug: slug.to_string(),
        target: target.to_string(),
    })
    .await
    .unwrap();
}

pub async fn clicks(repo: &MemoryLinkRepository, slug: &str) -> i64 {
    repo.find_by_slug(slug).await.unwrap().unwrap().clicks
}
