#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use tiny_url::application::services::ShortenerSettings;
use tiny_url::domain::repositories::MappingStore;
use tiny_url::infrastructure::persistence::{MemoryMappingStore, PgMappingStore};
use tiny_url::routes::app_router;
use tiny_url::state::AppState;

pub const BASE_URL: &str = "http://localhost:3000";

pub fn create_test_state() -> AppState {
    create_state_with_store(Arc::new(MemoryMappingStore::new()))
}

pub fn create_state_with_store(store: Arc<dyn MappingStore>) -> AppState {
    AppState::from_store(store, ShortenerSettings::new(BASE_URL))
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    create_state_with_store(Arc::new(PgMappingStore::new(Arc::new(pool))))
}

pub fn create_test_app(state: AppState) -> Router {
    app_router(state, "public")
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app(create_test_state())).unwrap()
}

pub async fn insert_mapping(pool: &PgPool, code: &str, url: &str, clicks: i64) {
    sqlx::query("INSERT INTO url_mappings (original_url, short_code, clicks) VALUES ($1, $2, $3)")
        .bind(url)
        .bind(code)
        .bind(clicks)
        .execute(pool)
        .await
        .unwrap();
}
