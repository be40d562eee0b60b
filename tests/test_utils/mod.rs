//! Test utilities for integration tests
use std::fs;
use std::sync::{Arc, RwLock};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tower::util::ServiceExt;

use popcue::api::AppState;
use popcue::api::app;
use popcue::core::AppConfig;
use popcue::core::db::{async_db, initialize_db};
use popcue::feed::models::Website;

/// Base config for tests. No provider keys: assist tests that need a
/// working upstream pass their own config.
pub fn test_config() -> AppConfig {
    AppConfig {
        db_path: String::new(),
        feed_api_url: String::from("http://localhost:3344"),
        assist_api_hostname: String::from("https://api.openai.com"),
        assist_api_keys: vec![],
        assist_model: String::from("gpt-4.1-mini"),
    }
}

/// Creates a test application router backed by a fresh temporary store
pub async fn test_app() -> Router {
    test_app_with_config(test_config()).await
}

pub async fn test_app_with_config(mut config: AppConfig) -> Router {
    let dir = tempfile::TempDir::new()
        .expect("Failed to create temp dir")
        .keep();
    let db_path = dir.join("db");
    fs::create_dir_all(&db_path).expect("Failed to create db directory");
    config.db_path = db_path.display().to_string();

    let db = async_db(&config.db_path)
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn).expect("Failed to initialize db");
        Ok(())
    })
    .await
    .unwrap();

    let app_state = AppState::new(db, config);
    app(Arc::new(RwLock::new(app_state)))
}

/// Register a website through the admin API and return it
pub async fn create_site(app: &Router, name: &str, plan: &str) -> Website {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/site")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::json!({"name": name, "plan": plan}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_string(response.into_body()).await;
    serde_json::from_str(&body).unwrap()
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
