#![allow(dead_code)]

//! Test infrastructure for sprint-server API tests

use sprint_config::ApiConfig;
use sprint_core::{ErrorLocation, Page, PageRequest, Sprint};
use sprint_db::{DbError, Result as DbErrorResult, SprintRepository, SprintStore};
use sprint_server::AppState;

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    sprint_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, returning the pool for direct assertions
pub async fn create_test_app_state() -> (AppState, SqlitePool) {
    let pool = create_test_pool().await;
    let store: Arc<dyn SprintStore> = Arc::new(SprintRepository::new(pool.clone()));
    (AppState::new(store, ApiConfig::default()), pool)
}

pub async fn count_sprints(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM sprints")
        .fetch_one(pool)
        .await
        .expect("Failed to count sprints")
}

/// Insert a sprint through the API and return its id
pub async fn create_sprint(app: &Router, name: &str) -> i64 {
    let response = send(
        app,
        json_request("POST", "/api/sprints", serde_json::json!({ "name": name })),
    )
    .await;
    let json = body_json(response).await;
    json["id"].as_i64().expect("created sprint has an id")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn header(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Store whose every call fails
pub struct FailingStore;

fn store_failure() -> DbError {
    DbError::Initialization {
        message: "store offline".into(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl SprintStore for FailingStore {
    async fn save(&self, _sprint: Sprint) -> DbErrorResult<Sprint> {
        Err(store_failure())
    }

    async fn find_all(&self, _request: &PageRequest) -> DbErrorResult<Page<Sprint>> {
        Err(store_failure())
    }

    async fn find_by_id(&self, _id: i64) -> DbErrorResult<Option<Sprint>> {
        Err(store_failure())
    }

    async fn delete_by_id(&self, _id: i64) -> DbErrorResult<()> {
        Err(store_failure())
    }

    async fn ping(&self) -> DbErrorResult<()> {
        Err(store_failure())
    }
}

pub fn failing_app_state() -> AppState {
    AppState::new(Arc::new(FailingStore), ApiConfig::default())
}
