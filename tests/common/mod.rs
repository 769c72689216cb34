//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use product_catalog::build_app;
use product_catalog::config::{Config, StorageConfig};
use product_catalog::models::product::{NewProduct, Product, ProductChanges};
use product_catalog::state::AppState;
use product_catalog::store::{MemoryProductStore, ProductStore, StoreError};

pub fn test_config() -> Config {
    Config {
        host: [127, 0, 0, 1].into(),
        port: 0,
        storage: StorageConfig::Memory,
        cors_origins: Vec::new(),
    }
}

pub fn build_test_app() -> Router {
    build_app_with(Arc::new(MemoryProductStore::new()))
}

pub fn build_app_with(store: Arc<dyn ProductStore>) -> Router {
    build_app(AppState::new(store), &test_config())
}

/// A store whose every operation fails, for exercising the 500 paths.
pub struct FailingStore;

fn down() -> StoreError {
    StoreError::Unavailable("connection refused".into())
}

#[async_trait]
impl ProductStore for FailingStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Err(down())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Product>, StoreError> {
        Err(down())
    }

    async fn insert(&self, _product: NewProduct) -> Result<Product, StoreError> {
        Err(down())
    }

    async fn update(&self, _id: Uuid, _changes: ProductChanges) -> Result<Option<Product>, StoreError> {
        Err(down())
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, StoreError> {
        Err(down())
    }
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
