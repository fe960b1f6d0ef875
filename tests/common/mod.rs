// ABOUTME: Shared helpers for integration tests
// ABOUTME: Test resources, request builders, multipart bodies, and a call-counting store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use rexora_media_server::config::{AdminCredentials, AuthConfig, ServerConfig, StoreConfig};
use rexora_media_server::server::{build_router, ServerResources};
use rexora_media_server::store::memory::MemoryStore;
use rexora_media_server::store::{DocumentStore, SharedStore, StoreError, UpdateDocument};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "Sneha@1054";
pub const JWT_SECRET: &str = "integration-test-signing-secret";

/// Store wrapper that counts every call, so tests can assert the store was
/// never reached on a rejected request
pub struct CountingStore {
    inner: MemoryStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        self.record();
        self.inner.find_all(collection).await
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        self.record();
        self.inner.find_by_id(collection, id).await
    }

    async fn insert(&self, collection: &str, document: Value) -> Result<(), StoreError> {
        self.record();
        self.inner.insert(collection, document).await
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        update: UpdateDocument,
    ) -> Result<bool, StoreError> {
        self.record();
        self.inner.update(collection, id, update).await
    }

    async fn upsert(
        &self,
        collection: &str,
        id: &str,
        update: UpdateDocument,
    ) -> Result<(), StoreError> {
        self.record();
        self.inner.upsert(collection, id, update).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        self.record();
        self.inner.delete(collection, id).await
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        self.record();
        self.inner.count(collection).await
    }
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        admin: AdminCredentials::new(ADMIN_EMAIL, ADMIN_PASSWORD),
        auth: AuthConfig {
            jwt_secret: JWT_SECRET.into(),
            token_expiry_hours: 24,
        },
        store: StoreConfig {
            url: "memory:".into(),
            name: "portfolio_test".into(),
        },
        cors_allowed_origins: "*".into(),
    }
}

pub fn test_resources_with(store: SharedStore) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(test_config(), store))
}

/// Router over a fresh in-memory store
pub fn test_router() -> (Router, Arc<ServerResources>) {
    let resources = test_resources_with(Arc::new(MemoryStore::new()));
    (build_router(resources.clone()), resources)
}

/// Router over a counting store, for store-isolation assertions
pub fn test_router_counting() -> (Router, Arc<CountingStore>) {
    let store = Arc::new(CountingStore::new());
    let resources = test_resources_with(store.clone());
    (build_router(resources), store)
}

// ============================================================================
// Request helpers
// ============================================================================

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn with_bearer(mut request: Request<Body>, token: &str) -> Request<Body> {
    request.headers_mut().insert(
        http::header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );
    request
}

/// Dispatch one request and decode the JSON body (Null when empty)
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Log in with the test credentials and return the session token
pub async fn login_token(router: &Router) -> String {
    let (status, body) = send(
        router,
        json_request(
            "POST",
            "/api/admin/login",
            &serde_json::json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().unwrap().to_owned()
}

// ============================================================================
// Multipart bodies
// ============================================================================

pub const BOUNDARY: &str = "rexora-test-boundary-0xKhTmLbOuNdArY";

/// Hand-rolled multipart/form-data body builder
pub struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self { body: Vec::new() }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        self.body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        self.body
            .extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

pub fn multipart_request(uri: &str, token: &str, body: Vec<u8>) -> Request<Body> {
    with_bearer(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap(),
        token,
    )
}

/// A minimal valid project creation body with the given video payload
pub fn project_upload_body(title: &str, video_bytes: &[u8], video_type: &str) -> Vec<u8> {
    MultipartBuilder::new()
        .text("title", title)
        .text("description", "An integration test project")
        .text("category", "Project")
        .file("video", "clip.mp4", video_type, video_bytes)
        .build()
}
