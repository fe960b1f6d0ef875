// ABOUTME: Tests that the admin gate fences every mutating route
// ABOUTME: Asserts rejected requests never reach the document store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::json;

use common::{
    get, json_request, login_token, send, test_router, test_router_counting, with_bearer,
};

/// Every mutating route, with a representative request body
fn protected_requests() -> Vec<Request<Body>> {
    vec![
        Request::builder()
            .method("POST")
            .uri("/api/projects")
            .body(Body::empty())
            .unwrap(),
        json_request(
            "PUT",
            "/api/projects/some-id",
            &json!({"title": "x", "description": "", "category": "Project"}),
        ),
        Request::builder()
            .method("DELETE")
            .uri("/api/projects/some-id")
            .body(Body::empty())
            .unwrap(),
        json_request(
            "POST",
            "/api/reviews",
            &json!({"client_name": "Ada", "review_text": "ok", "star_rating": 5}),
        ),
        json_request("PUT", "/api/reviews/some-id", &json!({"star_rating": 4})),
        Request::builder()
            .method("DELETE")
            .uri("/api/reviews/some-id")
            .body(Body::empty())
            .unwrap(),
        json_request("PUT", "/api/site-settings", &json!({"hero_title": "x"})),
        Request::builder()
            .method("POST")
            .uri("/api/site-settings/logo")
            .body(Body::empty())
            .unwrap(),
        get("/api/admin/verify"),
        get("/api/admin/stats"),
    ]
}

#[tokio::test]
async fn test_every_mutating_route_rejects_missing_header() {
    let (router, store) = test_router_counting();

    for request in protected_requests() {
        let uri = request.uri().clone();
        let (status, body) = send(&router, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "route {uri} not gated");
        assert_eq!(body["detail"], "Invalid authorization header");
    }

    // The gate fails before the handler: the store saw no traffic at all
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_every_mutating_route_rejects_bad_token() {
    let (router, store) = test_router_counting();

    for request in protected_requests() {
        let uri = request.uri().clone();
        let (status, body) = send(&router, with_bearer(request, "bogus-token")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "route {uri} not gated");
        assert_eq!(body["detail"], "Invalid token");
    }

    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_public_reads_are_not_gated() {
    let (router, _) = test_router();

    for uri in [
        "/",
        "/health",
        "/api/projects",
        "/api/reviews",
        "/api/site-settings",
    ] {
        let (status, _) = send(&router, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "public route {uri} was gated");
    }
}

#[tokio::test]
async fn test_valid_token_passes_the_gate() {
    let (router, _) = test_router();
    let token = login_token(&router).await;

    let (status, _) = send(
        &router,
        with_bearer(
            json_request("PUT", "/api/site-settings", &json!({"hero_title": "New"})),
            &token,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}
