// ABOUTME: Wire-level tests for site settings reads, sparse updates, and logo upload
// ABOUTME: Covers default fallback, field overlay, and logo validation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use http::StatusCode;
use serde_json::json;

use common::{
    get, json_request, login_token, multipart_request, send, test_router, with_bearer,
    MultipartBuilder,
};

const MIB: usize = 1024 * 1024;

#[tokio::test]
async fn test_defaults_served_when_store_is_empty() {
    let (router, _) = test_router();

    let (status, body) = send(&router, get("/api/site-settings")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "site_settings");
    assert_eq!(body["hero_title"], "Rexora Media");
    assert_eq!(body["hero_tagline"], "Visuals built to perform");
    assert_eq!(body["services"].as_array().unwrap().len(), 7);
    assert_eq!(body["stats"].as_array().unwrap().len(), 3);
    assert_eq!(body["logo"], "");
}

#[tokio::test]
async fn test_sparse_update_overlays_defaults() {
    let (router, _) = test_router();
    let token = login_token(&router).await;

    let (status, body) = send(
        &router,
        with_bearer(
            json_request(
                "PUT",
                "/api/site-settings",
                &json!({"hero_title": "New Studio Name"}),
            ),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Site settings updated successfully");

    let (_, settings) = send(&router, get("/api/site-settings")).await;
    // Updated field replaced; everything else still the defaults
    assert_eq!(settings["hero_title"], "New Studio Name");
    assert_eq!(settings["hero_tagline"], "Visuals built to perform");
    assert_eq!(settings["services"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_empty_settings_update_rejected() {
    let (router, _) = test_router();
    let token = login_token(&router).await;

    let (status, body) = send(
        &router,
        with_bearer(json_request("PUT", "/api/site-settings", &json!({})), &token),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "No data to update");
}

#[tokio::test]
async fn test_logo_upload_stores_data_uri() {
    let (router, _) = test_router();
    let token = login_token(&router).await;

    let body = MultipartBuilder::new()
        .file("logo", "logo.png", "image/png", b"logo-bytes")
        .build();

    let (status, response) = send(
        &router,
        multipart_request("/api/site-settings/logo", &token, body),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {response}");
    assert_eq!(response["message"], "Logo uploaded successfully");
    let logo = response["logo"].as_str().unwrap();
    assert!(logo.starts_with("data:image/png;base64,"));

    // Readable straight back out of the settings document
    let (_, settings) = send(&router, get("/api/site-settings")).await;
    assert_eq!(settings["logo"], logo);
}

#[tokio::test]
async fn test_oversized_logo_rejected() {
    let (router, _) = test_router();
    let token = login_token(&router).await;

    let body = MultipartBuilder::new()
        .file("logo", "logo.png", "image/png", &vec![0u8; 2 * MIB + 1024])
        .build();

    let (status, response) = send(
        &router,
        multipart_request("/api/site-settings/logo", &token, body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "LOGO_TOO_LARGE");
    let detail = response["detail"].as_str().unwrap();
    assert!(detail.contains("2MB"), "detail: {detail}");
}

#[tokio::test]
async fn test_non_image_logo_rejected() {
    let (router, _) = test_router();
    let token = login_token(&router).await;

    let body = MultipartBuilder::new()
        .file("logo", "logo.pdf", "application/pdf", b"%PDF-")
        .build();

    let (status, response) = send(
        &router,
        multipart_request("/api/site-settings/logo", &token, body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "INVALID_LOGO_TYPE");
    assert_eq!(
        response["detail"],
        "Invalid file type. Please upload an image file."
    );
}

#[tokio::test]
async fn test_missing_logo_field_rejected() {
    let (router, _) = test_router();
    let token = login_token(&router).await;

    let body = MultipartBuilder::new().text("other", "value").build();
    let (status, response) = send(
        &router,
        multipart_request("/api/site-settings/logo", &token, body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["detail"], "Missing required field: logo");
}

#[tokio::test]
async fn test_logo_survives_other_settings_updates() {
    let (router, _) = test_router();
    let token = login_token(&router).await;

    let body = MultipartBuilder::new()
        .file("logo", "logo.png", "image/png", b"logo-bytes")
        .build();
    let (_, uploaded) = send(
        &router,
        multipart_request("/api/site-settings/logo", &token, body),
    )
    .await;
    let logo = uploaded["logo"].as_str().unwrap().to_owned();

    let (_, _) = send(
        &router,
        with_bearer(
            json_request("PUT", "/api/site-settings", &json!({"contact_email": "new@rexora.io"})),
            &token,
        ),
    )
    .await;

    let (_, settings) = send(&router, get("/api/site-settings")).await;
    assert_eq!(settings["logo"], logo);
    assert_eq!(settings["contact_email"], "new@rexora.io");
}
