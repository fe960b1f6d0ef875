// ABOUTME: Root and health check route handlers for service monitoring
// ABOUTME: Public endpoints used by load balancers and uptime checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the root and health check routes
    #[must_use]
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn root_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "message": "Rexora Media API is running",
                "status": "ok"
            }))
        }

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy"
            }))
        }

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_handler))
    }
}
