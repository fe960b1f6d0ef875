// ABOUTME: Admin authentication route handlers: login, token verification, dashboard stats
// ABOUTME: Login checks the configured identity; verify/stats sit behind the admin gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

//! Admin authentication routes
//!
//! `POST /api/admin/login` is the only credential-bearing endpoint. Its
//! failure response is deliberately generic — it never says whether the
//! email or the password was wrong — and the raw password is never logged
//! in any form.

use axum::extract::{Extension, State};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::auth::Claims;
use crate::errors::{AppError, AppResult};
use crate::middleware::admin_gate;
use crate::models::SITE_SETTINGS_ID;
use crate::server::ServerResources;
use crate::store::collections;

/// Admin login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Submitted email
    pub email: String,
    /// Submitted password
    pub password: String,
}

/// Admin login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Freshly issued session token
    pub token: String,
    /// Human-readable confirmation
    pub message: String,
}

/// Token verification response
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Always true on a 200
    pub valid: bool,
    /// Email the token was issued to
    pub email: String,
}

/// Dashboard statistics response
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AdminStatsResponse {
    /// Total project count
    pub total_projects: u64,
    /// Number of services configured in site settings
    pub active_services: u64,
    /// Projects created in the last 7 days
    pub recent_projects: u64,
}

/// Admin auth routes handler
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all admin auth routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let protected = Router::new()
            .route("/api/admin/verify", get(Self::verify))
            .route("/api/admin/stats", get(Self::stats))
            .route_layer(middleware::from_fn_with_state(
                resources.clone(),
                admin_gate,
            ));

        Router::new()
            .route("/api/admin/login", post(Self::login))
            .merge(protected)
            .with_state(resources)
    }

    /// Check the submitted credentials and issue a session token
    async fn login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> AppResult<Json<LoginResponse>> {
        let email = request.email.trim().to_owned();
        tracing::info!("Login attempt for email: {email}");

        if !resources.config.admin.matches(&request.email, &request.password) {
            // One warning for either mismatch; which field failed stays
            // out of logs and out of the response.
            tracing::warn!("Login rejected for email: {email}");
            return Err(AppError::invalid_credentials());
        }

        let token = resources
            .auth_manager
            .issue(&email)
            .map_err(|e| AppError::internal(format!("issuing session token: {e}")))?;

        tracing::info!("Successful login for: {email}");
        Ok(Json(LoginResponse {
            token,
            message: "Login successful".into(),
        }))
    }

    /// Report the verified identity back to the dashboard
    async fn verify(Extension(claims): Extension<Claims>) -> Json<VerifyResponse> {
        Json(VerifyResponse {
            valid: true,
            email: claims.email,
        })
    }

    /// Dashboard counters. Store trouble degrades to zeroed counters
    /// rather than failing the dashboard; the error is logged server-side.
    async fn stats(State(resources): State<Arc<ServerResources>>) -> Json<AdminStatsResponse> {
        match Self::collect_stats(&resources).await {
            Ok(stats) => Json(stats),
            Err(e) => {
                tracing::error!("Error fetching admin stats: {e}");
                Json(AdminStatsResponse::default())
            }
        }
    }

    async fn collect_stats(resources: &ServerResources) -> AppResult<AdminStatsResponse> {
        let total_projects = resources.store.count(collections::PROJECTS).await?;

        let active_services = resources
            .store
            .find_by_id(collections::SITE_SETTINGS, SITE_SETTINGS_ID)
            .await?
            .and_then(|settings| {
                settings
                    .get("services")
                    .and_then(Value::as_array)
                    .map(Vec::len)
            })
            .unwrap_or(0) as u64;

        let seven_days_ago = Utc::now() - Duration::days(7);
        let recent_projects = resources
            .store
            .find_all(collections::PROJECTS)
            .await?
            .iter()
            .filter(|project| {
                project
                    .get("created_at")
                    .and_then(Value::as_str)
                    .and_then(|raw| raw.parse::<chrono::DateTime<Utc>>().ok())
                    .is_some_and(|created| created >= seven_days_ago)
            })
            .count() as u64;

        Ok(AdminStatsResponse {
            total_projects,
            active_services,
            recent_projects,
        })
    }
}
