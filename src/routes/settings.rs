// ABOUTME: Site settings route handlers: public read, gated sparse update and logo upload
// ABOUTME: Stored fields overlay compiled-in defaults so reads always return a full document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

use axum::extract::{Multipart, State};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use super::projects::MessageResponse;
use crate::errors::{AppError, AppResult};
use crate::media::{self, UploadKind, UploadedAsset};
use crate::middleware::admin_gate;
use crate::models::{SiteSettings, SiteSettingsUpdate, SITE_SETTINGS_ID};
use crate::server::ServerResources;
use crate::store::{collections, UpdateDocument};

/// Logo upload response: the confirmation plus the stored data URI so the
/// dashboard can render it immediately
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Stored logo data URI
    pub logo: String,
}

/// Site settings routes handler
pub struct SettingsRoutes;

impl SettingsRoutes {
    /// Create all site settings routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let protected = Router::new()
            .route("/api/site-settings", axum::routing::put(Self::update))
            .route("/api/site-settings/logo", post(Self::upload_logo))
            .route_layer(middleware::from_fn_with_state(
                resources.clone(),
                admin_gate,
            ));

        Router::new()
            .route("/api/site-settings", get(Self::get))
            .merge(protected)
            .with_state(resources)
    }

    /// Read the site settings, falling back to compiled-in defaults.
    ///
    /// The stored document may be sparse (an early logo upload creates just
    /// the logo field), so stored fields overlay the defaults rather than
    /// replacing the document wholesale.
    async fn get(State(resources): State<Arc<ServerResources>>) -> AppResult<Json<Value>> {
        let defaults = serde_json::to_value(SiteSettings::default())
            .map_err(|e| AppError::internal(format!("serializing default settings: {e}")))?;

        let stored = resources
            .store
            .find_by_id(collections::SITE_SETTINGS, SITE_SETTINGS_ID)
            .await?;

        let merged = match (defaults, stored) {
            (Value::Object(mut base), Some(Value::Object(overlay))) => {
                for (key, value) in overlay {
                    base.insert(key, value);
                }
                Value::Object(base)
            }
            (defaults, _) => defaults,
        };

        Ok(Json(merged))
    }

    /// Apply a partial settings update
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<SiteSettingsUpdate>,
    ) -> AppResult<Json<MessageResponse>> {
        let update = request.into_update()?;
        resources
            .store
            .upsert(collections::SITE_SETTINGS, SITE_SETTINGS_ID, update)
            .await?;

        Ok(Json(MessageResponse {
            message: "Site settings updated successfully".into(),
        }))
    }

    /// Upload a new site logo
    async fn upload_logo(
        State(resources): State<Arc<ServerResources>>,
        multipart: Multipart,
    ) -> AppResult<Json<LogoResponse>> {
        let asset = read_logo_field(multipart).await?;
        tracing::info!("Received logo upload, size: {:.2}MB", asset.size_mib());

        let logo = media::process(&asset, UploadKind::Logo)?.stored_value();

        let mut update = UpdateDocument::new();
        update.insert("logo".into(), Value::String(logo.clone()));
        resources
            .store
            .upsert(collections::SITE_SETTINGS, SITE_SETTINGS_ID, update)
            .await?;

        tracing::info!("Logo uploaded successfully");
        Ok(Json(LogoResponse {
            message: "Logo uploaded successfully".into(),
            logo,
        }))
    }
}

async fn read_logo_field(mut multipart: Multipart) -> AppResult<UploadedAsset> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid_input(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("logo") {
            let content_type = field.content_type().map(ToOwned::to_owned);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::invalid_input(format!("Unreadable file field: {e}")))?;
            return Ok(UploadedAsset::new(bytes, content_type));
        }
    }

    Err(AppError::invalid_input("Missing required field: logo"))
}
