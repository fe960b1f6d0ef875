// ABOUTME: Project route handlers: multipart creation, listing, video retrieval, update, delete
// ABOUTME: Uploads run through the media pipeline before anything reaches the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

//! Project routes
//!
//! Creation is a multipart form: `title`/`description`/`category` text
//! fields plus a required `video` file and an optional `thumbnail` file.
//! The video is stored as bare base64; the thumbnail as a data URI.
//! Listing never returns video payloads — clients fetch them per project.

use axum::extract::{Multipart, Path, State};
use axum::routing::{get, post, put};
use axum::{middleware, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::media::{self, UploadKind, UploadedAsset};
use crate::middleware::admin_gate;
use crate::models::{Project, ProjectResponse, ProjectUpdate};
use crate::server::ServerResources;
use crate::store::collections;

/// Plain confirmation message
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Video payload for one project
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectVideoResponse {
    /// Bare base64 of the stored video
    pub video_data: String,
}

/// Project routes handler
pub struct ProjectRoutes;

impl ProjectRoutes {
    /// Create all project routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let protected = Router::new()
            .route("/api/projects", post(Self::create))
            .route(
                "/api/projects/:project_id",
                put(Self::update).delete(Self::delete),
            )
            .route_layer(middleware::from_fn_with_state(
                resources.clone(),
                admin_gate,
            ));

        Router::new()
            .route("/api/projects", get(Self::list))
            .route("/api/projects/:project_id", get(Self::video))
            .merge(protected)
            .with_state(resources)
    }

    /// Create a project from a multipart upload
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        multipart: Multipart,
    ) -> AppResult<Json<ProjectResponse>> {
        let form = ProjectForm::read(multipart).await?;

        tracing::info!(
            "Received video upload, size: {:.2}MB",
            form.video.size_mib()
        );
        let video = media::process(&form.video, UploadKind::Video)?;

        let thumbnail = match &form.thumbnail {
            Some(asset) => {
                tracing::info!(
                    "Received thumbnail upload, size: {:.2}MB",
                    asset.size_mib()
                );
                media::process(asset, UploadKind::Thumbnail)?.stored_value()
            }
            None => String::new(),
        };

        let project = Project::new(
            form.title,
            form.description,
            form.category,
            video.stored_value(),
            thumbnail,
        );

        let document = serde_json::to_value(&project)
            .map_err(|e| AppError::internal(format!("serializing project record: {e}")))?;
        resources
            .store
            .insert(collections::PROJECTS, document)
            .await?;

        tracing::info!("Successfully inserted project with ID: {}", project.id);
        Ok(Json(ProjectResponse::from(&project)))
    }

    /// List all projects, omitting video payloads
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Vec<ProjectResponse>>> {
        let documents = resources.store.find_all(collections::PROJECTS).await?;

        let projects = documents
            .into_iter()
            .filter_map(|document| match serde_json::from_value::<Project>(document) {
                Ok(project) => Some(ProjectResponse::from(&project)),
                Err(e) => {
                    tracing::warn!("skipping unreadable project record: {e}");
                    None
                }
            })
            .collect();

        Ok(Json(projects))
    }

    /// Fetch one project's video payload
    async fn video(
        State(resources): State<Arc<ServerResources>>,
        Path(project_id): Path<String>,
    ) -> AppResult<Json<ProjectVideoResponse>> {
        let document = resources
            .store
            .find_by_id(collections::PROJECTS, &project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project"))?;

        let video_data = document
            .get("video_data")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        Ok(Json(ProjectVideoResponse { video_data }))
    }

    /// Update a project's metadata
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Path(project_id): Path<String>,
        Json(request): Json<ProjectUpdate>,
    ) -> AppResult<Json<MessageResponse>> {
        let matched = resources
            .store
            .update(collections::PROJECTS, &project_id, request.into_update()?)
            .await?;
        if !matched {
            return Err(AppError::not_found("Project"));
        }

        Ok(Json(MessageResponse {
            message: "Project updated successfully".into(),
        }))
    }

    /// Delete a project
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        Path(project_id): Path<String>,
    ) -> AppResult<Json<MessageResponse>> {
        let deleted = resources
            .store
            .delete(collections::PROJECTS, &project_id)
            .await?;
        if !deleted {
            return Err(AppError::not_found("Project"));
        }

        tracing::info!("Deleted project {project_id}");
        Ok(Json(MessageResponse {
            message: "Project deleted successfully".into(),
        }))
    }
}

/// Parsed multipart form for project creation
struct ProjectForm {
    title: String,
    description: String,
    category: String,
    video: UploadedAsset,
    thumbnail: Option<UploadedAsset>,
}

impl ProjectForm {
    /// Drain the multipart body into its expected fields, ignoring unknown
    /// ones
    async fn read(mut multipart: Multipart) -> AppResult<Self> {
        let mut title: Option<String> = None;
        let mut description = String::new();
        let mut category = "Project".to_owned();
        let mut video: Option<UploadedAsset> = None;
        let mut thumbnail: Option<UploadedAsset> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::invalid_input(format!("Malformed multipart body: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_owned();
            match name.as_str() {
                "title" => title = Some(read_text(field).await?),
                "description" => description = read_text(field).await?,
                "category" => category = read_text(field).await?,
                "video" => video = Some(read_file(field).await?),
                "thumbnail" => {
                    let asset = read_file(field).await?;
                    // Browsers submit an empty part for a cleared file input
                    if !asset.bytes.is_empty() {
                        thumbnail = Some(asset);
                    }
                }
                _ => {}
            }
        }

        Ok(Self {
            title: title.ok_or_else(|| AppError::invalid_input("Missing required field: title"))?,
            description,
            category,
            video: video.ok_or_else(|| AppError::invalid_input("Missing required field: video"))?,
            thumbnail,
        })
    }
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::invalid_input(format!("Unreadable form field: {e}")))
}

async fn read_file(field: axum::extract::multipart::Field<'_>) -> AppResult<UploadedAsset> {
    let content_type = field.content_type().map(ToOwned::to_owned);
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::invalid_input(format!("Unreadable file field: {e}")))?;
    Ok(UploadedAsset::new(bytes, content_type))
}
