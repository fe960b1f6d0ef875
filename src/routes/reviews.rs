// ABOUTME: Client review route handlers: public listing, gated create/update/delete
// ABOUTME: Star ratings are range-checked before anything reaches the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{middleware, Json, Router};
use std::sync::Arc;

use super::projects::MessageResponse;
use crate::errors::{AppError, AppResult};
use crate::middleware::admin_gate;
use crate::models::{Review, ReviewCreate, ReviewResponse, ReviewUpdate};
use crate::server::ServerResources;
use crate::store::collections;

/// Review routes handler
pub struct ReviewRoutes;

impl ReviewRoutes {
    /// Create all review routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        let protected = Router::new()
            .route("/api/reviews", post(Self::create))
            .route(
                "/api/reviews/:review_id",
                put(Self::update).delete(Self::delete),
            )
            .route_layer(middleware::from_fn_with_state(
                resources.clone(),
                admin_gate,
            ));

        Router::new()
            .route("/api/reviews", get(Self::list))
            .merge(protected)
            .with_state(resources)
    }

    /// List all reviews
    async fn list(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Vec<ReviewResponse>>> {
        let documents = resources.store.find_all(collections::REVIEWS).await?;

        let reviews = documents
            .into_iter()
            .filter_map(|document| match serde_json::from_value::<Review>(document) {
                Ok(review) => Some(ReviewResponse::from(&review)),
                Err(e) => {
                    tracing::warn!("skipping unreadable review record: {e}");
                    None
                }
            })
            .collect();

        Ok(Json(reviews))
    }

    /// Create a review
    async fn create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ReviewCreate>,
    ) -> AppResult<Json<ReviewResponse>> {
        let review = request.into_review()?;

        let document = serde_json::to_value(&review)
            .map_err(|e| AppError::internal(format!("serializing review record: {e}")))?;
        resources
            .store
            .insert(collections::REVIEWS, document)
            .await?;

        tracing::info!("Created review {}", review.id);
        Ok(Json(ReviewResponse::from(&review)))
    }

    /// Apply a partial update to a review
    async fn update(
        State(resources): State<Arc<ServerResources>>,
        Path(review_id): Path<String>,
        Json(request): Json<ReviewUpdate>,
    ) -> AppResult<Json<MessageResponse>> {
        let matched = resources
            .store
            .update(collections::REVIEWS, &review_id, request.into_update()?)
            .await?;
        if !matched {
            return Err(AppError::not_found("Review"));
        }

        Ok(Json(MessageResponse {
            message: "Review updated successfully".into(),
        }))
    }

    /// Delete a review
    async fn delete(
        State(resources): State<Arc<ServerResources>>,
        Path(review_id): Path<String>,
    ) -> AppResult<Json<MessageResponse>> {
        let deleted = resources
            .store
            .delete(collections::REVIEWS, &review_id)
            .await?;
        if !deleted {
            return Err(AppError::not_found("Review"));
        }

        Ok(Json(MessageResponse {
            message: "Review deleted successfully".into(),
        }))
    }
}
