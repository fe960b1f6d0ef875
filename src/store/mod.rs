// ABOUTME: Document store abstraction: find/insert/update/delete keyed by string ids
// ABOUTME: Backend-neutral seam with URL-scheme backend selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

//! # Document Store
//!
//! The persistence collaborator, kept deliberately abstract: loosely-typed
//! JSON documents addressed by a string `id` field, grouped into named
//! collections. Handlers speak only to [`DocumentStore`]; which backend sits
//! behind it is selected from the store URL scheme at startup.
//!
//! Store failures are their own error channel ([`StoreError`]) and surface
//! as 500s — they are never conflated with request validation failures.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

use crate::config::StoreConfig;
use crate::errors::{AppError, ErrorCode};

#[cfg(feature = "store-memory")]
pub mod memory;

/// Collection names used by the content routes
pub mod collections {
    /// Portfolio project records
    pub const PROJECTS: &str = "projects";
    /// Client review records
    pub const REVIEWS: &str = "reviews";
    /// Singleton site settings document
    pub const SITE_SETTINGS: &str = "site_settings";
}

/// Sparse update: a mapping from field name to new value. Absent fields are
/// left untouched by the store; building one from a partial payload must
/// exclude unset fields rather than writing nulls.
pub type UpdateDocument = serde_json::Map<String, Value>;

/// Store failure channel
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or dropped the operation
    #[error("store operation failed: {0}")]
    Unavailable(String),
    /// The store URL scheme has no registered backend
    #[error("unsupported store URL scheme in {0:?} (available: memory:)")]
    UnsupportedScheme(String),
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        let code = match error {
            StoreError::Unavailable(_) => ErrorCode::StoreUnavailable,
            StoreError::UnsupportedScheme(_) => ErrorCode::ConfigError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Shared handle to the configured store backend
pub type SharedStore = Arc<dyn DocumentStore>;

/// Core document store abstraction
///
/// All backends must implement this trait to provide a consistent interface
/// for the route layer. Documents are JSON objects carrying a string `id`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List every document in a collection
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    /// Look up one document by its `id` field
    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Insert a new document; the document must carry a string `id`
    async fn insert(&self, collection: &str, document: Value) -> Result<(), StoreError>;

    /// Apply a sparse update to one document atomically. Returns `false`
    /// when no document matched the id.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        update: UpdateDocument,
    ) -> Result<bool, StoreError>;

    /// Apply a sparse update, creating the document when absent
    async fn upsert(
        &self,
        collection: &str,
        id: &str,
        update: UpdateDocument,
    ) -> Result<(), StoreError>;

    /// Delete one document by id. Returns `false` when no document matched.
    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError>;

    /// Number of documents in a collection
    async fn count(&self, collection: &str) -> Result<u64, StoreError>;
}

/// Create a store backend from configuration, selected by URL scheme
///
/// # Errors
///
/// Returns [`StoreError::UnsupportedScheme`] when the URL names a backend
/// this build does not carry.
pub fn connect(config: &StoreConfig) -> Result<SharedStore, StoreError> {
    #[cfg(feature = "store-memory")]
    if config.url.starts_with("memory:") {
        tracing::info!("document store backend: in-memory (name: {})", config.name);
        return Ok(Arc::new(memory::MemoryStore::new()));
    }

    Err(StoreError::UnsupportedScheme(config.url.clone()))
}
