// ABOUTME: Route module organization for the HTTP API
// ABOUTME: One module per domain; handlers are thin and delegate to the core modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

//! HTTP routes organized by domain. Each module exposes a `routes()`
//! constructor returning an [`axum::Router`]; mutating routes carry the
//! admin gate as a route layer, public reads do not.

/// Admin login, token verification, and dashboard stats
pub mod auth;

/// Root and health endpoints
pub mod health;

/// Project CRUD and video retrieval
pub mod projects;

/// Client review CRUD
pub mod reviews;

/// Site settings and logo upload
pub mod settings;

pub use auth::AuthRoutes;
pub use health::HealthRoutes;
pub use projects::ProjectRoutes;
pub use reviews::ReviewRoutes;
pub use settings::SettingsRoutes;
