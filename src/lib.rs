// ABOUTME: Main library entry point for the Rexora Media portfolio backend
// ABOUTME: Admin authentication, media upload pipeline, and site content management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

#![deny(unsafe_code)]

//! # Rexora Media Server
//!
//! Backend for the Rexora Media portfolio site. A single administrator
//! authenticates with email/password, receives a signed session token, and
//! manages projects (video + thumbnail + metadata), client reviews, and
//! global site settings. Public visitors read everything without
//! authentication.
//!
//! ## Architecture
//!
//! - **Auth**: stateless HS256 session tokens; a middleware gate in front of
//!   every mutating route
//! - **Media**: upload validation (per-kind size/type limits) and base64
//!   encoding into store-safe text
//! - **Store**: document-store abstraction (find/insert/update/delete by
//!   string id) with a pluggable backend seam
//! - **Routes**: thin axum handlers per domain (auth, projects, reviews,
//!   site settings, health)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rexora_media_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("configured HTTP port: {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Session token issuance and verification
pub mod auth;

/// Configuration management (environment-driven)
pub mod config;

/// Unified error handling: error codes, HTTP mapping, wire format
pub mod errors;

/// Logging configuration and subscriber setup
pub mod logging;

/// Upload validation and binary-to-text encoding
pub mod media;

/// Request middleware (admin gate, CORS)
pub mod middleware;

/// Domain records and request/response payloads
pub mod models;

/// HTTP routes organized by domain
pub mod routes;

/// Shared server state and router assembly
pub mod server;

/// Document store abstraction and backends
pub mod store;
