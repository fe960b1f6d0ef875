// ABOUTME: Request middleware: the admin gate and CORS configuration
// ABOUTME: Everything that runs before a handler sees the request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

/// Admin gate: bearer-token enforcement in front of mutating routes
pub mod auth;

/// CORS layer configuration
pub mod cors;

pub use auth::admin_gate;
pub use cors::setup_cors;
