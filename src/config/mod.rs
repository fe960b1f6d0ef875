// ABOUTME: Configuration module: environment-driven server configuration
// ABOUTME: All settings load once at startup and are injected, never read ambiently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

/// Environment-based configuration loading
pub mod environment;

pub use environment::{AdminCredentials, AuthConfig, ServerConfig, StoreConfig};
