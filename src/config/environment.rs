// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads and validates required variables once at startup, fail-fast on gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

//! Environment-based configuration management
//!
//! Every required setting is read exactly once at startup into an explicit
//! [`ServerConfig`] that gets injected into the components needing it. There
//! is no ambient global lookup, and a missing variable aborts startup with
//! an enumeration of *all* missing names rather than failing one at a time.

use anyhow::{bail, Context, Result};
use std::env;
use std::fmt;
use subtle::ConstantTimeEq;
use tracing::info;

/// Required environment variables, checked together so the startup error
/// names every gap at once
const REQUIRED_VARS: [&str; 5] = [
    "ADMIN_EMAIL",
    "ADMIN_PASSWORD",
    "JWT_SECRET",
    "STORE_URL",
    "STORE_NAME",
];

/// Default HTTP port when `HTTP_PORT` is unset
const DEFAULT_HTTP_PORT: u16 = 8000;

/// The configured administrator identity
///
/// Held in process memory for the lifetime of the server; never persisted to
/// the store and never logged. The `Debug` impl redacts both fields.
#[derive(Clone)]
pub struct AdminCredentials {
    email: String,
    password: String,
}

impl AdminCredentials {
    /// Build credentials, trimming surrounding whitespace from both values
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
            password: password.trim().to_owned(),
        }
    }

    /// The configured admin email (trimmed)
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Check a login attempt against the configured identity.
    ///
    /// Both inputs are trimmed; the email comparison is case-insensitive,
    /// the password comparison is exact and constant-time. Returns a single
    /// boolean — callers must not learn which field mismatched.
    #[must_use]
    pub fn matches(&self, email: &str, password: &str) -> bool {
        let email_ok = email.trim().eq_ignore_ascii_case(&self.email);
        let password_ok: bool = password
            .trim()
            .as_bytes()
            .ct_eq(self.password.as_bytes())
            .into();
        email_ok && password_ok
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token signing configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Symmetric signing secret; unknown to clients, never logged
    pub jwt_secret: String,
    /// Session token lifetime in hours
    pub token_expiry_hours: i64,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &format!("<{} bytes>", self.jwt_secret.len()))
            .field("token_expiry_hours", &self.token_expiry_hours)
            .finish()
    }
}

/// Document store connection configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Connection string; the scheme selects the backend
    pub url: String,
    /// Logical store (database) name
    pub name: String,
}

/// Server configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Administrator identity
    pub admin: AdminCredentials,
    /// Token signing configuration
    pub auth: AuthConfig,
    /// Document store configuration
    pub store: StoreConfig,
    /// Comma-separated CORS origin allowlist, or `*`
    pub cors_allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Fails fast if any required variable is absent, naming every missing
    /// variable, or if `HTTP_PORT` is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .filter(|name| env::var(name).map_or(true, |v| v.trim().is_empty()))
            .copied()
            .collect();
        if !missing.is_empty() {
            bail!(
                "missing required environment variables: {}",
                missing.join(", ")
            );
        }

        let get = |name: &str| -> Result<String> {
            env::var(name).with_context(|| format!("reading {name}"))
        };

        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid HTTP_PORT value: {raw}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            http_port,
            admin: AdminCredentials::new(&get("ADMIN_EMAIL")?, &get("ADMIN_PASSWORD")?),
            auth: AuthConfig {
                jwt_secret: get("JWT_SECRET")?,
                token_expiry_hours: crate::auth::TOKEN_EXPIRY_HOURS,
            },
            store: StoreConfig {
                url: get("STORE_URL")?,
                name: get("STORE_NAME")?,
            },
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".into()),
        })
    }

    /// Log a startup summary. Secrets appear only as masked lengths.
    pub fn log_summary(&self) {
        info!("HTTP port: {}", self.http_port);
        info!("Admin email configured: {}", self.admin.email());
        info!(
            "Signing secret configured: {}",
            "*".repeat(self.auth.jwt_secret.len())
        );
        info!("Store: {} (name: {})", self.store.url, self.store.name);
        info!("CORS origins: {}", self.cors_allowed_origins);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_all_required() {
        env::set_var("ADMIN_EMAIL", "admin@example.com");
        env::set_var("ADMIN_PASSWORD", "correct horse battery staple");
        env::set_var("JWT_SECRET", "test-secret");
        env::set_var("STORE_URL", "memory:");
        env::set_var("STORE_NAME", "portfolio_test");
    }

    fn clear_all() {
        for name in REQUIRED_VARS {
            env::remove_var(name);
        }
        env::remove_var("HTTP_PORT");
        env::remove_var("CORS_ALLOWED_ORIGINS");
    }

    #[test]
    #[serial]
    fn test_from_env_complete() {
        clear_all();
        set_all_required();

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
        assert_eq!(config.admin.email(), "admin@example.com");
        assert_eq!(config.store.name, "portfolio_test");
        assert_eq!(config.cors_allowed_origins, "*");
        clear_all();
    }

    #[test]
    #[serial]
    fn test_from_env_enumerates_all_missing() {
        clear_all();
        env::set_var("ADMIN_EMAIL", "admin@example.com");
        env::set_var("STORE_URL", "memory:");

        let err = ServerConfig::from_env().unwrap_err().to_string();
        assert!(err.contains("ADMIN_PASSWORD"), "got: {err}");
        assert!(err.contains("JWT_SECRET"), "got: {err}");
        assert!(err.contains("STORE_NAME"), "got: {err}");
        assert!(!err.contains("ADMIN_EMAIL,"), "got: {err}");
        clear_all();
    }

    #[test]
    #[serial]
    fn test_configured_values_are_trimmed() {
        clear_all();
        set_all_required();
        env::set_var("ADMIN_EMAIL", "  admin@example.com  ");
        env::set_var("ADMIN_PASSWORD", " secret ");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.admin.email(), "admin@example.com");
        assert!(config.admin.matches("admin@example.com", "secret"));
        clear_all();
    }

    #[test]
    fn test_credentials_match_trims_and_ignores_email_case() {
        let creds = AdminCredentials::new("admin@example.com", "Sneha@1054");

        assert!(creds.matches(" Admin@Example.com ", "Sneha@1054"));
        assert!(creds.matches("ADMIN@EXAMPLE.COM", " Sneha@1054 "));
        assert!(!creds.matches("admin@example.com", "sneha@1054"));
        assert!(!creds.matches("other@example.com", "Sneha@1054"));
        assert!(!creds.matches("admin@example.com", "Sneha@105"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = AdminCredentials::new("admin@example.com", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("hunter2"));

        let auth = AuthConfig {
            jwt_secret: "super-secret-key".into(),
            token_expiry_hours: 24,
        };
        let rendered = format!("{auth:?}");
        assert!(!rendered.contains("super-secret-key"));
    }
}
