// ABOUTME: Shared server state and HTTP router assembly
// ABOUTME: Wires routes, CORS, tracing, and body limits; serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

//! Server assembly: the injected resource bundle, the router, and the
//! serving loop.

use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::middleware::setup_cors;
use crate::routes::{AuthRoutes, HealthRoutes, ProjectRoutes, ReviewRoutes, SettingsRoutes};
use crate::store::SharedStore;

/// Request body ceiling. Roomy enough for a limit-sized video plus
/// thumbnail and form fields in one multipart body; per-kind validation
/// applies the real limits.
const MAX_REQUEST_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Everything a request handler needs, shared read-only across requests.
///
/// Built once at startup from the loaded configuration and injected into the
/// router state — there is no ambient global configuration anywhere.
pub struct ServerResources {
    /// Loaded configuration (admin identity, secrets, store settings)
    pub config: ServerConfig,
    /// Token issuance and verification
    pub auth_manager: AuthManager,
    /// Document store handle
    pub store: SharedStore,
}

impl ServerResources {
    /// Bundle the configuration and store into shared state
    #[must_use]
    pub fn new(config: ServerConfig, store: SharedStore) -> Self {
        let auth_manager = AuthManager::new(
            config.auth.jwt_secret.as_bytes(),
            config.auth.token_expiry_hours,
        );
        Self {
            config,
            auth_manager,
            store,
        }
    }
}

/// Assemble the full application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(ProjectRoutes::routes(resources.clone()))
        .merge(ReviewRoutes::routes(resources.clone()))
        .merge(SettingsRoutes::routes(resources.clone()))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(setup_cors(&resources.config))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until SIGINT/SIGTERM
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server loop fails.
pub async fn serve(resources: Arc<ServerResources>) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], resources.config.http_port));
    let app = build_router(resources);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Rexora Media API listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete; store client released");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
