// ABOUTME: Admin gate middleware enforcing bearer-token auth on mutating routes
// ABOUTME: Verifies the session token and injects the admin claims before the handler runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

//! # Admin Gate
//!
//! Request-level middleware wrapped around every state-mutating route (and
//! the admin verify/stats routes). It extracts the `Authorization: Bearer`
//! header, delegates verification to [`crate::auth::AuthManager`], and on
//! success injects the verified [`Claims`] as a request extension for the
//! downstream handler. On failure the handler — and therefore the store —
//! is never reached.
//!
//! Public read routes are registered without this layer.

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::auth::{Claims, TokenError};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::server::ServerResources;

/// Axum middleware entry point; attach with
/// `axum::middleware::from_fn_with_state`
///
/// # Errors
///
/// Returns a 401-mapped [`AppError`] when the header is missing or the
/// token fails verification.
pub async fn admin_gate(
    State(resources): State<Arc<ServerResources>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authenticate(request.headers(), &resources)?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Check the authorization header and return the verified claims.
///
/// Wire contract for the 401 details: a missing or non-Bearer header is
/// "Invalid authorization header"; an expired token is "Token expired";
/// everything else is "Invalid token".
pub fn authenticate(headers: &HeaderMap, resources: &ServerResources) -> AppResult<Claims> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let Some(token) = auth_header.and_then(|value| value.strip_prefix("Bearer ")) else {
        tracing::warn!("request rejected: missing or malformed authorization header");
        return Err(AppError::auth_required());
    };

    match resources.auth_manager.verify(token) {
        Ok(claims) => Ok(claims),
        Err(TokenError::Expired) => {
            tracing::warn!("request rejected: session token expired");
            Err(AppError::auth_expired())
        }
        Err(TokenError::InvalidSignature) => {
            tracing::warn!("request rejected: token signature verification failed");
            Err(AppError::auth_invalid("Invalid token"))
        }
        Err(TokenError::Malformed { details }) => {
            tracing::warn!("request rejected: malformed token ({details})");
            Err(AppError::new(ErrorCode::AuthMalformed, "Invalid token"))
        }
    }
}
