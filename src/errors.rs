// ABOUTME: Unified error handling: error codes, HTTP status mapping, wire format
// ABOUTME: Single AppError type carried from domain modules to the HTTP boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

//! # Unified Error Handling System
//!
//! This module provides the centralized error handling for the server. It
//! defines standard error codes, their HTTP status mapping, and the JSON wire
//! format so that every route reports failures consistently.
//!
//! Domain modules ([`crate::auth`], [`crate::media`], [`crate::store`]) carry
//! their own typed errors; those convert into [`AppError`] only at the HTTP
//! boundary, so callers inside the library are statically forced to handle
//! each failure kind.

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication & Authorization (1000-1999)
    /// No usable `Authorization: Bearer` header on a protected route
    #[serde(rename = "AUTH_REQUIRED")]
    AuthRequired = 1000,
    /// Token signature did not verify (tampered or wrong secret)
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid = 1001,
    /// Token expiry instant has passed
    #[serde(rename = "AUTH_EXPIRED")]
    AuthExpired = 1002,
    /// Token could not be parsed as a signed payload
    #[serde(rename = "AUTH_MALFORMED")]
    AuthMalformed = 1003,
    /// Login credentials did not match the configured admin identity
    #[serde(rename = "INVALID_CREDENTIALS")]
    InvalidCredentials = 1004,

    // Upload validation (3000-3999)
    /// Video payload over the raw-byte ceiling
    #[serde(rename = "VIDEO_TOO_LARGE")]
    VideoTooLarge = 3000,
    /// Video declared content type is not `video/*`
    #[serde(rename = "INVALID_VIDEO_TYPE")]
    InvalidVideoType = 3001,
    /// Thumbnail payload over the raw-byte ceiling
    #[serde(rename = "THUMBNAIL_TOO_LARGE")]
    ThumbnailTooLarge = 3002,
    /// Thumbnail declared content type is not `image/*`
    #[serde(rename = "INVALID_THUMBNAIL_TYPE")]
    InvalidThumbnailType = 3003,
    /// Logo payload over the raw-byte ceiling
    #[serde(rename = "LOGO_TOO_LARGE")]
    LogoTooLarge = 3004,
    /// Logo declared content type is not `image/*`
    #[serde(rename = "INVALID_LOGO_TYPE")]
    InvalidLogoType = 3005,
    /// Encoded text exceeds the store document ceiling
    #[serde(rename = "ENCODED_ASSET_TOO_LARGE")]
    EncodedAssetTooLarge = 3006,
    /// Request payload failed a generic validation check
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3007,
    /// A numeric field is outside its permitted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3008,

    // Resource Management (4000-4999)
    /// The addressed record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// The document store rejected or dropped the operation
    #[serde(rename = "STORE_UNAVAILABLE")]
    StoreUnavailable = 9001,
    /// Startup configuration problem
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 9002,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            // 401 Unauthorized: the whole token/credential family. The wire
            // contract treats expiry and malformation as 401, not 403.
            Self::AuthRequired
            | Self::AuthInvalid
            | Self::AuthExpired
            | Self::AuthMalformed
            | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,

            // 400 Bad Request
            Self::VideoTooLarge
            | Self::InvalidVideoType
            | Self::ThumbnailTooLarge
            | Self::InvalidThumbnailType
            | Self::LogoTooLarge
            | Self::InvalidLogoType
            | Self::EncodedAssetTooLarge
            | Self::InvalidInput
            | Self::ValueOutOfRange => StatusCode::BAD_REQUEST,

            // 404 Not Found
            Self::ResourceNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            Self::InternalError | Self::StoreUnavailable | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AuthRequired => "Authentication is required to access this resource",
            Self::AuthInvalid => "The provided authentication token is invalid",
            Self::AuthExpired => "The authentication token has expired",
            Self::AuthMalformed => "The authentication token is malformed",
            Self::InvalidCredentials => "The provided login credentials are invalid",
            Self::VideoTooLarge => "The video file exceeds the size limit",
            Self::InvalidVideoType => "The uploaded file is not a video",
            Self::ThumbnailTooLarge => "The thumbnail file exceeds the size limit",
            Self::InvalidThumbnailType => "The uploaded thumbnail is not an image",
            Self::LogoTooLarge => "The logo file exceeds the size limit",
            Self::InvalidLogoType => "The uploaded logo is not an image",
            Self::EncodedAssetTooLarge => "The encoded file exceeds the storage ceiling",
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::InternalError => "An internal server error occurred",
            Self::StoreUnavailable => "The document store is unavailable",
            Self::ConfigError => "Configuration error encountered",
        }
    }
}

/// Unified error type for the application
#[derive(Debug)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable detail message, surfaced on the wire for 4xx errors
    pub message: String,
    /// Source error for error chaining
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Missing or unusable authorization header
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "Invalid authorization header")
    }

    /// Invalid authentication token
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Expired authentication token
    #[must_use]
    pub fn auth_expired() -> Self {
        Self::new(ErrorCode::AuthExpired, "Token expired")
    }

    /// Failed login credential check; deliberately generic so the response
    /// never reveals which field was wrong
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials, "Invalid credentials")
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format: a `detail` string plus a stable machine code
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable detail message
    pub detail: String,
    /// Stable error code for clients that branch on failure kind
    pub code: ErrorCode,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            detail: error.message.clone(),
            code: error.code,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        // 5xx details stay server-side; clients get the generic description.
        let body = if status.is_server_error() {
            tracing::error!(code = ?self.code, "request failed: {}", self.message);
            ErrorResponse {
                detail: self.code.description().to_owned(),
                code: self.code,
            }
        } else {
            ErrorResponse::from(&self)
        };

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::new(ErrorCode::InternalError, error.to_string())
    }
}
