// ABOUTME: Session token issuance and verification for the admin identity
// ABOUTME: Stateless HS256 tokens with a typed expired/invalid/malformed failure channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

//! # Session Tokens
//!
//! The server keeps no session state: a successful login yields a signed
//! HS256 token carrying the admin email and an expiry instant, and every
//! protected request re-verifies that token against the process-wide signing
//! secret. Verification is a pure computation with no storage lookups.
//!
//! Failure is a typed channel — [`TokenError`] distinguishes an expired
//! token from a bad signature from an unparseable string — so the gate can
//! report "Token expired" and "Invalid token" as distinct 401 details.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default session lifetime. Long enough for a working day in the admin
/// dashboard, short enough to bound the exposure window of a leaked token.
pub const TOKEN_EXPIRY_HOURS: i64 = 24;

/// Claims embedded in a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin email the token was issued to
    pub email: String,
    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

/// Token verification failure, one variant per distinguishable cause
#[derive(Debug, Error)]
pub enum TokenError {
    /// The expiry instant has passed
    #[error("token expired")]
    Expired,
    /// Signature verification failed (tampered token or wrong secret)
    #[error("token signature is invalid")]
    InvalidSignature,
    /// The string could not be parsed as a signed payload
    #[error("token is malformed: {details}")]
    Malformed {
        /// What failed to parse
        details: String,
    },
}

/// Issues and verifies session tokens with a process-wide symmetric secret
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a new manager from the configured signing secret
    #[must_use]
    pub fn new(secret: &[u8], token_expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_expiry_hours,
        }
    }

    /// Issue a token for the given subject, expiring `token_expiry_hours`
    /// from now
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Malformed`] if claim serialization fails, which
    /// only happens on allocation failure in practice.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let expiry = Utc::now() + Duration::hours(self.token_expiry_hours);
        let claims = Claims {
            email: subject.to_owned(),
            exp: expiry.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            TokenError::Malformed {
                details: e.to_string(),
            }
        })
    }

    /// Verify a token string and return its claims
    ///
    /// # Errors
    ///
    /// - [`TokenError::Expired`] if the expiry instant has passed
    /// - [`TokenError::InvalidSignature`] if the signature does not match
    /// - [`TokenError::Malformed`] if the string is not a parseable token
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No leeway: a token is invalid the instant its expiry passes.
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => Err(Self::convert_jwt_error(&e)),
        }
    }

    /// Map library errors onto the typed failure channel
    fn convert_jwt_error(e: &jsonwebtoken::errors::Error) -> TokenError {
        use jsonwebtoken::errors::ErrorKind;

        match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidToken => TokenError::Malformed {
                details: "token format is invalid".into(),
            },
            ErrorKind::Base64(base64_err) => TokenError::Malformed {
                details: format!("token contains invalid base64: {base64_err}"),
            },
            ErrorKind::Json(json_err) => TokenError::Malformed {
                details: format!("token contains invalid JSON: {json_err}"),
            },
            ErrorKind::Utf8(utf8_err) => TokenError::Malformed {
                details: format!("token contains invalid UTF-8: {utf8_err}"),
            },
            _ => TokenError::InvalidSignature,
        }
    }
}
