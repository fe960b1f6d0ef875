// ABOUTME: Media upload pipeline: validation then binary-to-text encoding
// ABOUTME: Defines upload kinds, their limits, and the transient asset type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

//! # Media Upload Pipeline
//!
//! Incoming binary payloads (video, thumbnail, logo) pass through two
//! stages before they reach the store:
//!
//! 1. [`validator`] — per-kind raw-size ceiling, then declared content-type
//!    prefix, in that order
//! 2. [`encoder`] — base64 text, with a data-URI prefix for kinds that are
//!    rendered directly from the stored value
//!
//! A post-encoding ceiling guards the store's document size limit, since
//! base64 inflates payloads by roughly a third.

use bytes::Bytes;

/// Upload validation rules and ordering
pub mod validator;

/// Binary-to-text encoding
pub mod encoder;

pub use encoder::EncodedAsset;
pub use validator::UploadError;

/// The kinds of binary payload the server accepts, each with its own limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Project video, stored as bare base64
    Video,
    /// Project thumbnail, stored as a data URI
    Thumbnail,
    /// Site logo, stored as a data URI
    Logo,
}

impl UploadKind {
    /// Raw-byte size ceiling in MiB, measured before encoding
    #[must_use]
    pub const fn max_size_mib(self) -> f64 {
        match self {
            Self::Video => 10.0,
            Self::Thumbnail => 5.0,
            Self::Logo => 2.0,
        }
    }

    /// Required declared content-type prefix
    #[must_use]
    pub const fn required_type_prefix(self) -> &'static str {
        match self {
            Self::Video => "video/",
            Self::Thumbnail | Self::Logo => "image/",
        }
    }

    /// Whether the stored value carries a `data:<mime>;base64,` prefix.
    ///
    /// Thumbnails and the logo are rendered straight from the stored string,
    /// so they keep their content type inline. Video does not retain its
    /// content type at all — a known inconsistency, kept deliberately:
    /// players treat the payload as a single playable type.
    #[must_use]
    pub const fn embeds_mime_prefix(self) -> bool {
        match self {
            Self::Video => false,
            Self::Thumbnail | Self::Logo => true,
        }
    }

    /// Display name used in failure details
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Thumbnail => "Thumbnail",
            Self::Logo => "Logo",
        }
    }
}

/// Transient in-memory representation of an uploaded payload. Exists only
/// for the duration of one request; never persisted directly.
#[derive(Debug, Clone)]
pub struct UploadedAsset {
    /// Raw payload bytes
    pub bytes: Bytes,
    /// Content type declared by the client, if any
    pub declared_content_type: Option<String>,
}

impl UploadedAsset {
    /// Build an asset from a multipart field's bytes and declared type
    #[must_use]
    pub fn new(bytes: Bytes, declared_content_type: Option<String>) -> Self {
        Self {
            bytes,
            declared_content_type,
        }
    }

    /// Raw payload length in bytes
    #[must_use]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Raw payload size in MiB
    #[must_use]
    pub fn size_mib(&self) -> f64 {
        self.bytes.len() as f64 / (1024.0 * 1024.0)
    }
}

/// Run the full pipeline for one payload: validate, encode, check the
/// post-encoding ceiling
///
/// # Errors
///
/// Returns the kind-specific [`UploadError`] from either stage.
pub fn process(asset: &UploadedAsset, kind: UploadKind) -> Result<EncodedAsset, UploadError> {
    validator::validate(asset, kind)?;
    let encoded = encoder::encode(asset, kind.embeds_mime_prefix());
    validator::check_encoded_size(&encoded, kind)?;
    Ok(encoded)
}
