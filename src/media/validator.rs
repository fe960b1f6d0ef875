// ABOUTME: Upload validation: per-kind size ceilings and content-type prefixes
// ABOUTME: Size checks run strictly before type checks; encoded text has its own ceiling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

use std::fmt;

use super::{EncodedAsset, UploadKind, UploadedAsset};
use crate::errors::{AppError, ErrorCode};

/// Ceiling for the encoded text, in MiB. The store imposes a hard document
/// limit around 16 MiB and base64 inflates payloads by roughly 4/3, so the
/// encoded form is checked separately from the raw bytes.
pub const ENCODED_CEILING_MIB: f64 = 15.0;

/// Upload validation failure, carrying the kind and the measured size so
/// the wire detail can name both
#[derive(Debug, Clone)]
pub enum UploadError {
    /// Raw payload over the kind's ceiling
    TooLarge {
        /// Which payload kind failed
        kind: UploadKind,
        /// Measured raw size in MiB
        size_mib: f64,
    },
    /// Declared content type absent or outside the kind's family
    InvalidType {
        /// Which payload kind failed
        kind: UploadKind,
    },
    /// Encoded text over the store document ceiling
    EncodedTooLarge {
        /// Which payload kind failed
        kind: UploadKind,
        /// Measured encoded size in MiB
        size_mib: f64,
    },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail())
    }
}

impl std::error::Error for UploadError {}

impl UploadError {
    /// Human-readable detail string, surfaced verbatim on the wire
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::TooLarge { kind, size_mib } => match kind {
                UploadKind::Video => format!(
                    "Video file is too large ({size_mib:.2}MB). Maximum allowed size is \
                     {}MB. Please compress your video and try again.",
                    kind.max_size_mib()
                ),
                UploadKind::Thumbnail => format!(
                    "Thumbnail file is too large ({size_mib:.2}MB). Maximum allowed size is {}MB.",
                    kind.max_size_mib()
                ),
                UploadKind::Logo => format!(
                    "Logo file is too large ({size_mib:.2}MB). Maximum allowed size is {}MB.",
                    kind.max_size_mib()
                ),
            },
            Self::InvalidType { kind } => match kind {
                UploadKind::Video => "Invalid file type. Please upload a video file.".into(),
                UploadKind::Thumbnail => {
                    "Invalid thumbnail file type. Please upload an image file.".into()
                }
                UploadKind::Logo => "Invalid file type. Please upload an image file.".into(),
            },
            Self::EncodedTooLarge { kind, size_mib } => format!(
                "{} file is too large after encoding ({size_mib:.2}MB). Please use a \
                 smaller file.",
                kind.display_name()
            ),
        }
    }

    /// Error code for the HTTP boundary
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::TooLarge { kind, .. } => match kind {
                UploadKind::Video => ErrorCode::VideoTooLarge,
                UploadKind::Thumbnail => ErrorCode::ThumbnailTooLarge,
                UploadKind::Logo => ErrorCode::LogoTooLarge,
            },
            Self::InvalidType { kind } => match kind {
                UploadKind::Video => ErrorCode::InvalidVideoType,
                UploadKind::Thumbnail => ErrorCode::InvalidThumbnailType,
                UploadKind::Logo => ErrorCode::InvalidLogoType,
            },
            Self::EncodedTooLarge { .. } => ErrorCode::EncodedAssetTooLarge,
        }
    }
}

impl From<UploadError> for AppError {
    fn from(error: UploadError) -> Self {
        Self::new(error.code(), error.detail()).with_source(error)
    }
}

/// Validate a payload against its kind's limits.
///
/// The size check runs before the content-type check so a payload that is
/// both too large and mistyped reports the size failure — the ordering is
/// part of the contract.
///
/// # Errors
///
/// - [`UploadError::TooLarge`] when the raw bytes exceed the kind's ceiling
/// - [`UploadError::InvalidType`] when the declared content type is absent
///   or does not start with the kind's required prefix
pub fn validate(asset: &UploadedAsset, kind: UploadKind) -> Result<(), UploadError> {
    let size_mib = asset.size_mib();
    if size_mib > kind.max_size_mib() {
        tracing::warn!(
            "{} upload rejected: {size_mib:.2}MB exceeds {}MB limit",
            kind.display_name(),
            kind.max_size_mib()
        );
        return Err(UploadError::TooLarge { kind, size_mib });
    }

    let type_ok = asset
        .declared_content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with(kind.required_type_prefix()));
    if !type_ok {
        tracing::warn!(
            "{} upload rejected: declared content type {:?}",
            kind.display_name(),
            asset.declared_content_type
        );
        return Err(UploadError::InvalidType { kind });
    }

    Ok(())
}

/// Check the post-encoding ceiling
///
/// # Errors
///
/// Returns [`UploadError::EncodedTooLarge`] when the encoded text exceeds
/// [`ENCODED_CEILING_MIB`].
pub fn check_encoded_size(encoded: &EncodedAsset, kind: UploadKind) -> Result<(), UploadError> {
    let size_mib = encoded.encoded_mib();
    if size_mib > ENCODED_CEILING_MIB {
        tracing::warn!(
            "{} upload rejected: encoded size {size_mib:.2}MB exceeds store ceiling",
            kind.display_name()
        );
        return Err(UploadError::EncodedTooLarge { kind, size_mib });
    }
    Ok(())
}
