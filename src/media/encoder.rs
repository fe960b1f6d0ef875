// ABOUTME: Binary-to-text encoding for validated upload payloads
// ABOUTME: Standard base64, optionally wrapped in a data-URI prefix for direct rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

use base64::engine::general_purpose::STANDARD;
use base64::{DecodeError, Engine as _};

use super::UploadedAsset;

/// The textual form a payload takes inside a stored document.
///
/// Invariant: [`decode`] applied to `encoded_text` yields the exact original
/// bytes. When `mime_prefix` is present the stored value is
/// `data:<mime>;base64,<encoded_text>`; otherwise it is the bare text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAsset {
    /// Base64 text of the original bytes
    pub encoded_text: String,
    /// Content type to embed as a data-URI prefix, when retained
    pub mime_prefix: Option<String>,
}

impl EncodedAsset {
    /// The string written into the document field
    #[must_use]
    pub fn stored_value(&self) -> String {
        match &self.mime_prefix {
            Some(mime) => format!("data:{mime};base64,{}", self.encoded_text),
            None => self.encoded_text.clone(),
        }
    }

    /// Size of the encoded text in MiB
    #[must_use]
    pub fn encoded_mib(&self) -> f64 {
        self.encoded_text.len() as f64 / (1024.0 * 1024.0)
    }
}

/// Deterministically encode a validated payload.
///
/// `embed_mime_prefix` retains the declared content type inline so the
/// stored value is directly usable as a display source.
#[must_use]
pub fn encode(asset: &UploadedAsset, embed_mime_prefix: bool) -> EncodedAsset {
    EncodedAsset {
        encoded_text: STANDARD.encode(&asset.bytes),
        mime_prefix: if embed_mime_prefix {
            asset.declared_content_type.clone()
        } else {
            None
        },
    }
}

/// Invert [`encode`]: recover the original bytes from the encoded text
///
/// # Errors
///
/// Returns a [`DecodeError`] when the text is not valid base64.
pub fn decode(encoded_text: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode(encoded_text)
}
