// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tagged ciphertext envelope.
//!
//! Encrypted preferences travel through the ledger as a single string of
//! the form `<scheme>-<base64>`, e.g. `FHE-eyJub2lzZV9sZXZlbCI6Mn0=`.
//! The tag names the encryption scheme that produced the payload; the
//! payload is standard base64 (padded, `+/` alphabet). Everything after
//! the first `-` belongs to the payload, so scheme tags must not contain
//! the separator themselves.
//!
//! [`EncryptedEnvelope`] keeps the two halves apart in memory and only
//! joins them at serialization boundaries. Code outside the cipher layer
//! treats the ciphertext as opaque bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use smol_str::SmolStr;
use std::str::FromStr;

/// Separator between the scheme tag and the base64 payload.
pub const TAG_SEPARATOR: char = '-';

/// An encryption-scheme-tagged ciphertext.
///
/// Construction validates the tag; parsing validates tag and payload.
/// The ciphertext bytes are whatever the scheme produced and are not
/// inspected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedEnvelope {
    scheme: SmolStr,
    ciphertext: Vec<u8>,
}

impl EncryptedEnvelope {
    /// Wrap ciphertext bytes under a scheme tag.
    ///
    /// Fails if the tag is empty or contains the separator, since such a
    /// tag could not be recovered from the serialized form.
    pub fn new(scheme: impl Into<SmolStr>, ciphertext: Vec<u8>) -> Result<Self, EnvelopeError> {
        let scheme = scheme.into();
        if scheme.is_empty() {
            return Err(EnvelopeError::EmptyTag);
        }
        if scheme.contains(TAG_SEPARATOR) {
            return Err(EnvelopeError::InvalidTag {
                tag: scheme.to_string(),
            });
        }
        Ok(Self { scheme, ciphertext })
    }

    /// Parse the `<scheme>-<base64>` wire form.
    pub fn parse(s: &str) -> Result<Self, EnvelopeError> {
        let (tag, payload) = s
            .split_once(TAG_SEPARATOR)
            .ok_or(EnvelopeError::MissingSeparator)?;
        if tag.is_empty() {
            return Err(EnvelopeError::EmptyTag);
        }
        let ciphertext = STANDARD.decode(payload)?;
        Ok(Self {
            scheme: SmolStr::new(tag),
            ciphertext,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn into_ciphertext(self) -> Vec<u8> {
        self.ciphertext
    }

    /// Render the `<scheme>-<base64>` wire form.
    pub fn to_tagged_string(&self) -> String {
        format!(
            "{}{}{}",
            self.scheme,
            TAG_SEPARATOR,
            STANDARD.encode(&self.ciphertext)
        )
    }
}

impl std::fmt::Display for EncryptedEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_tagged_string())
    }
}

impl FromStr for EncryptedEnvelope {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for EncryptedEnvelope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_tagged_string())
    }
}

impl<'de> serde::Deserialize<'de> for EncryptedEnvelope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Malformed envelope wire form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    #[error("envelope has no scheme separator")]
    MissingSeparator,
    #[error("envelope scheme tag is empty")]
    EmptyTag,
    #[error("envelope scheme tag {tag:?} contains the separator")]
    InvalidTag { tag: String },
    #[error("envelope payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
