// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The pluggable encryption capability.

use hush_core::{
    EncryptedEnvelope, EnvelopeError, MatchCriteria, PreferenceRangeError, UserPreferences,
};

/// Encrypt, decrypt, and match preferences without exposing plaintext
/// past the call boundary.
///
/// `matches` must be answerable without decryption on the serving tier;
/// a real backend evaluates the comparison homomorphically or inside an
/// enclave. Implementations must fail closed: an envelope carrying a
/// foreign scheme tag is an error, never a silent pass or garbage
/// plaintext.
pub trait PreferenceCipher: Send + Sync {
    /// Scheme tag this cipher stamps on envelopes it produces.
    fn scheme(&self) -> &str;

    /// Validate and encrypt plaintext preferences.
    fn encrypt(&self, preferences: &UserPreferences) -> Result<EncryptedEnvelope, CipherError>;

    /// Recover plaintext from an envelope produced by this scheme.
    fn decrypt(&self, envelope: &EncryptedEnvelope) -> Result<UserPreferences, CipherError>;

    /// Decide whether the preferences inside `envelope` are compatible
    /// with a workspace's attributes.
    fn matches(
        &self,
        envelope: &EncryptedEnvelope,
        criteria: &MatchCriteria,
    ) -> Result<bool, CipherError>;

    /// Reject envelopes carrying a different scheme's tag.
    fn check_scheme(&self, envelope: &EncryptedEnvelope) -> Result<(), CipherError> {
        if envelope.scheme() == self.scheme() {
            Ok(())
        } else {
            Err(CipherError::SchemeMismatch {
                expected: self.scheme().to_string(),
                found: envelope.scheme().to_string(),
            })
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    #[error("envelope scheme {found:?} does not match cipher scheme {expected:?}")]
    SchemeMismatch { expected: String, found: String },
    #[error("malformed ciphertext: {0}")]
    Malformed(String),
    #[error(transparent)]
    InvalidPlaintext(#[from] PreferenceRangeError),
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}
