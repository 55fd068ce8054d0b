// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated homomorphic scheme.
//!
//! The ciphertext is the JSON encoding of the plaintext, so this provides
//! no confidentiality. It exists to exercise the protocol: tagging,
//! fail-closed decoding, and the match call shape are all real, only the
//! cryptography is absent. `matches` deems every well-formed envelope
//! compatible, standing in for a homomorphic comparison that the serving
//! tier cannot inspect.

use hush_core::{EncryptedEnvelope, MatchCriteria, UserPreferences};

use crate::scheme::{CipherError, PreferenceCipher};

/// Tag stamped on envelopes produced by [`SimulatedFheCipher`].
pub const FHE_SCHEME: &str = "FHE";

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedFheCipher;

impl SimulatedFheCipher {
    pub fn new() -> Self {
        Self
    }
}

impl PreferenceCipher for SimulatedFheCipher {
    fn scheme(&self) -> &str {
        FHE_SCHEME
    }

    fn encrypt(&self, preferences: &UserPreferences) -> Result<EncryptedEnvelope, CipherError> {
        preferences.validate()?;
        let ciphertext = serde_json::to_vec(preferences)
            .map_err(|e| CipherError::Malformed(e.to_string()))?;
        Ok(EncryptedEnvelope::new(FHE_SCHEME, ciphertext)?)
    }

    fn decrypt(&self, envelope: &EncryptedEnvelope) -> Result<UserPreferences, CipherError> {
        self.check_scheme(envelope)?;
        serde_json::from_slice(envelope.ciphertext())
            .map_err(|e| CipherError::Malformed(e.to_string()))
    }

    fn matches(
        &self,
        envelope: &EncryptedEnvelope,
        _criteria: &MatchCriteria,
    ) -> Result<bool, CipherError> {
        // Still fail closed on foreign tags and garbage payloads; only
        // the comparison itself is simulated.
        self.decrypt(envelope)?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "fhe_sim_tests.rs"]
mod tests;
