// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Preference matching against workspace attributes.

use std::sync::Arc;

use hush_cipher::{CipherError, PreferenceCipher};
use hush_core::{EncryptedEnvelope, Workspace};

/// Decides which workspaces an encrypted preference envelope fits.
///
/// All evaluation goes through [`PreferenceCipher::matches`]; plaintext
/// preferences never surface on this side of the boundary.
#[derive(Clone)]
pub struct MatchingEngine {
    cipher: Arc<dyn PreferenceCipher>,
}

impl MatchingEngine {
    pub fn new(cipher: Arc<dyn PreferenceCipher>) -> Self {
        Self { cipher }
    }

    /// Whether the preferences inside `envelope` fit `workspace`.
    pub fn eligibility(
        &self,
        workspace: &Workspace,
        envelope: &EncryptedEnvelope,
    ) -> Result<bool, MatchError> {
        let criteria = workspace.match_criteria();
        Ok(self.cipher.matches(envelope, &criteria)?)
    }

    /// Filters `candidates` down to those the envelope fits.
    ///
    /// A per-candidate evaluation failure is logged and treated as no
    /// match; one undecidable workspace never sinks the shortlist.
    pub fn shortlist(
        &self,
        candidates: &[Workspace],
        envelope: &EncryptedEnvelope,
    ) -> Vec<Workspace> {
        candidates
            .iter()
            .filter(|workspace| match self.eligibility(workspace, envelope) {
                Ok(eligible) => eligible,
                Err(error) => {
                    tracing::warn!(
                        workspace = %workspace.id,
                        error = %error,
                        "skipping workspace after preference evaluation failure"
                    );
                    false
                }
            })
            .cloned()
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("preference evaluation failed: {0}")]
    Cipher(#[from] CipherError),
}

#[cfg(test)]
#[path = "matching_tests.rs"]
mod tests;
