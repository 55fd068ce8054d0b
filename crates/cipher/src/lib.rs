// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hush-cipher: the preference encryption boundary.
//!
//! Everything above this crate handles preferences only as tagged
//! ciphertext envelopes; everything below it never sees plaintext.
//! [`PreferenceCipher`] is the seam a real homomorphic or enclave-backed
//! scheme slots into. The bundled [`SimulatedFheCipher`] keeps the
//! protocol shape honest without doing real cryptography.

pub mod fhe_sim;
pub mod scheme;

pub use fhe_sim::{SimulatedFheCipher, FHE_SCHEME};
pub use scheme::{CipherError, PreferenceCipher};
