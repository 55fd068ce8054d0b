// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Confidentiality specs
//!
//! What actually lands on the shared ledger: tagged envelopes only,
//! no recognizable plaintext, and fail-closed handling of foreign or
//! tampered payloads.

use crate::prelude::*;
use crate::prelude::assert_eq;
use hush_cipher::CipherError;

#[tokio::test]
async fn ledger_bytes_carry_only_tagged_ciphertext() {
    let w = world();
    seed_available(&w, "w1", "berlin-1", 10).await;
    w.workflow.book(request("w1", "u1", 3)).await.unwrap();

    let raw = w.ledger.get_raw("preferences_u1").unwrap();
    let text = String::from_utf8(raw.clone()).unwrap();
    // JSON string form of the envelope, nothing else.
    assert!(text.starts_with("\"FHE-"), "unexpected payload: {text}");
    assert!(!text.contains("standing_desk"), "plaintext leaked: {text}");

    let stored: String = serde_json::from_slice(&raw).unwrap();
    let envelope: EncryptedEnvelope = stored.parse().unwrap();
    let decrypted = SimulatedFheCipher::new().decrypt(&envelope).unwrap();
    assert_eq!(decrypted, preferences());
}

#[tokio::test]
async fn workspace_record_embeds_the_snapshot_as_a_tagged_string() {
    let w = world();
    seed_available(&w, "w1", "berlin-1", 10).await;
    w.workflow.book(request("w1", "u1", 3)).await.unwrap();

    let raw = w.ledger.get_raw("workspace_w1").unwrap();
    assert!(!String::from_utf8_lossy(&raw).contains("standing_desk"));

    let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(value["status"], "booked");
    assert_eq!(value["owner"], "u1");
    let snapshot = value["encrypted_preferences"]
        .as_str()
        .expect("snapshot is a string");
    assert!(snapshot.starts_with("FHE-"));
}

#[tokio::test]
async fn foreign_scheme_envelopes_fail_closed() {
    let w = world();
    seed_available(&w, "w1", "berlin-1", 10).await;
    w.ledger
        .insert_raw("preferences_u2", b"\"AES-e30=\"".to_vec());

    // Structurally a fine envelope, so the store hands it back.
    let envelope = w
        .workflow
        .store()
        .load_preferences(&AccountId::from("u2"))
        .await
        .unwrap()
        .expect("envelope present");
    assert_eq!(envelope.scheme(), "AES");

    // But the cipher refuses it, and matching treats it as fitting
    // nothing rather than everything.
    let err = SimulatedFheCipher::new().decrypt(&envelope).unwrap_err();
    assert!(matches!(err, CipherError::SchemeMismatch { .. }));
    let matched = w.workflow.matching_workspaces(&envelope).await.unwrap();
    assert!(matched.is_empty());
}

#[tokio::test]
async fn tampered_envelope_fails_the_read() {
    let w = world();
    w.ledger
        .insert_raw("preferences_u3", b"\"FHE-%%%\"".to_vec());

    let err = w
        .workflow
        .store()
        .load_preferences(&AccountId::from("u3"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Codec(_)));
}
