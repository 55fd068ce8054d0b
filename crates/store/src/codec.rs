// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record byte encoding.
//!
//! Records are UTF-8 JSON. Index lists are JSON arrays of id strings;
//! [`decode_index`] drops duplicates while keeping first-seen order, so
//! a list damaged by a misbehaving client still decodes usefully.

use indexmap::IndexSet;
use serde::de::DeserializeOwned;
use serde::Serialize;
use smol_str::SmolStr;

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(value)?)
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::Empty);
    }
    Ok(serde_json::from_slice(bytes)?)
}

pub fn encode_index(ids: &IndexSet<SmolStr>) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(ids)?)
}

pub fn decode_index(bytes: &[u8]) -> Result<IndexSet<SmolStr>, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::Empty);
    }
    let ids: Vec<SmolStr> = serde_json::from_slice(bytes)?;
    Ok(ids.into_iter().collect())
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("empty record payload")]
    Empty,
    #[error("record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
