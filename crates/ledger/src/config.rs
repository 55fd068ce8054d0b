// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ledger location configuration.
//!
//! Resolution order: `HUSHDESK_LEDGER_DIR` env var, `[ledger] dir` from
//! `hushdesk.toml`, `XDG_DATA_HOME/hushdesk/ledger`, then
//! `~/.local/share/hushdesk/ledger`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Parsed `hushdesk.toml`, the optional file config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub ledger: LedgerSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerSection {
    /// Overrides the XDG-derived ledger root.
    pub dir: Option<PathBuf>,
}

impl LedgerConfig {
    /// Parse a `hushdesk.toml`. A missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(toml::from_str(&content)?)
    }
}

/// Resolve the ledger root: env > file config > XDG > home fallback.
pub fn data_dir(config: &LedgerConfig) -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = std::env::var("HUSHDESK_LEDGER_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = &config.ledger.dir {
        return Ok(dir.clone());
    }
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return Ok(PathBuf::from(xdg).join("hushdesk/ledger"));
    }
    let home = std::env::var("HOME").map_err(|_| ConfigError::NoDataDir)?;
    Ok(PathBuf::from(home).join(".local/share/hushdesk/ledger"))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot resolve a ledger directory: HOME is unset")]
    NoDataDir,
    #[error("invalid hushdesk.toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
