// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Token persistence.
//!
//! The access/refresh pair is one record: it is saved and cleared together,
//! never one half at a time. No token-shape validation happens here; a
//! malformed stored token is detected by the session layer on decode.

use crate::error::{ApiError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

/// The access/refresh token pair identifying a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: String,
}

/// Storage for the session credentials.
pub trait TokenStore: Send + Sync {
    /// Persist the pair, replacing any previous one.
    fn save(&self, credentials: &Credentials) -> Result<()>;
    /// Load the stored pair, if any.
    fn load(&self) -> Result<Option<Credentials>>;
    /// Remove both tokens.
    fn clear(&self) -> Result<()>;
}

/// File-backed store: a single JSON file holding the pair.
///
/// The whole file is rewritten on save and removed on clear, so the two
/// tokens cannot get out of sync with each other on disk.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, credentials: &Credentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string(credentials).context("Failed to serialize credentials")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Credentials>> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ApiError::Internal(anyhow::Error::new(e).context(format!(
                    "Failed to read {}",
                    self.path.display()
                ))))
            }
        };
        let credentials = serde_json::from_str(&json)
            .with_context(|| format!("Corrupt token file {}", self.path.display()))?;
        Ok(Some(credentials))
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Internal(anyhow::Error::new(e).context(format!(
                "Failed to remove {}",
                self.path.display()
            )))),
        }
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Option<Credentials>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, credentials: &Credentials) -> Result<()> {
        *self.inner.lock().unwrap() = Some(credentials.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Credentials>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    fn clear(&self) -> Result<()> {
        *self.inner.lock().unwrap() = None;
        Ok(())
    }
}
