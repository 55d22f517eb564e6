// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON-file-backed key-value store.
//!
//! The whole slot map is held in memory and rewritten to disk on every
//! mutation. A single small file is plenty for one user's workout log.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::storage::KeyValueStore;

/// Durable store persisting its slots as one JSON object per file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    slots: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, reading any existing slot file.
    ///
    /// A missing file starts the store empty. An unreadable or unparsable
    /// file is logged and also starts the store empty; the next write
    /// replaces it. Startup must never fail on bad stored state.
    pub fn open(path: &Path) -> Result<Self> {
        let slots = match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(slots) => slots,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Slot file is not valid JSON, starting empty"
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read slot file, starting empty"
                );
                HashMap::new()
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            slots,
        })
    }

    /// Write the full slot map back to disk.
    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::Storage(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(&self.slots)
            .map_err(|e| AppError::Storage(format!("Failed to serialize slots: {}", e)))?;
        std::fs::write(&self.path, json).map_err(|e| {
            AppError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.slots.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
