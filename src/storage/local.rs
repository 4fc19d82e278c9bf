//! Local storage backend
//!
//! All operations complete immediately (synchronous). Natively, keys are file
//! names relative to the base directory; in the browser they map onto
//! `window.localStorage` entries.

use super::StorageError;
use crate::config::{PLANETS_FILE, SETTINGS_FILE};
use std::path::{Path, PathBuf};

/// localStorage entry used for a storage key in the browser
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn browser_key(key: &str) -> &str {
    match key {
        PLANETS_FILE => "planetIdeas",
        SETTINGS_FILE => "planetSettings",
        other => other,
    }
}

/// Local filesystem storage backend
#[derive(Debug, Clone)]
pub struct LocalStorage {
    /// Directory every key is resolved against
    base_dir: PathBuf,
}

impl LocalStorage {
    /// Create a local storage backend with a custom base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn resolve(&self, key: &str) -> PathBuf {
        self.base_dir.join(key)
    }

    /// Read a stored value as UTF-8 text
    #[cfg(not(target_arch = "wasm32"))]
    pub fn read_string(&self, key: &str) -> Result<String, StorageError> {
        Ok(std::fs::read_to_string(self.resolve(key))?)
    }

    /// Write a value, creating the base directory if needed.
    ///
    /// Writes go to a sibling temp file first and are renamed into place so
    /// a crash mid-write never leaves a truncated file behind.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn write_string(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        let path = self.resolve(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn read_string(&self, key: &str) -> Result<String, StorageError> {
        let entry = browser_key(key);
        crate::web::storage_get(entry).ok_or_else(|| StorageError::NotFound(entry.to_string()))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn write_string(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        let entry = browser_key(key);
        if crate::web::storage_set(entry, contents) {
            Ok(())
        } else {
            Err(StorageError::Io(format!("localStorage refused {}", entry)))
        }
    }
}
