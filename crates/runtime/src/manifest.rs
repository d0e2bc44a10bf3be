//! Metadata sources backed by application packaging.
//!
//! The packaging manifest is a JSON document with a `meta` string map; the
//! bootstrap only ever reads the one conventional key out of it.

use needle_api::{MetadataError, MetadataResult, MetadataSource};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    meta: HashMap<String, String>,
}

/// Reads metadata values from the application's JSON packaging manifest.
///
/// The file is read on lookup; an unreadable or malformed manifest surfaces
/// as `MetadataError::Unreadable`, which the bootstrap downgrades to a
/// warning.
pub struct JsonManifestSource {
    path: PathBuf,
}

impl JsonManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetadataSource for JsonManifestSource {
    fn value(&self, key: &str) -> MetadataResult<Option<String>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| MetadataError::Unreadable {
            reason: format!("{}: {e}", self.path.display()),
        })?;
        let manifest: Manifest =
            serde_json::from_str(&raw).map_err(|e| MetadataError::Unreadable {
                reason: format!("{}: {e}", self.path.display()),
            })?;
        Ok(manifest.meta.get(key).cloned())
    }
}

/// In-memory metadata source, for embedding and tests.
#[derive(Debug, Default)]
pub struct StaticMetadataSource {
    values: HashMap<String, String>,
}

impl StaticMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl MetadataSource for StaticMetadataSource {
    fn value(&self, key: &str) -> MetadataResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }
}
