//! Analysis store: an advisory side file caching analysis products
//!
//! The store lets repeated runs over an unchanged engine skip the
//! compile+analyze phases. It is never authoritative: a missing, stale,
//! or unreadable store only means the run falls back to a fresh compile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use tsg_analyzer::Analysis;

use crate::error::{GeneratorError, GeneratorResult};

/// One cached analysis run.
///
/// `fingerprint` ties the cache to the engine version and entry file it
/// was produced from; a mismatch on load means the cache is stale.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisStore {
    pub fingerprint: String,
    pub engine_version: String,
    pub generated_at: DateTime<Utc>,
    pub analysis: Analysis,
}

impl AnalysisStore {
    /// Build a store record for a freshly analyzed run.
    pub fn new(engine_version: &str, entry_identity: &str, analysis: Analysis) -> Self {
        Self {
            fingerprint: fingerprint(engine_version, entry_identity),
            engine_version: engine_version.to_string(),
            generated_at: Utc::now(),
            analysis,
        }
    }

    /// True when this record was produced by the given engine + entry.
    pub fn matches(&self, engine_version: &str, entry_identity: &str) -> bool {
        self.fingerprint == fingerprint(engine_version, entry_identity)
    }

    /// Load a store record from disk.
    pub async fn load(path: &Path) -> GeneratorResult<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| GeneratorError::Store {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        serde_json::from_slice(&bytes).map_err(|e| GeneratorError::Store {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write this record to disk, creating parent directories as needed.
    pub async fn write(&self, path: &Path) -> GeneratorResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| GeneratorError::Store {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    })?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| GeneratorError::Store {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }
}

/// Cache key for one engine + entry pairing.
fn fingerprint(engine_version: &str, entry_identity: &str) -> String {
    format!("{engine_version}::{entry_identity}")
}
