//! Engine version gate
//!
//! The schema's shape depends on engine behavior introduced in v4:
//! compiled rule text with nested variant bodies. Older engines emit
//! structures the analyzer does not understand, so runs against them are
//! refused up front.

use crate::error::{BridgeError, BridgeResult};
use std::path::Path;

/// Minimum engine version the pipeline supports
pub const MIN_ENGINE_VERSION: &str = "4.0.0";

/// Compare `version` against `minimum`: major dominates, then minor, then
/// patch. Missing or non-numeric segments count as zero.
pub fn is_version_sufficient(version: &str, minimum: &str) -> bool {
    parse_segments(version) >= parse_segments(minimum)
}

/// Gate a version against [`MIN_ENGINE_VERSION`]
pub fn ensure_supported_version(version: &str) -> BridgeResult<()> {
    if is_version_sufficient(version, MIN_ENGINE_VERSION) {
        Ok(())
    } else {
        Err(BridgeError::VersionBelowMinimum {
            found: version.to_string(),
            minimum: MIN_ENGINE_VERSION.to_string(),
        })
    }
}

/// Read the engine version from `<base>/package.json`
pub async fn read_engine_version(base: &Path) -> BridgeResult<String> {
    let path = base.join("package.json");
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| BridgeError::VersionUnreadable {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    let manifest: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| BridgeError::VersionUnreadable {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    manifest
        .get("version")
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
        .ok_or_else(|| BridgeError::VersionUnreadable {
            path,
            reason: "missing version field".to_string(),
        })
}

fn parse_segments(version: &str) -> (u64, u64, u64) {
    let mut segments = version.trim().split('.').map(segment_number);
    (
        segments.next().unwrap_or(0),
        segments.next().unwrap_or(0),
        segments.next().unwrap_or(0),
    )
}

fn segment_number(segment: &str) -> u64 {
    let digits: String = segment
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
