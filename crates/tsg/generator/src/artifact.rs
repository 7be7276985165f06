//! Output artifacts: target paths and the nest-group companion payload

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tsg_types::{NestGroupKind, VariantUniverse};

use crate::error::{GeneratorError, GeneratorResult};

/// Where `build_types` writes its output.
#[derive(Clone, Debug)]
pub struct BuildTargets {
    /// The primary schema artifact.
    pub schema: PathBuf,
    /// Optional companion artifact carrying the nesting vocabulary.
    pub nest_groups: Option<PathBuf>,
}

impl BuildTargets {
    pub fn new(schema: impl Into<PathBuf>) -> Self {
        Self {
            schema: schema.into(),
            nest_groups: None,
        }
    }

    pub fn with_nest_groups(mut self, path: impl Into<PathBuf>) -> Self {
        self.nest_groups = Some(path.into());
        self
    }
}

/// The companion payload: the nesting vocabulary grouped by family.
///
/// `basic` lists every individual key; the remaining fields are the
/// generated combination families in nest-key form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NestGroupArtifact {
    pub basic: Vec<String>,
    pub combination: Vec<String>,
    #[serde(rename = "break")]
    pub break_combination: Vec<String>,
    pub theme: Vec<String>,
    #[serde(rename = "theme-break")]
    pub theme_break: Vec<String>,
}

impl NestGroupArtifact {
    /// Bucket the universe's vocabulary by family, keeping catalogue order.
    pub fn from_universe(universe: &VariantUniverse) -> Self {
        let family = |kind: NestGroupKind| -> Vec<String> {
            universe.nest_keys_of(kind).map(String::from).collect()
        };
        Self {
            basic: universe.flat.iter().map(|k| k.key.clone()).collect(),
            combination: family(NestGroupKind::Combination),
            break_combination: family(NestGroupKind::BreakCombination),
            theme: family(NestGroupKind::ThemeCombination),
            theme_break: family(NestGroupKind::ThemeBreakCombination),
        }
    }
}

/// Write one rendered artifact, creating parent directories as needed.
pub(crate) async fn write_artifact(path: &Path, payload: &str) -> GeneratorResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| GeneratorError::WriteFailed {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
    }
    tokio::fs::write(path, payload)
        .await
        .map_err(|source| GeneratorError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
}
