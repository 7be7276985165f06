//! Compiler bridge: the pipeline's contract with the external engine
//!
//! The pipeline never compiles CSS itself. It hands compilation to the
//! engine, exactly once per run, and analyzes whatever the engine printed.

use crate::error::{BridgeError, BridgeResult};
use crate::version::read_engine_version;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Output of one compile pass
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledCss {
    pub css: String,
    pub engine_version: String,
}

/// The seam between the pipeline and the external utility-class engine.
///
/// Implementations must be deterministic for a fixed entry file and
/// engine version.
#[async_trait]
pub trait UtilityCompiler: Send + Sync {
    /// Run one compile pass over the entry stylesheet
    async fn compile(&self) -> BridgeResult<CompiledCss>;

    /// The engine version, readable without compiling
    async fn engine_version(&self) -> BridgeResult<String>;

    /// Identity of the compiled entry, used to key cached analysis
    fn entry_identity(&self) -> String {
        String::new()
    }
}

/// Adapter that spawns the engine's CLI executable and captures its
/// stdout
pub struct TailwindCli {
    base: PathBuf,
    binary: PathBuf,
    entry: PathBuf,
}

impl TailwindCli {
    /// `base` is the engine package directory whose `package.json` carries
    /// the version; `binary` is the CLI executable; `entry` is the
    /// stylesheet handed to the engine.
    pub fn new(
        base: impl Into<PathBuf>,
        binary: impl Into<PathBuf>,
        entry: impl Into<PathBuf>,
    ) -> Self {
        Self {
            base: base.into(),
            binary: binary.into(),
            entry: entry.into(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn entry(&self) -> &Path {
        &self.entry
    }
}

#[async_trait]
impl UtilityCompiler for TailwindCli {
    async fn compile(&self) -> BridgeResult<CompiledCss> {
        if !self.entry.exists() {
            return Err(BridgeError::EntryNotFound(self.entry.clone()));
        }
        if !self.binary.exists() {
            return Err(BridgeError::EngineNotFound(self.binary.clone()));
        }
        let engine_version = self.engine_version().await?;

        debug!(
            binary = %self.binary.display(),
            entry = %self.entry.display(),
            "spawning engine"
        );
        let output = Command::new(&self.binary)
            .arg("--input")
            .arg(&self.entry)
            .output()
            .await?;

        if !output.status.success() {
            return Err(BridgeError::CompileFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(CompiledCss {
            css: String::from_utf8_lossy(&output.stdout).into_owned(),
            engine_version,
        })
    }

    async fn engine_version(&self) -> BridgeResult<String> {
        read_engine_version(&self.base).await
    }

    fn entry_identity(&self) -> String {
        self.entry.display().to_string()
    }
}

/// Fixed-output compiler for tests and downstream development
pub struct FixtureCompiler {
    css: String,
    version: String,
}

impl FixtureCompiler {
    pub fn new(css: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            css: css.into(),
            version: version.into(),
        }
    }
}

#[async_trait]
impl UtilityCompiler for FixtureCompiler {
    async fn compile(&self) -> BridgeResult<CompiledCss> {
        Ok(CompiledCss {
            css: self.css.clone(),
            engine_version: self.version.clone(),
        })
    }

    async fn engine_version(&self) -> BridgeResult<String> {
        Ok(self.version.clone())
    }
}
