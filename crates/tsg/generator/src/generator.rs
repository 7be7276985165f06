//! Generation orchestrator: the pipeline's main entry point
//!
//! `TypeGenerator` drives the whole run in two phases:
//! 1. `init` gates the engine version, runs exactly one compile pass,
//!    analyzes the output, and builds the variant universe.
//! 2. `build_types` synthesizes the schema under the configured options
//!    and writes the artifacts.
//!
//! There is no retry logic anywhere: compilation is deterministic for a
//! fixed entry and engine version, and a failed run is re-run whole.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use tsg_analyzer::{analyze, Analysis};
use tsg_bridge::{ensure_supported_version, UtilityCompiler};
use tsg_synth::synthesize;
use tsg_types::{
    GenerationOptions, NestGroupDefinition, UtilityDescriptor, VariantKey, VariantUniverse,
};
use tsg_variants::{build_universe, VariantVocabulary};

use crate::artifact::{write_artifact, BuildTargets, NestGroupArtifact};
use crate::error::{GeneratorError, GeneratorResult};
use crate::store::AnalysisStore;

// ── Generator State ──────────────────────────────────────────────────

/// State populated once by `init`, read-only afterwards.
#[derive(Clone, Debug)]
struct GeneratorState {
    engine_version: String,
    analysis: Analysis,
    universe: VariantUniverse,
}

// ── Type Generator ───────────────────────────────────────────────────

/// Orchestrates one generation run over a compiler.
///
/// The compiler seam is generic so tests and downstream tooling can run
/// the full pipeline against fixed CSS via `FixtureCompiler`.
pub struct TypeGenerator<C: UtilityCompiler> {
    compiler: C,
    options: GenerationOptions,
    vocabulary: VariantVocabulary,
    store_path: Option<PathBuf>,
    state: Option<GeneratorState>,
}

impl<C: UtilityCompiler> TypeGenerator<C> {
    /// Create a generator over the default variant vocabulary, without a
    /// store.
    pub fn new(compiler: C, options: GenerationOptions) -> Self {
        Self {
            compiler,
            options,
            vocabulary: VariantVocabulary::default(),
            store_path: None,
            state: None,
        }
    }

    /// Replace the variant vocabulary the universe is built from.
    pub fn with_vocabulary(mut self, vocabulary: VariantVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Enable the advisory analysis store at the given path.
    pub fn with_store(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Run the analysis phase: version gate, one compile pass, analysis,
    /// universe construction.
    ///
    /// An engine below the supported floor aborts here, before any
    /// compilation. A compiled stylesheet with no extractable utility
    /// classes fails with `EmptyAnalysis`.
    pub async fn init(&mut self) -> GeneratorResult<()> {
        let engine_version = self.compiler.engine_version().await?;
        ensure_supported_version(&engine_version)?;
        debug!(%engine_version, "engine version accepted");

        let analysis = match self.restore_analysis(&engine_version).await {
            Some(analysis) => analysis,
            None => self.fresh_analysis(&engine_version).await?,
        };

        let universe = build_universe(&self.vocabulary);
        info!(
            %engine_version,
            descriptors = analysis.descriptors.len(),
            variant_keys = universe.flat.len(),
            nest_keys = universe.nest_groups.len(),
            "generator initialized"
        );

        self.state = Some(GeneratorState {
            engine_version,
            analysis,
            universe,
        });
        Ok(())
    }

    /// Try to short-circuit compile+analyze from the store.
    ///
    /// The store is advisory: a missing, stale, or unreadable store only
    /// means the run compiles fresh.
    async fn restore_analysis(&self, engine_version: &str) -> Option<Analysis> {
        let path = self.store_path.as_deref()?;
        match AnalysisStore::load(path).await {
            Ok(store) if store.matches(engine_version, &self.compiler.entry_identity()) => {
                debug!(store = %path.display(), "analysis restored from store");
                Some(store.analysis)
            }
            Ok(_) => {
                debug!(store = %path.display(), "store is stale; compiling fresh");
                None
            }
            Err(error) => {
                debug!(store = %path.display(), %error, "store unusable; compiling fresh");
                None
            }
        }
    }

    async fn fresh_analysis(&self, engine_version: &str) -> GeneratorResult<Analysis> {
        let compiled = self.compiler.compile().await?;
        debug!(bytes = compiled.css.len(), "stylesheet compiled");

        let analysis = analyze(&compiled.css);
        if analysis.is_empty() {
            return Err(GeneratorError::EmptyAnalysis);
        }

        if let Some(path) = &self.store_path {
            let store = AnalysisStore::new(
                engine_version,
                &self.compiler.entry_identity(),
                analysis.clone(),
            );
            // a failed store write never fails the run
            if let Err(error) = store.write(path).await {
                warn!(%error, "store write skipped");
            }
        }
        Ok(analysis)
    }

    /// Synthesize the schema and write the artifacts.
    ///
    /// Both payloads are rendered in memory before either target path is
    /// touched, so a synthesis or serialization failure leaves the
    /// filesystem as it was.
    pub async fn build_types(&self, targets: &BuildTargets) -> GeneratorResult<()> {
        let state = self.state()?;

        let schema = synthesize(
            &state.analysis.descriptors,
            &state.universe,
            &state.engine_version,
            &self.options,
        )?;
        let schema_json = serde_json::to_string_pretty(&schema)?;
        let nest_json = match &targets.nest_groups {
            Some(_) => Some(serde_json::to_string_pretty(&NestGroupArtifact::from_universe(
                &state.universe,
            ))?),
            None => None,
        };

        write_artifact(&targets.schema, &schema_json).await?;
        if let (Some(path), Some(json)) = (&targets.nest_groups, &nest_json) {
            write_artifact(path, json).await?;
        }

        info!(
            schema = %targets.schema.display(),
            properties = schema.property_count(),
            "type schema written"
        );
        Ok(())
    }

    // ── Analysis State ───────────────────────────────────────────────

    fn state(&self) -> GeneratorResult<&GeneratorState> {
        self.state.as_ref().ok_or(GeneratorError::NotInitialized)
    }

    /// The gated engine version.
    pub fn engine_version(&self) -> GeneratorResult<&str> {
        Ok(&self.state()?.engine_version)
    }

    /// Every analyzed descriptor, observation order.
    pub fn descriptors(&self) -> GeneratorResult<&[UtilityDescriptor]> {
        Ok(&self.state()?.analysis.descriptors)
    }

    /// The verbatim class names of every descriptor.
    pub fn class_list(&self) -> GeneratorResult<Vec<&str>> {
        Ok(self.state()?.analysis.class_list())
    }

    /// Variant prefixes observed in compiled output, first-seen order.
    pub fn variants_entry(&self) -> GeneratorResult<&[String]> {
        Ok(&self.state()?.analysis.variants_entry)
    }

    /// The flat variant catalogue.
    pub fn variants(&self) -> GeneratorResult<&[VariantKey]> {
        Ok(&self.state()?.universe.flat)
    }

    /// The generated nesting-key catalogue.
    pub fn nest_groups(&self) -> GeneratorResult<&[NestGroupDefinition]> {
        Ok(&self.state()?.universe.nest_groups)
    }
}
