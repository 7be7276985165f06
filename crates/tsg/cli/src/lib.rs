//! tsg - command-line front end for the type-schema generator
//!
//! One invocation runs the whole pipeline against the current project:
//! locate the entry stylesheet, spawn the installed engine, analyze its
//! output, and write the schema artifact (plus, on request, the
//! nest-group catalogue and an analysis store).

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod discover;
mod error;

pub use error::{CliError, CliResult};

use tsg_bridge::TailwindCli;
use tsg_generator::{BuildTargets, TypeGenerator};
use tsg_types::GenerationOptions;

/// Where the engine package lives inside a project, relative to cwd.
const DEFAULT_ENGINE_BASE: &str = "node_modules/@tailwindcss/node";
/// Where the engine executable lives inside a project, relative to cwd.
const DEFAULT_ENGINE_BINARY: &str = "node_modules/.bin/tailwindcss";

/// tsg CLI application
#[derive(Parser)]
#[command(name = "tsg")]
#[command(about = "Generate a utility-class type schema (requires Tailwind CSS v4 or higher)", long_about = None)]
#[command(version)]
struct Cli {
    /// Base directory of the engine package (defaults to the installed
    /// @tailwindcss/node directory)
    #[arg(short, long)]
    base: Option<PathBuf>,

    /// Engine executable (defaults to the installed tailwindcss binary)
    #[arg(long)]
    engine: Option<PathBuf>,

    /// Entry stylesheet (discovered from the working directory when omitted)
    #[arg(short, long)]
    entry: Option<PathBuf>,

    /// Output filename for the generated schema
    #[arg(short, long, default_value = "tailwind.json")]
    filename: String,

    /// Also write the nest-group catalogue to this path
    #[arg(short = 'g', long)]
    nest_groups: Option<PathBuf>,

    /// Cache analysis products in this store file
    #[arg(long)]
    store: Option<PathBuf>,

    /// Enable documentation in the generated schema (default)
    #[arg(short = 'd', long, overrides_with = "no_docs")]
    docs: bool,

    /// Disable documentation in the generated schema
    #[arg(short = 'D', long, overrides_with = "docs")]
    no_docs: bool,

    /// Allow arbitrary-value templates in the generated schema (default)
    #[arg(short = 'a', long, overrides_with = "no_arbitrary_value")]
    arbitrary_value: bool,

    /// Omit arbitrary-value templates from the generated schema
    #[arg(short = 'A', long, overrides_with = "arbitrary_value")]
    no_arbitrary_value: bool,

    /// Accept any vocabulary key under every property (default)
    #[arg(short = 's', long, overrides_with = "no_soft_variants")]
    soft_variants: bool,

    /// Restrict each property to its observed variant keys
    #[arg(short = 'S', long, overrides_with = "soft_variants")]
    no_soft_variants: bool,

    /// Keep only the flat variant catalogue, dropping nest groups
    #[arg(short = 'k', long)]
    string_kind_variants_only: bool,

    /// Mark every schema property optional
    #[arg(short = 'o', long)]
    optional_property: bool,

    /// Disable variants entirely
    #[arg(short = 'N', long)]
    disable_variants: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Fold the flag pairs into the option record.
    ///
    /// Each `--x` / `--no-x` pair overrides in POSIX style; the positive
    /// spelling is the default, so only the surviving negative flag turns
    /// an option off.
    fn options(&self) -> GenerationOptions {
        GenerationOptions::default()
            .with_docs(!self.no_docs)
            .with_arbitrary_value(!self.no_arbitrary_value)
            .with_soft_variants(!self.no_soft_variants)
            .with_string_kind_variants_only(self.string_kind_variants_only)
            .with_optional_property(self.optional_property)
            .with_disabled_variants(self.disable_variants)
    }
}

/// Run using the current process arguments.
pub async fn run() -> CliResult<()> {
    run_with_args(std::env::args_os()).await
}

/// Run using the provided argument iterator.
pub async fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cwd = env::current_dir()?;

    let entry = match &cli.entry {
        Some(entry) => resolve_against(&cwd, entry),
        None => discover::find_entry_stylesheet(&cwd)?,
    };
    tracing::info!(entry = %entry.display(), "entry stylesheet");

    let base = resolve_engine_path(
        &cwd,
        cli.base.as_deref(),
        DEFAULT_ENGINE_BASE,
        "Engine package",
        "--base",
    )?;
    let binary = resolve_engine_path(
        &cwd,
        cli.engine.as_deref(),
        DEFAULT_ENGINE_BINARY,
        "Engine executable",
        "--engine",
    )?;

    let compiler = TailwindCli::new(&base, &binary, &entry);
    let mut generator = TypeGenerator::new(compiler, cli.options());
    if let Some(store) = &cli.store {
        generator = generator.with_store(resolve_against(&cwd, store));
    }

    generator.init().await?;

    let mut targets = BuildTargets::new(cwd.join(&cli.filename));
    if let Some(nest) = &cli.nest_groups {
        targets = targets.with_nest_groups(resolve_against(&cwd, nest));
    }
    generator.build_types(&targets).await?;

    Ok(())
}

/// Resolve a user-supplied path against the working directory.
fn resolve_against(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Resolve an engine path from its flag or conventional location, and
/// require it to exist before any compilation is attempted.
fn resolve_engine_path(
    cwd: &Path,
    flag_value: Option<&Path>,
    default_relative: &str,
    what: &'static str,
    flag: &'static str,
) -> CliResult<PathBuf> {
    let path = match flag_value {
        Some(path) => resolve_against(cwd, path),
        None => cwd.join(default_relative),
    };
    if !path.exists() {
        return Err(CliError::EngineNotResolved { what, path, flag });
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_docs_arbitrary_and_soft() {
        let cli = Cli::parse_from(["tsg"]);
        let options = cli.options();
        assert!(options.use_docs);
        assert!(options.use_arbitrary_value);
        assert!(options.use_soft_variants);
        assert!(!options.use_string_kind_variants_only);
        assert!(!options.use_optional_property);
        assert!(!options.disable_variants);
    }

    #[test]
    fn negative_flags_turn_options_off() {
        let cli = Cli::parse_from(["tsg", "-D", "-A", "-S"]);
        let options = cli.options();
        assert!(!options.use_docs);
        assert!(!options.use_arbitrary_value);
        assert!(!options.use_soft_variants);
        assert!(options.use_exact_variants());
    }

    #[test]
    fn later_flag_wins_within_a_pair() {
        let cli = Cli::parse_from(["tsg", "--no-docs", "--docs"]);
        assert!(cli.options().use_docs);

        let cli = Cli::parse_from(["tsg", "--docs", "--no-docs"]);
        assert!(!cli.options().use_docs);
    }

    #[test]
    fn switch_flags_parse() {
        let cli = Cli::parse_from(["tsg", "-k", "-o", "-N", "-f", "schema.json"]);
        let options = cli.options();
        assert!(options.use_string_kind_variants_only);
        assert!(options.use_optional_property);
        assert!(options.disable_variants);
        assert_eq!(cli.filename, "schema.json");
    }

    #[test]
    fn path_flags_parse() {
        let cli = Cli::parse_from([
            "tsg",
            "-b",
            "/opt/tailwind",
            "--engine",
            "/opt/tailwind/bin",
            "-e",
            "src/app.css",
            "-g",
            "nest.json",
            "--store",
            ".cache/tsg.json",
        ]);
        assert_eq!(cli.base.as_deref(), Some(Path::new("/opt/tailwind")));
        assert_eq!(cli.engine.as_deref(), Some(Path::new("/opt/tailwind/bin")));
        assert_eq!(cli.entry.as_deref(), Some(Path::new("src/app.css")));
        assert_eq!(cli.nest_groups.as_deref(), Some(Path::new("nest.json")));
        assert_eq!(cli.store.as_deref(), Some(Path::new(".cache/tsg.json")));
    }

    #[test]
    fn resolve_against_keeps_absolute_paths() {
        let cwd = Path::new("/work");
        assert_eq!(resolve_against(cwd, Path::new("/abs/x.css")), Path::new("/abs/x.css"));
        assert_eq!(resolve_against(cwd, Path::new("rel/x.css")), Path::new("/work/rel/x.css"));
    }

    #[test]
    fn missing_engine_path_is_reported_with_its_flag() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = resolve_engine_path(
            temp_dir.path(),
            None,
            "node_modules/@tailwindcss/node",
            "Engine package",
            "--base",
        )
        .unwrap_err();
        match err {
            CliError::EngineNotResolved { what, flag, .. } => {
                assert_eq!(what, "Engine package");
                assert_eq!(flag, "--base");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
