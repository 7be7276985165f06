//! Entry-stylesheet discovery
//!
//! Probes the conventional entry locations first, then falls back to a
//! walk over every `.css` file under the search directory. A file counts
//! as the entry when it mentions the framework import marker anywhere.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{CliError, CliResult};

/// Any mention of the framework counts as an import marker.
const FRAMEWORK_MARKER: &str = "tailwindcss";

/// Conventional entry locations, probed in order.
const CONVENTIONAL_PATHS: [&str; 6] = [
    "tailwind.css",
    "styles/tailwind.css",
    "css/tailwind.css",
    "src/tailwind.css",
    "src/styles/tailwind.css",
    "src/css/tailwind.css",
];

/// Locate the entry stylesheet under `search_dir`.
///
/// The fallback walk honors ignore files, so vendored dependency trees
/// are never picked up, and candidates are visited in path order so the
/// result is stable across platforms.
pub fn find_entry_stylesheet(search_dir: &Path) -> CliResult<PathBuf> {
    for candidate in CONVENTIONAL_PATHS {
        let path = search_dir.join(candidate);
        if imports_framework(&path) {
            return Ok(path);
        }
    }

    let mut css_files: Vec<PathBuf> = WalkBuilder::new(search_dir)
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "css"))
        .collect();
    css_files.sort();

    css_files
        .into_iter()
        .find(|path| imports_framework(path))
        .ok_or_else(|| CliError::EntryNotFound(search_dir.to_path_buf()))
}

/// Whether the file exists and mentions the framework.
fn imports_framework(path: &Path) -> bool {
    std::fs::read_to_string(path)
        .map(|content| content.contains(FRAMEWORK_MARKER))
        .unwrap_or(false)
}
