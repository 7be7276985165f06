//! Default variant vocabularies for the Tailwind CSS v4 engine.
//!
//! Keys are spelled in nest-key form. The defaults cover the engine's
//! stock pseudo-states, breakpoints, container widths and the dark-mode
//! toggle; callers may substitute their own vocabulary when the engine is
//! configured with custom screens or variants.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Pseudo-class and pseudo-element state keys
pub const DEFAULT_STATES: &[&str] = &[
    ":before",
    ":after",
    ":placeholder",
    ":file",
    ":marker",
    ":selection",
    ":first-line",
    ":backdrop",
    ":hover",
    ":active",
    ":first",
    ":last",
    ":only",
    ":odd",
    ":even",
    ":first-of-type",
    ":last-of-type",
    ":only-of-type",
    ":empty",
    ":enabled",
    ":indeterminate",
    ":default",
    ":required",
    ":valid",
    ":invalid",
    ":in-range",
    ":out-of-range",
    ":placeholder-shown",
    ":autofill",
    ":read-only",
    ":checked",
    ":disabled",
    ":visited",
    ":target",
    ":focus",
    ":focus-within",
    ":focus-visible",
    ":contrast-more",
    ":motion-reduce",
    ":motion-safe",
    ":rtl",
    ":ltr",
    ":portrait",
    ":landscape",
];

/// Responsive breakpoint keys
pub const DEFAULT_BREAKPOINTS: &[&str] = &["@sm", "@md", "@lg", "@xl", "@2xl"];

/// Container-query width keys; flat catalogue only, never combined
pub const DEFAULT_CONTAINERS: &[&str] = &[
    "@3xs", "@2xs", "@xs", "@sm", "@md", "@lg", "@xl", "@2xl", "@3xl", "@4xl", "@5xl", "@6xl",
    "@7xl",
];

/// Color-scheme toggle keys
pub const DEFAULT_THEMES: &[&str] = &["@dark"];

/// The input vocabularies the universe is generated from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariantVocabulary {
    pub states: Vec<String>,
    pub breakpoints: Vec<String>,
    pub containers: Vec<String>,
    pub themes: Vec<String>,
}

impl VariantVocabulary {
    /// Build a vocabulary. Duplicate keys collapse; first occurrence wins.
    pub fn new(
        states: Vec<String>,
        breakpoints: Vec<String>,
        containers: Vec<String>,
        themes: Vec<String>,
    ) -> Self {
        Self {
            states: dedup_first(states),
            breakpoints: dedup_first(breakpoints),
            containers: dedup_first(containers),
            themes: dedup_first(themes),
        }
    }
}

impl Default for VariantVocabulary {
    fn default() -> Self {
        Self::new(
            DEFAULT_STATES.iter().map(|s| s.to_string()).collect(),
            DEFAULT_BREAKPOINTS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_CONTAINERS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_THEMES.iter().map(|s| s.to_string()).collect(),
        )
    }
}

fn dedup_first(mut keys: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keys.retain(|k| seen.insert(k.clone()));
    keys
}
