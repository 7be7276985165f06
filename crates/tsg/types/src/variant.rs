//! Variant vocabulary: conditional-application selectors and their
//! combination catalogue.
//!
//! A variant key is one legal condition under which a utility class may be
//! applied. Keys are spelled in nest-key form, which carries a syntactic
//! marker: pseudo-states lead with `:` (`:hover`), responsive breakpoints
//! and the theme toggle lead with `@` (`@sm`, `@dark`), container-query
//! widths lead with `@` on the container scale (`@3xs` through `@7xl`).
//! Within one kind, keys are mutually exclusive axes; keys of distinct
//! kinds may nest.

use serde::{Deserialize, Serialize};

// ── Variant Keys ─────────────────────────────────────────────────────

/// The axis a variant key belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantKind {
    /// Pseudo-class or pseudo-element state (`:hover`, `:before`)
    State,
    /// Responsive breakpoint (`@sm` through `@2xl`)
    Breakpoint,
    /// Container-query width (`@3xs` through `@7xl`)
    Container,
    /// Color-scheme toggle (`@dark`)
    Theme,
}

impl VariantKind {
    /// The class-prefix spelling of this kind's marker, if any.
    ///
    /// Compiled selectors spell state, breakpoint and theme prefixes bare
    /// (`hover:`, `sm:`, `dark:`); container prefixes keep their `@`
    /// (`@sm:`).
    pub fn strips_marker(&self) -> bool {
        !matches!(self, VariantKind::Container)
    }
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VariantKind::State => "state",
            VariantKind::Breakpoint => "breakpoint",
            VariantKind::Container => "container",
            VariantKind::Theme => "theme",
        };
        write!(f, "{}", s)
    }
}

/// One legal conditional-application selector in nest-key form
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    /// Marker-carrying key (`:hover`, `@sm`, `@dark`)
    pub key: String,
    /// The axis this key belongs to
    pub kind: VariantKind,
}

impl VariantKey {
    pub fn new(key: impl Into<String>, kind: VariantKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    /// Create a pseudo-state key
    pub fn state(key: impl Into<String>) -> Self {
        Self::new(key, VariantKind::State)
    }

    /// Create a responsive breakpoint key
    pub fn breakpoint(key: impl Into<String>) -> Self {
        Self::new(key, VariantKind::Breakpoint)
    }

    /// Create a container-query width key
    pub fn container(key: impl Into<String>) -> Self {
        Self::new(key, VariantKind::Container)
    }

    /// Create a theme toggle key
    pub fn theme(key: impl Into<String>) -> Self {
        Self::new(key, VariantKind::Theme)
    }

    /// The key with its syntactic marker stripped (`:hover` -> `hover`)
    pub fn bare(&self) -> &str {
        self.key
            .strip_prefix(':')
            .or_else(|| self.key.strip_prefix('@'))
            .unwrap_or(&self.key)
    }

    /// Whether a class prefix observed in compiled output selects this key.
    ///
    /// State, breakpoint and theme prefixes are observed bare (`hover`,
    /// `sm`, `dark`); container prefixes are observed with their `@`
    /// (`@sm`), which keeps the two `sm` axes apart.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        if self.kind.strips_marker() {
            self.bare() == prefix
        } else {
            self.key == prefix
        }
    }
}

impl std::fmt::Display for VariantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}

// ── Nest Groups ──────────────────────────────────────────────────────

/// The generated family a nesting key belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NestGroupKind {
    /// State x state pairs (`:hover:active`)
    Combination,
    /// Breakpoint-wrapped state pairs, both orderings (`@sm:hover:active`)
    BreakCombination,
    /// Theme-wrapped state pairs, both orderings (`@dark:hover:active`)
    ThemeCombination,
    /// Theme over rewritten-breakpoint over state pairs (`@dark:sm:hover:active`)
    ThemeBreakCombination,
}

impl std::fmt::Display for NestGroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NestGroupKind::Combination => "combination",
            NestGroupKind::BreakCombination => "break-combination",
            NestGroupKind::ThemeCombination => "theme-combination",
            NestGroupKind::ThemeBreakCombination => "theme-break-combination",
        };
        write!(f, "{}", s)
    }
}

/// One legal nesting key with the family that generated it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestGroupDefinition {
    pub key: String,
    pub kind: NestGroupKind,
}

impl NestGroupDefinition {
    pub fn new(key: impl Into<String>, kind: NestGroupKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }
}

// ── Variant Universe ─────────────────────────────────────────────────

/// The complete variant vocabulary for one engine version: the flat
/// kind-tagged catalogue plus the generated nesting-key families.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantUniverse {
    /// Every individual key, kind-tagged, no combinations
    pub flat: Vec<VariantKey>,
    /// Every generated nesting key, in family order
    pub nest_groups: Vec<NestGroupDefinition>,
}

impl VariantUniverse {
    /// Flat keys of one kind, in catalogue order
    pub fn keys_of(&self, kind: VariantKind) -> impl Iterator<Item = &VariantKey> {
        self.flat.iter().filter(move |k| k.kind == kind)
    }

    /// Nesting keys of one family, in generation order
    pub fn nest_keys_of(&self, kind: NestGroupKind) -> impl Iterator<Item = &str> {
        self.nest_groups
            .iter()
            .filter(move |g| g.kind == kind)
            .map(|g| g.key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty() && self.nest_groups.is_empty()
    }
}
