//! Combination rules that generate the nesting-key catalogue.
//!
//! All rules are free functions over immutable slices. For a state
//! vocabulary of size n, the pair rule yields exactly n * (n - 1) keys:
//! both orderings of every distinct pair, no self-pairs. Containers never
//! participate in combination; they appear in the flat catalogue only.

use crate::VariantVocabulary;
use tsg_types::{NestGroupDefinition, NestGroupKind, VariantKey, VariantUniverse};

/// Concatenate every element of `a` with every element of `b`, skipping
/// exact self-pairs
pub fn combination(a: &[String], b: &[String]) -> Vec<String> {
    a.iter()
        .flat_map(|x| {
            b.iter()
                .filter(move |y| *y != x)
                .map(move |y| format!("{}{}", x, y))
        })
        .collect()
}

/// Both directions of [`combination`]: `a` over `b`, then `b` over `a`
pub fn combination_all(a: &[String], b: &[String]) -> Vec<String> {
    let mut all = combination(a, b);
    all.extend(combination(b, a));
    all
}

/// Rewrite `@`-marked keys into state-marker form (`@sm` -> `:sm`).
///
/// Two `@` markers cannot chain, so the theme-break family spells its
/// breakpoint segment with a `:`.
pub fn to_state_marker(keys: &[String]) -> Vec<String> {
    keys.iter()
        .map(|k| match k.strip_prefix('@') {
            Some(rest) => format!(":{}", rest),
            None => k.clone(),
        })
        .collect()
}

/// Generate the complete variant universe from a vocabulary: the four
/// nesting-key families in rule order plus the flat kind-tagged catalogue
pub fn build_universe(vocabulary: &VariantVocabulary) -> VariantUniverse {
    let pairs = combination(&vocabulary.states, &vocabulary.states);
    let break_pairs = combination_all(&vocabulary.breakpoints, &pairs);
    let theme_pairs = combination_all(&vocabulary.themes, &pairs);
    let rewritten = to_state_marker(&vocabulary.breakpoints);
    let theme_break_pairs = combination(&vocabulary.themes, &combination(&rewritten, &pairs));

    let mut nest_groups = Vec::with_capacity(
        pairs.len() + break_pairs.len() + theme_pairs.len() + theme_break_pairs.len(),
    );
    push_group(&mut nest_groups, pairs, NestGroupKind::Combination);
    push_group(&mut nest_groups, break_pairs, NestGroupKind::BreakCombination);
    push_group(&mut nest_groups, theme_pairs, NestGroupKind::ThemeCombination);
    push_group(
        &mut nest_groups,
        theme_break_pairs,
        NestGroupKind::ThemeBreakCombination,
    );

    let mut flat = Vec::with_capacity(
        vocabulary.states.len()
            + vocabulary.breakpoints.len()
            + vocabulary.containers.len()
            + vocabulary.themes.len(),
    );
    flat.extend(vocabulary.states.iter().map(|k| VariantKey::state(k.as_str())));
    flat.extend(
        vocabulary
            .breakpoints
            .iter()
            .map(|k| VariantKey::breakpoint(k.as_str())),
    );
    flat.extend(
        vocabulary
            .containers
            .iter()
            .map(|k| VariantKey::container(k.as_str())),
    );
    flat.extend(vocabulary.themes.iter().map(|k| VariantKey::theme(k.as_str())));

    VariantUniverse { flat, nest_groups }
}

fn push_group(groups: &mut Vec<NestGroupDefinition>, keys: Vec<String>, kind: NestGroupKind) {
    groups.extend(keys.into_iter().map(|k| NestGroupDefinition::new(k, kind)));
}
