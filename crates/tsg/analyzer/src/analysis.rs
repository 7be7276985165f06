//! Analysis pass: compiled CSS in, utility descriptors out.
//!
//! Each scanned rule is reduced independently. A rule that cannot be
//! mapped (no utility class in its selector, or an empty declaration
//! block) is dropped with a diagnostic; one bad rule never aborts the run.

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::property::{doc_url, resolve_property};
use crate::scanner::{CssScanner, ScannedRule};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use tsg_types::{PropertyDoc, UtilityDescriptor};

/// Everything the analysis pass extracts from one compiled stylesheet
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// De-duplicated descriptors, observation order
    pub descriptors: Vec<UtilityDescriptor>,
    /// Variant prefixes observed anywhere, first-seen order
    pub variants_entry: Vec<String>,
}

impl Analysis {
    /// The verbatim class names of every descriptor
    pub fn class_list(&self) -> Vec<&str> {
        self.descriptors
            .iter()
            .map(|d| d.class_name.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Analyze one compiled stylesheet
pub fn analyze(css: &str) -> Analysis {
    let rules = CssScanner::new(css).scan();
    let mut analysis = Analysis::default();
    let mut seen_descriptors = HashSet::new();
    let mut seen_prefixes = HashSet::new();
    let mut dropped = 0usize;

    for rule in &rules {
        match extract_rule(rule) {
            Ok(descriptor) => {
                for prefix in &descriptor.variant_chain {
                    if seen_prefixes.insert(prefix.clone()) {
                        analysis.variants_entry.push(prefix.clone());
                    }
                }
                let key = (
                    descriptor.property.clone(),
                    descriptor.template.clone(),
                    descriptor.variant_chain.clone(),
                );
                if seen_descriptors.insert(key) {
                    analysis.descriptors.push(descriptor);
                }
            }
            Err(error) => {
                dropped += 1;
                debug!(selector = %rule.selector, %error, "dropped unmappable rule");
            }
        }
    }

    debug!(
        rules = rules.len(),
        descriptors = analysis.descriptors.len(),
        dropped,
        "analysis complete"
    );
    analysis
}

/// Reduce one scanned rule to a descriptor
pub fn extract_rule(rule: &ScannedRule) -> AnalyzerResult<UtilityDescriptor> {
    let class_name = class_from_selector(&rule.selector)
        .ok_or_else(|| AnalyzerError::UnsupportedSelector(rule.selector.clone()))?;
    let (variant_chain, base) = split_variant_chain(&class_name);
    if base.is_empty() {
        return Err(AnalyzerError::UnsupportedSelector(rule.selector.clone()));
    }
    let resolved = resolve_property(&rule.declarations)
        .ok_or_else(|| AnalyzerError::EmptyDeclarationBlock(class_name.clone()))?;
    let (template, arbitrary) = canonical_template(&base);
    let url = resolved
        .css_properties
        .first()
        .map(|p| doc_url(p))
        .unwrap_or_default();
    let doc = PropertyDoc::new(resolved.css_properties.join(", "), url);

    Ok(UtilityDescriptor::new(class_name, template, resolved.name)
        .with_doc(doc)
        .with_arbitrary(arbitrary)
        .with_variant_chain(variant_chain))
}

/// Extract the first class token from a selector, decoding CSS escapes.
///
/// `.hover\:bg-red-500:hover` yields `hover:bg-red-500`; selectors with no
/// class (`:root`, `#id`, `*`) yield `None`. Hex escapes terminate on one
/// optional whitespace character, so `.\32 xl\:flex` yields `2xl:flex`.
fn class_from_selector(selector: &str) -> Option<String> {
    let chars: Vec<char> = selector.chars().collect();
    let mut i = 0;
    let start = loop {
        if i >= chars.len() {
            return None;
        }
        match chars[i] {
            '\\' => i += 2,
            '.' => break i + 1,
            _ => i += 1,
        }
    };

    let mut name = String::new();
    let mut i = start;
    while i < chars.len() {
        let ch = chars[i];
        if ch == '\\' {
            i += 1;
            if i >= chars.len() {
                break;
            }
            if chars[i].is_ascii_hexdigit() {
                let mut hex = String::new();
                while i < chars.len() && chars[i].is_ascii_hexdigit() && hex.len() < 6 {
                    hex.push(chars[i]);
                    i += 1;
                }
                if i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                if let Some(decoded) = u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                {
                    name.push(decoded);
                }
            } else {
                name.push(chars[i]);
                i += 1;
            }
        } else if ch.is_alphanumeric() || ch == '-' || ch == '_' {
            name.push(ch);
            i += 1;
        } else {
            break;
        }
    }

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Split a class into its variant-prefix chain and base token. Colons
/// inside arbitrary-value brackets do not split.
fn split_variant_chain(class_name: &str) -> (Vec<String>, String) {
    let mut chain = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for ch in class_name.chars() {
        match ch {
            '[' => {
                depth += 1;
                current.push(ch);
            }
            ']' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ':' if depth == 0 => chain.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    (chain, current)
}

/// Canonicalize arbitrary-value slots to `[*]`
fn canonical_template(base: &str) -> (String, bool) {
    if !base.contains('[') {
        return (base.to_string(), false);
    }
    let mut template = String::new();
    let mut depth = 0usize;
    let mut arbitrary = false;
    for ch in base.chars() {
        match ch {
            '[' => {
                depth += 1;
                if depth == 1 {
                    arbitrary = true;
                    template.push_str("[*]");
                }
            }
            ']' => depth = depth.saturating_sub(1),
            _ if depth > 0 => {}
            _ => template.push(ch),
        }
    }
    (template, arbitrary)
}
