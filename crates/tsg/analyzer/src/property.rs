//! Property resolution: from declared CSS properties to one schema name.
//!
//! Single declarations camelCase directly. Multi-declaration rules resolve
//! to a group name: an axis pair (`padding-left` + `padding-right` becomes
//! `paddingX`), else the longest common dash-prefix, else the first
//! property. Custom properties are ignored while any standard declaration
//! exists; an all-custom rule resolves to its first custom property.

use crate::scanner::Declaration;

/// The schema property a rule resolved to, with the CSS properties that
/// produced it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedProperty {
    /// camelCase schema name
    pub name: String,
    /// Declared CSS property names, de-duplicated, observation order
    pub css_properties: Vec<String>,
}

/// Resolve a rule's declaration block to a schema property.
///
/// Returns `None` when the block declares nothing at all.
pub fn resolve_property(declarations: &[Declaration]) -> Option<ResolvedProperty> {
    let standard = unique_names(declarations.iter().filter(|d| !d.property.starts_with("--")));
    let names = if standard.is_empty() {
        unique_names(declarations.iter())
    } else {
        standard
    };
    let first = names.first()?;

    let name = if names.len() == 1 {
        camel_case(first)
    } else {
        group_name(&names)
    };
    Some(ResolvedProperty {
        name,
        css_properties: names,
    })
}

/// Reference URL for a CSS property
pub fn doc_url(css_property: &str) -> String {
    format!(
        "https://developer.mozilla.org/en-US/docs/Web/CSS/{}",
        css_property
    )
}

/// camelCase a dash-separated property name; leading dashes are dropped
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split('-').filter(|s| !s.is_empty()) {
        if out.is_empty() {
            out.push_str(segment);
        } else {
            let mut chars = segment.chars();
            if let Some(head) = chars.next() {
                out.extend(head.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

fn unique_names<'a>(declarations: impl Iterator<Item = &'a Declaration>) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for declaration in declarations {
        if !names.iter().any(|n| n == &declaration.property) {
            names.push(declaration.property.clone());
        }
    }
    names
}

fn group_name(names: &[String]) -> String {
    if names.len() == 2 {
        if let Some(axis) = axis_pair(&names[0], &names[1]) {
            return axis;
        }
    }
    let common = common_prefix_segments(names);
    if !common.is_empty() {
        return camel_case(&common.join("-"));
    }
    camel_case(&names[0])
}

/// Detect a left/right or top/bottom pair over a shared stem
fn axis_pair(a: &str, b: &str) -> Option<String> {
    for (first, second, suffix) in [("-left", "-right", "X"), ("-top", "-bottom", "Y")] {
        let forward = (a.strip_suffix(first), b.strip_suffix(second));
        if let (Some(stem_a), Some(stem_b)) = forward {
            if stem_a == stem_b {
                return Some(format!("{}{}", camel_case(stem_a), suffix));
            }
        }
        let reversed = (a.strip_suffix(second), b.strip_suffix(first));
        if let (Some(stem_a), Some(stem_b)) = reversed {
            if stem_a == stem_b {
                return Some(format!("{}{}", camel_case(stem_a), suffix));
            }
        }
    }
    None
}

fn common_prefix_segments(names: &[String]) -> Vec<String> {
    let first: Vec<&str> = names[0].split('-').collect();
    let mut len = first.len();
    for name in &names[1..] {
        let segments: Vec<&str> = name.split('-').collect();
        let mut shared = 0;
        while shared < len && shared < segments.len() && segments[shared] == first[shared] {
            shared += 1;
        }
        len = shared;
        if len == 0 {
            break;
        }
    }
    first[..len].iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls(props: &[&str]) -> Vec<Declaration> {
        props
            .iter()
            .map(|p| Declaration {
                property: p.to_string(),
                value: "0".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_single_property_camel_cases() {
        let resolved = resolve_property(&decls(&["background-color"])).unwrap();
        assert_eq!(resolved.name, "backgroundColor");
        assert_eq!(resolved.css_properties, vec!["background-color"]);
    }

    #[test]
    fn test_axis_pairs() {
        let x = resolve_property(&decls(&["padding-left", "padding-right"])).unwrap();
        assert_eq!(x.name, "paddingX");

        let y = resolve_property(&decls(&["margin-top", "margin-bottom"])).unwrap();
        assert_eq!(y.name, "marginY");

        let reversed = resolve_property(&decls(&["scroll-margin-bottom", "scroll-margin-top"]))
            .unwrap();
        assert_eq!(reversed.name, "scrollMarginY");
    }

    #[test]
    fn test_common_prefix_group() {
        let resolved = resolve_property(&decls(&[
            "border-top-left-radius",
            "border-top-right-radius",
            "border-bottom-right-radius",
        ]))
        .unwrap();
        assert_eq!(resolved.name, "border");
    }

    #[test]
    fn test_no_common_prefix_falls_back_to_first() {
        let resolved = resolve_property(&decls(&["overflow", "text-overflow", "white-space"]))
            .unwrap();
        assert_eq!(resolved.name, "overflow");
    }

    #[test]
    fn test_custom_properties_ignored_when_standard_present() {
        let resolved = resolve_property(&decls(&["--tw-shadow", "box-shadow"])).unwrap();
        assert_eq!(resolved.name, "boxShadow");
        assert_eq!(resolved.css_properties, vec!["box-shadow"]);
    }

    #[test]
    fn test_all_custom_resolves_to_first() {
        let resolved = resolve_property(&decls(&["--tw-border-style"])).unwrap();
        assert_eq!(resolved.name, "twBorderStyle");
    }

    #[test]
    fn test_empty_block_is_none() {
        assert!(resolve_property(&[]).is_none());
    }

    #[test]
    fn test_duplicate_declarations_collapse() {
        let resolved = resolve_property(&decls(&["display", "display"])).unwrap();
        assert_eq!(resolved.name, "display");
        assert_eq!(resolved.css_properties.len(), 1);
    }

    #[test]
    fn test_doc_url_targets_property_page() {
        assert_eq!(
            doc_url("background-color"),
            "https://developer.mozilla.org/en-US/docs/Web/CSS/background-color"
        );
    }
}
