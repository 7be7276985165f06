//! Synthesis: descriptors + variant universe + options -> type schema.
//!
//! The fold is pure and deterministic. Properties land in an ordered map,
//! literals keep first-seen order, and catalogue vectors keep generation
//! order, so identical inputs serialize byte-identically.

use crate::error::{SynthError, SynthResult};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;
use tsg_types::{
    GenerationOptions, NestingRule, PropertySchemaEntry, TypeSchema, UtilityDescriptor,
    VariantUniverse,
};

/// Fold the analysis products into the final schema value.
///
/// Option semantics:
/// - `use_arbitrary_value = false` excludes `[*]` templates from the
///   literal sets; `supports_arbitrary` still reports the capability.
/// - `use_docs = false` strips documentation metadata.
/// - `disable_variants = true` keeps only base alternatives, empties both
///   variant catalogues and marks every property's nesting `None`. It
///   overrides the other variant switches.
/// - `use_soft_variants` picks `Open` nesting for every property; its
///   negation (exact) picks `Closed` over the keys observed per property.
/// - `use_string_kind_variants_only = true` drops the nest-group
///   catalogue, keeping the flat one.
/// - `use_optional_property = true` marks every property optional.
pub fn synthesize(
    descriptors: &[UtilityDescriptor],
    universe: &VariantUniverse,
    engine_version: &str,
    options: &GenerationOptions,
) -> SynthResult<TypeSchema> {
    if descriptors.is_empty() {
        return Err(SynthError::EmptyDescriptors);
    }

    let mut properties: BTreeMap<String, PropertySchemaEntry> = BTreeMap::new();
    let mut observed_prefixes: BTreeMap<String, HashSet<String>> = BTreeMap::new();

    for descriptor in descriptors {
        for prefix in &descriptor.variant_chain {
            observed_prefixes
                .entry(descriptor.property.clone())
                .or_default()
                .insert(prefix.clone());
        }

        if options.disable_variants && !descriptor.is_base() {
            continue;
        }

        let entry = properties
            .entry(descriptor.property.clone())
            .or_insert_with(|| PropertySchemaEntry {
                property: descriptor.property.clone(),
                literals: Vec::new(),
                supports_arbitrary: false,
                doc: None,
                optional: options.use_optional_property,
                nesting: NestingRule::Open,
            });

        if descriptor.arbitrary {
            entry.supports_arbitrary = true;
        }
        if options.use_docs && entry.doc.is_none() {
            entry.doc = descriptor.doc.clone();
        }
        if descriptor.arbitrary && !options.use_arbitrary_value {
            continue;
        }
        let rendered = descriptor.rendered_template();
        if !entry.literals.contains(&rendered) {
            entry.literals.push(rendered);
        }
    }

    for (name, entry) in properties.iter_mut() {
        entry.nesting = if options.disable_variants {
            NestingRule::None
        } else if options.use_soft_variants {
            NestingRule::Open
        } else {
            NestingRule::Closed(closed_keys(universe, observed_prefixes.get(name)))
        };
    }

    let (variants, nest_groups) = if options.disable_variants {
        (Vec::new(), Vec::new())
    } else if options.use_string_kind_variants_only {
        (universe.flat.clone(), Vec::new())
    } else {
        (universe.flat.clone(), universe.nest_groups.clone())
    };

    let schema = TypeSchema {
        engine_version: engine_version.to_string(),
        properties,
        variants,
        nest_groups,
    };
    debug!(
        properties = schema.property_count(),
        literals = schema.literal_count(),
        variants = schema.variants.len(),
        nest_groups = schema.nest_groups.len(),
        "schema synthesized"
    );
    Ok(schema)
}

/// The vocabulary keys a property's observed prefixes select, in
/// catalogue order
fn closed_keys(universe: &VariantUniverse, observed: Option<&HashSet<String>>) -> Vec<String> {
    let Some(observed) = observed else {
        return Vec::new();
    };
    universe
        .flat
        .iter()
        .filter(|key| observed.iter().any(|prefix| key.matches_prefix(prefix)))
        .map(|key| key.key.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsg_types::{NestGroupDefinition, NestGroupKind, PropertyDoc, VariantKey};

    fn descriptor(
        class_name: &str,
        template: &str,
        property: &str,
        chain: &[&str],
        arbitrary: bool,
    ) -> UtilityDescriptor {
        UtilityDescriptor::new(class_name, template, property)
            .with_doc(PropertyDoc::new(
                property,
                format!("https://developer.mozilla.org/en-US/docs/Web/CSS/{}", property),
            ))
            .with_arbitrary(arbitrary)
            .with_variant_chain(chain.iter().map(|s| s.to_string()).collect())
    }

    fn sample_descriptors() -> Vec<UtilityDescriptor> {
        vec![
            descriptor("flex", "flex", "display", &[], false),
            descriptor("sm:flex", "flex", "display", &["sm"], false),
            descriptor("p-4", "p-4", "padding", &[], false),
            descriptor("p-[10px]", "p-[*]", "padding", &[], true),
            descriptor("bg-red-500", "bg-red-500", "backgroundColor", &[], false),
            descriptor(
                "hover:bg-red-500",
                "bg-red-500",
                "backgroundColor",
                &["hover"],
                false,
            ),
        ]
    }

    fn sample_universe() -> VariantUniverse {
        VariantUniverse {
            flat: vec![
                VariantKey::state(":hover"),
                VariantKey::state(":focus"),
                VariantKey::breakpoint("@sm"),
                VariantKey::container("@sm"),
                VariantKey::theme("@dark"),
            ],
            nest_groups: vec![
                NestGroupDefinition::new(":hover:focus", NestGroupKind::Combination),
                NestGroupDefinition::new(":focus:hover", NestGroupKind::Combination),
                NestGroupDefinition::new("@sm:hover:focus", NestGroupKind::BreakCombination),
            ],
        }
    }

    #[test]
    fn test_default_options_full_schema() {
        let schema = synthesize(
            &sample_descriptors(),
            &sample_universe(),
            "4.1.0",
            &GenerationOptions::default(),
        )
        .unwrap();

        assert_eq!(schema.engine_version, "4.1.0");
        assert_eq!(schema.property_count(), 3);

        let display = schema.property("display").unwrap();
        assert_eq!(display.literals, vec!["flex", "sm:flex"]);
        assert!(display.nesting.is_open());
        assert!(display.doc.is_some());

        let padding = schema.property("padding").unwrap();
        assert_eq!(padding.literals, vec!["p-4", "p-[*]"]);
        assert!(padding.supports_arbitrary);

        assert_eq!(schema.variants.len(), 5);
        assert_eq!(schema.nest_groups.len(), 3);
    }

    #[test]
    fn test_synthesis_is_byte_identical() {
        let descriptors = sample_descriptors();
        let universe = sample_universe();
        let options = GenerationOptions::default();

        let first = synthesize(&descriptors, &universe, "4.1.0", &options).unwrap();
        let second = synthesize(&descriptors, &universe, "4.1.0", &options).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string_pretty(&first).unwrap(),
            serde_json::to_string_pretty(&second).unwrap()
        );
    }

    #[test]
    fn test_arbitrary_value_gating() {
        let options = GenerationOptions::default().with_arbitrary_value(false);
        let schema = synthesize(
            &sample_descriptors(),
            &sample_universe(),
            "4.1.0",
            &options,
        )
        .unwrap();

        let padding = schema.property("padding").unwrap();
        assert_eq!(padding.literals, vec!["p-4"]);
        assert!(padding.supports_arbitrary);

        let on = synthesize(
            &sample_descriptors(),
            &sample_universe(),
            "4.1.0",
            &GenerationOptions::default(),
        )
        .unwrap();
        assert!(on
            .property("padding")
            .unwrap()
            .literals
            .contains(&"p-[*]".to_string()));
    }

    #[test]
    fn test_disable_variants_is_exclusive() {
        let options = GenerationOptions::default().with_disabled_variants(true);
        let schema = synthesize(
            &sample_descriptors(),
            &sample_universe(),
            "4.1.0",
            &options,
        )
        .unwrap();

        assert!(schema.variants.is_empty());
        assert!(schema.nest_groups.is_empty());
        for entry in schema.properties.values() {
            assert_eq!(entry.nesting, NestingRule::None);
            assert!(entry.literals.iter().all(|l| !l.contains(':')));
        }
        let display = schema.property("display").unwrap();
        assert_eq!(display.literals, vec!["flex"]);
    }

    #[test]
    fn test_exact_variants_close_over_observed_keys() {
        let options = GenerationOptions::default().with_soft_variants(false);
        let schema = synthesize(
            &sample_descriptors(),
            &sample_universe(),
            "4.1.0",
            &options,
        )
        .unwrap();

        // `sm` selects the breakpoint key, not the container spelled `@sm`
        let display = schema.property("display").unwrap();
        assert_eq!(
            display.nesting,
            NestingRule::Closed(vec!["@sm".to_string()])
        );

        let background = schema.property("backgroundColor").unwrap();
        assert_eq!(
            background.nesting,
            NestingRule::Closed(vec![":hover".to_string()])
        );

        // no prefixes observed for padding: nothing may nest
        let padding = schema.property("padding").unwrap();
        assert_eq!(padding.nesting, NestingRule::Closed(Vec::new()));
    }

    #[test]
    fn test_string_kind_variants_only_drops_nest_groups() {
        let options = GenerationOptions::default().with_string_kind_variants_only(true);
        let schema = synthesize(
            &sample_descriptors(),
            &sample_universe(),
            "4.1.0",
            &options,
        )
        .unwrap();

        assert_eq!(schema.variants.len(), 5);
        assert!(schema.nest_groups.is_empty());
    }

    #[test]
    fn test_docs_stripped_when_disabled() {
        let options = GenerationOptions::default().with_docs(false);
        let schema = synthesize(
            &sample_descriptors(),
            &sample_universe(),
            "4.1.0",
            &options,
        )
        .unwrap();
        assert!(schema.properties.values().all(|e| e.doc.is_none()));
    }

    #[test]
    fn test_optional_property_marks_all_entries() {
        let options = GenerationOptions::default().with_optional_property(true);
        let schema = synthesize(
            &sample_descriptors(),
            &sample_universe(),
            "4.1.0",
            &options,
        )
        .unwrap();
        assert!(schema.properties.values().all(|e| e.optional));
    }

    #[test]
    fn test_empty_descriptors_fatal() {
        let result = synthesize(
            &[],
            &sample_universe(),
            "4.1.0",
            &GenerationOptions::default(),
        );
        assert_eq!(result.unwrap_err(), SynthError::EmptyDescriptors);
    }

    #[test]
    fn test_duplicate_rendered_literals_collapse() {
        let descriptors = vec![
            descriptor("flex", "flex", "display", &[], false),
            descriptor("flex", "flex", "display", &[], false),
        ];
        let schema = synthesize(
            &descriptors,
            &sample_universe(),
            "4.1.0",
            &GenerationOptions::default(),
        )
        .unwrap();
        assert_eq!(schema.property("display").unwrap().literals, vec!["flex"]);
    }
}
