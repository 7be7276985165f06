//! Core data model for the utility-class type-schema pipeline
//!
//! Every stage of the pipeline speaks these types:
//!
//! - [`UtilityDescriptor`]: one compiled rule reduced to its reusable facts
//! - [`VariantKey`] / [`VariantUniverse`]: the conditional-application
//!   vocabulary and its generated nesting catalogue
//! - [`GenerationOptions`]: the closed switch set controlling synthesis
//! - [`TypeSchema`]: the final deterministic artifact value
//!
//! The model is serialization-first: the schema artifact, the nest-group
//! artifact and the analysis store are all serde projections of these
//! structs.

#![deny(unsafe_code)]

pub mod descriptor;
pub mod options;
pub mod schema;
pub mod variant;

// Re-export main types
pub use descriptor::{PropertyDoc, UtilityDescriptor};
pub use options::GenerationOptions;
pub use schema::{NestingRule, PropertySchemaEntry, TypeSchema};
pub use variant::{NestGroupDefinition, NestGroupKind, VariantKey, VariantKind, VariantUniverse};
