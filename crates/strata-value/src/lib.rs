//! # strata-value
//!
//! The value tree data model for strata configuration merging.
//!
//! This crate provides [`Value`], a closed three-case union over the shapes
//! that flow through the merge engine: string-keyed mappings, sequences, and
//! scalar leaves. Scalars are represented as `yaml_rust2::Yaml` leaf values,
//! so documents parsed from YAML convert losslessly.
//!
//! ## Design
//!
//! Mappings use `indexmap::IndexMap`, which preserves insertion order for
//! stable output while keeping equality order-insensitive. Merge semantics
//! never depend on key order.
//!
//! ## Example
//!
//! ```rust
//! use strata_value::{value_from_yaml, Value};
//! use yaml_rust2::YamlLoader;
//!
//! let docs = YamlLoader::load_from_str("name: web\nports: [80, 443]").unwrap();
//! let value = value_from_yaml(docs.into_iter().next().unwrap()).unwrap();
//!
//! let mapping = value.as_mapping().unwrap();
//! assert_eq!(mapping["name"].as_str(), Some("web"));
//! assert_eq!(mapping["ports"].as_sequence().unwrap().len(), 2);
//! ```

mod convert;
mod value;

pub use convert::{value_from_yaml, value_to_yaml, ConvertError};
pub use value::{Mapping, Value, ValueKind};
