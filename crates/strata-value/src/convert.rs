//! Conversion between the `yaml-rust2` AST and [`Value`] trees.
//!
//! Document sources hand the engine already-parsed YAML; this module lifts
//! that AST into the closed [`Value`] union and back. Conversion is the
//! boundary where the "keys are strings" contract is enforced.

use crate::value::{Mapping, Value};
use thiserror::Error;
use yaml_rust2::yaml::Hash;
use yaml_rust2::Yaml;

/// Errors that can occur while lifting a YAML AST into a [`Value`] tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// A mapping key was not a string scalar.
    #[error("mapping key is not a string: {key}")]
    NonStringKey {
        /// Rendered form of the offending key
        key: String,
    },

    /// The document contained an unresolved alias node.
    #[error("unresolved alias in document")]
    Alias,

    /// The document contained a malformed value node.
    #[error("malformed value in document")]
    BadValue,
}

/// Convert a parsed YAML document into a [`Value`] tree.
///
/// Arrays become sequences, hashes become string-keyed mappings, everything
/// else stays a scalar leaf. Non-string keys, aliases, and malformed nodes
/// are conversion errors rather than silent drops.
pub fn value_from_yaml(yaml: Yaml) -> Result<Value, ConvertError> {
    match yaml {
        Yaml::Array(items) => {
            let items = items
                .into_iter()
                .map(value_from_yaml)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Sequence(items))
        }
        Yaml::Hash(hash) => {
            let mut entries = Mapping::with_capacity(hash.len());
            for (key, value) in hash {
                match key {
                    Yaml::String(key) => {
                        entries.insert(key, value_from_yaml(value)?);
                    }
                    other => {
                        return Err(ConvertError::NonStringKey {
                            key: key_repr(&other),
                        });
                    }
                }
            }
            Ok(Value::Mapping(entries))
        }
        Yaml::Alias(_) => Err(ConvertError::Alias),
        Yaml::BadValue => Err(ConvertError::BadValue),
        scalar => Ok(Value::Scalar(scalar)),
    }
}

/// Convert a [`Value`] tree back into a YAML AST.
///
/// The inverse of [`value_from_yaml`]; infallible because [`Value`] is
/// strictly narrower than `Yaml`.
pub fn value_to_yaml(value: Value) -> Yaml {
    match value {
        Value::Scalar(yaml) => yaml,
        Value::Sequence(items) => Yaml::Array(items.into_iter().map(value_to_yaml).collect()),
        Value::Mapping(entries) => {
            let mut hash = Hash::new();
            for (key, value) in entries {
                hash.insert(Yaml::String(key), value_to_yaml(value));
            }
            Yaml::Hash(hash)
        }
    }
}

fn key_repr(key: &Yaml) -> String {
    match key {
        Yaml::String(s) => s.clone(),
        Yaml::Integer(n) => n.to_string(),
        Yaml::Real(r) => r.clone(),
        Yaml::Boolean(b) => b.to_string(),
        Yaml::Null => "null".to_string(),
        Yaml::Array(_) => "sequence".to_string(),
        Yaml::Hash(_) => "mapping".to_string(),
        _ => "invalid".to_string(),
    }
}
