//! Core tree types for configuration documents.

use indexmap::IndexMap;
use std::fmt;
use yaml_rust2::Yaml;

/// A string-keyed, insertion-ordered mapping node.
pub type Mapping = IndexMap<String, Value>;

/// A node in a configuration tree.
///
/// Exactly three shapes exist; exhaustive matching guarantees no fourth
/// shape can be silently mishandled.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A leaf value (string, integer, real, boolean, null).
    ///
    /// Holds only leaf `Yaml` variants; [`value_from_yaml`](crate::value_from_yaml)
    /// lifts arrays and hashes into the other two cases.
    Scalar(Yaml),

    /// An ordered list of values.
    Sequence(Vec<Value>),

    /// String-keyed mapping; key order is preserved but never significant.
    Mapping(Mapping),
}

/// The flat shape of a [`Value`], with scalar categories distinguished.
///
/// Two values merge structurally only when their kinds match; differing
/// scalar categories count as a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Mapping,
    Sequence,
    String,
    Integer,
    Real,
    Boolean,
    Null,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Mapping => "mapping",
            ValueKind::Sequence => "sequence",
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Real => "real",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
        };
        f.write_str(name)
    }
}

impl Value {
    /// A null scalar.
    pub fn null() -> Self {
        Value::Scalar(Yaml::Null)
    }

    /// A string scalar.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Scalar(Yaml::String(s.into()))
    }

    /// An integer scalar.
    pub fn integer(n: i64) -> Self {
        Value::Scalar(Yaml::Integer(n))
    }

    /// A boolean scalar.
    pub fn boolean(b: bool) -> Self {
        Value::Scalar(Yaml::Boolean(b))
    }

    /// The flat shape of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Mapping(_) => ValueKind::Mapping,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Scalar(yaml) => match yaml {
                Yaml::String(_) => ValueKind::String,
                Yaml::Integer(_) => ValueKind::Integer,
                Yaml::Real(_) => ValueKind::Real,
                Yaml::Boolean(_) => ValueKind::Boolean,
                _ => ValueKind::Null,
            },
        }
    }

    /// Check if this is a scalar value.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Check if this is a sequence value.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Check if this is a mapping value.
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// Get the underlying `Yaml` if this is a scalar.
    pub fn as_yaml(&self) -> Option<&Yaml> {
        match self {
            Value::Scalar(yaml) => Some(yaml),
            _ => None,
        }
    }

    /// Get the string content if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Yaml::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Get the items if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries if this is a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Take the entries if this is a mapping.
    pub fn into_mapping(self) -> Option<Mapping> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Short human-readable rendering for diagnostics.
    ///
    /// Scalars render their content; composites render their shape name.
    pub fn describe(&self) -> String {
        match self {
            Value::Mapping(_) => "mapping".to_string(),
            Value::Sequence(_) => "sequence".to_string(),
            Value::Scalar(yaml) => match yaml {
                Yaml::String(s) => s.clone(),
                Yaml::Integer(n) => n.to_string(),
                Yaml::Real(r) => r.clone(),
                Yaml::Boolean(b) => b.to_string(),
                _ => "null".to_string(),
            },
        }
    }
}
