//! Merge strategy vocabulary and the control-marker convention.
//!
//! Documents declare how a node combines with what came before by writing a
//! strategy token under the reserved key [`CONTROL_KEY`]. The token set is
//! closed and case-sensitive; it is a de facto wire contract with every
//! document producer, so there is no leniency and no aliasing.

use crate::error::MergeError;
use std::fmt;
use strata_value::Value;
use yaml_rust2::Yaml;

/// Reserved mapping key carrying a node's merge strategy.
///
/// Metadata only: it is consumed during strategy resolution and never
/// appears in merge output. Inside a sequence, a leading mapping element
/// carrying this key plays the same role for the whole sequence.
pub const CONTROL_KEY: &str = "__";

/// How a node combines with its counterpart in the accumulated tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Discard the accumulated node and adopt the incoming one wholesale.
    Overwrite,

    /// Merge, with the incoming side treated as the pre-existing one:
    /// values already accumulated win ties, incoming sequence items come first.
    MergeFirst,

    /// Merge, incoming side wins ties; the default everywhere a node does
    /// not declare its own strategy.
    #[default]
    MergeLast,

    /// Delete the named keys (or equal sequence elements) from the
    /// accumulated node; incoming values are not inspected.
    Remove,
}

impl Strategy {
    /// Recognized wire tokens, in documentation order.
    pub const NAMES: [&'static str; 4] = ["overwrite", "merge-first", "merge-last", "remove"];

    /// Parse a wire token. Returns `None` for anything outside the closed set.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "overwrite" => Some(Strategy::Overwrite),
            "merge-first" => Some(Strategy::MergeFirst),
            "merge-last" => Some(Strategy::MergeLast),
            "remove" => Some(Strategy::Remove),
            _ => None,
        }
    }

    /// The wire token for this strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Overwrite => "overwrite",
            Strategy::MergeFirst => "merge-first",
            Strategy::MergeLast => "merge-last",
            Strategy::Remove => "remove",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve an extracted control value into a strategy.
///
/// A null control value means the marker names no strategy; that falls back
/// to the default. Everything else must be a recognized string token.
pub(crate) fn strategy_from_control(value: Value, path: &[String]) -> Result<Strategy, MergeError> {
    match value {
        Value::Scalar(Yaml::Null) => Ok(Strategy::default()),
        Value::Scalar(Yaml::String(token)) => {
            Strategy::parse(&token).ok_or_else(|| MergeError::UnknownStrategy {
                found: token,
                path: path.to_vec(),
            })
        }
        other => Err(MergeError::UnknownStrategy {
            found: other.describe(),
            path: path.to_vec(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_value::Mapping;

    #[test]
    fn test_parse_all_tokens() {
        assert_eq!(Strategy::parse("overwrite"), Some(Strategy::Overwrite));
        assert_eq!(Strategy::parse("merge-first"), Some(Strategy::MergeFirst));
        assert_eq!(Strategy::parse("merge-last"), Some(Strategy::MergeLast));
        assert_eq!(Strategy::parse("remove"), Some(Strategy::Remove));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Strategy::parse("Overwrite"), None);
        assert_eq!(Strategy::parse("MERGE-LAST"), None);
        assert_eq!(Strategy::parse("merge_last"), None);
        assert_eq!(Strategy::parse(""), None);
    }

    #[test]
    fn test_default_is_merge_last() {
        assert_eq!(Strategy::default(), Strategy::MergeLast);
    }

    #[test]
    fn test_round_trip_tokens() {
        for name in Strategy::NAMES {
            assert_eq!(Strategy::parse(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_control_value_null_falls_back_to_default() {
        let strategy = strategy_from_control(Value::null(), &[]).unwrap();
        assert_eq!(strategy, Strategy::MergeLast);
    }

    #[test]
    fn test_control_value_unknown_token() {
        let err = strategy_from_control(Value::string("bogus"), &["a".to_string()]).unwrap_err();
        match err {
            MergeError::UnknownStrategy { found, path } => {
                assert_eq!(found, "bogus");
                assert_eq!(path, vec!["a".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_control_value_non_string() {
        let err = strategy_from_control(Value::integer(7), &[]).unwrap_err();
        match err {
            MergeError::UnknownStrategy { found, .. } => assert_eq!(found, "7"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = strategy_from_control(Value::Mapping(Mapping::new()), &[]).unwrap_err();
        match err {
            MergeError::UnknownStrategy { found, .. } => assert_eq!(found, "mapping"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
