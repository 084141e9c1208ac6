//! Error types for the merge engine.

use crate::strategy::Strategy;
use thiserror::Error;

/// Errors that abort a merge.
///
/// Type mismatches between accumulated and incoming values are not errors;
/// they are resolved in-band (incoming wins) and surfaced at debug level.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MergeError {
    /// A control marker named a strategy outside the recognized set.
    #[error(
        "unknown merge strategy \"{found}\" at path: {} (expected one of: {})",
        path.join("."),
        Strategy::NAMES.join(", ")
    )]
    UnknownStrategy {
        /// The offending token, or a rendered form of a non-string control value
        found: String,
        /// Mapping-key path of the node that declared it
        path: Vec<String>,
    },

    /// Merge recursion exceeded the configured depth limit.
    #[error("config nesting too deep (max depth: {max_depth}) at path: {}", path.join("."))]
    NestingTooDeep {
        /// Maximum allowed depth
        max_depth: usize,
        /// Mapping-key path where the limit was exceeded
        path: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_strategy_message_names_token_and_accepted_set() {
        let err = MergeError::UnknownStrategy {
            found: "bogus".to_string(),
            path: vec!["format".to_string(), "html".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("\"bogus\""));
        assert!(message.contains("format.html"));
        assert!(message.contains("overwrite, merge-first, merge-last, remove"));
    }

    #[test]
    fn test_nesting_too_deep_message() {
        let err = MergeError::NestingTooDeep {
            max_depth: 8,
            path: vec!["a".to_string(), "b".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("max depth: 8"));
        assert!(message.contains("a.b"));
    }
}
