//! The accumulated tree threaded across a document sequence.
//!
//! Orchestration feeds already-parsed document mappings to a [`Stack`] one
//! at a time, strictly in document order; each fold's result is the next
//! fold's input. The stack holds no ambient state and does no I/O, so the
//! whole pipeline stays a pure left fold over its documents.

use crate::error::MergeError;
use crate::merge::{merge_with_options, MergeOptions};
use strata_value::{Mapping, Value};

/// The running merge result across a sequence of documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    root: Mapping,
}

impl Stack {
    /// An empty accumulated tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing accumulated tree.
    pub fn from_mapping(root: Mapping) -> Self {
        Self { root }
    }

    /// Whether anything has accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of top-level keys accumulated so far.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Fold one incoming document into the accumulated tree.
    ///
    /// On error the accumulated tree is left exactly as it was; a failed
    /// merge never applies partially.
    pub fn apply(&mut self, incoming: Mapping) -> Result<(), MergeError> {
        self.apply_with_options(incoming, &MergeOptions::default())
    }

    /// Fold one document with explicit [`MergeOptions`].
    pub fn apply_with_options(
        &mut self,
        incoming: Mapping,
        options: &MergeOptions,
    ) -> Result<(), MergeError> {
        // Merge a copy so an aborted merge cannot disturb the original.
        let merged = merge_with_options(self.root.clone(), incoming, options)?;
        self.root = merged;
        tracing::debug!(keys = self.root.len(), "applied document layer");
        Ok(())
    }

    /// Borrow the accumulated tree.
    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }

    /// Take the accumulated tree.
    pub fn into_mapping(self) -> Mapping {
        self.root
    }

    /// Take the accumulated tree as a [`Value`].
    pub fn into_value(self) -> Value {
        Value::Mapping(self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_value::value_from_yaml;
    use yaml_rust2::YamlLoader;

    fn doc(src: &str) -> Mapping {
        let mut docs = YamlLoader::load_from_str(src).expect("valid yaml");
        value_from_yaml(docs.remove(0))
            .expect("convertible yaml")
            .into_mapping()
            .expect("top-level mapping")
    }

    #[test]
    fn test_starts_empty() {
        let stack = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_folds_documents_in_order() {
        let mut stack = Stack::new();
        stack.apply(doc("common:\n  dns: [10.0.0.1]\nrole: base")).unwrap();
        stack.apply(doc("role: web\nports: [80]")).unwrap();
        stack
            .apply(doc("ports: [443]\ncommon:\n  dns:\n    - __: merge-first\n    - 10.0.0.2"))
            .unwrap();

        assert_eq!(
            stack.into_mapping(),
            doc(
                r#"
common:
  dns: [10.0.0.2, 10.0.0.1]
role: web
ports: [80, 443]
"#
            )
        );
    }

    #[test]
    fn test_failed_apply_leaves_tree_untouched() {
        let mut stack = Stack::new();
        stack.apply(doc("a: 1")).unwrap();
        let before = stack.clone();

        let err = stack.apply(doc("__: bogus\nb: 2")).unwrap_err();
        assert!(matches!(err, MergeError::UnknownStrategy { .. }));
        assert_eq!(stack, before);
    }

    #[test]
    fn test_resume_from_existing_tree() {
        let mut stack = Stack::from_mapping(doc("a: 1"));
        stack.apply(doc("b: 2")).unwrap();
        assert_eq!(stack.as_mapping(), &doc("a: 1\nb: 2"));
    }

    #[test]
    fn test_into_value_wraps_mapping() {
        let mut stack = Stack::new();
        stack.apply(doc("a: 1")).unwrap();
        assert_eq!(stack.into_value(), Value::Mapping(doc("a: 1")));
    }

    #[test]
    fn test_apply_respects_options() {
        let mut stack = Stack::from_mapping(doc("a:\n  b:\n    c: 1"));
        let options = MergeOptions { max_depth: 1 };
        let err = stack
            .apply_with_options(doc("a:\n  b:\n    c: 2"), &options)
            .unwrap_err();
        assert!(matches!(err, MergeError::NestingTooDeep { .. }));
    }
}
