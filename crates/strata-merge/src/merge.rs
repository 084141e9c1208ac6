//! Recursive strategy-driven merging of configuration trees.
//!
//! The entry point is [`merge`]: fold one incoming document mapping into the
//! accumulated mapping under the strategy the incoming document declares (or
//! the `merge-last` default). Strategy is a per-node declaration; a nested
//! node can override the ambient choice for its own subtree only, and the
//! ambient choice is never inherited downward.
//!
//! Both inputs are consumed and a new tree is returned; callers must use
//! only the returned value. Sub-merges of distinct keys are independent, so
//! the result does not depend on key iteration order.

use crate::error::MergeError;
use crate::strategy::{strategy_from_control, Strategy, CONTROL_KEY};
use indexmap::map::Entry;
use strata_value::{Mapping, Value};
use yaml_rust2::Yaml;

/// Options controlling a merge.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Maximum mapping nesting depth (default: 256).
    ///
    /// Merging fails with [`MergeError::NestingTooDeep`] if both trees
    /// recurse past this depth.
    pub max_depth: usize,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// Merge an incoming document into the accumulated tree with default options.
///
/// Returns the next accumulated tree. No control markers remain anywhere in
/// the result. On error nothing is returned; both inputs are spent and the
/// caller's previous accumulated tree stays authoritative.
pub fn merge(accumulated: Mapping, incoming: Mapping) -> Result<Mapping, MergeError> {
    merge_with_options(accumulated, incoming, &MergeOptions::default())
}

/// Merge with explicit [`MergeOptions`].
pub fn merge_with_options(
    accumulated: Mapping,
    incoming: Mapping,
    options: &MergeOptions,
) -> Result<Mapping, MergeError> {
    let mut path = Vec::new();
    merge_mapping(accumulated, incoming, 0, &mut path, options)
}

/// Strip control markers from a subtree adopted without per-field merging.
///
/// Removes the control key from every mapping and a leading control element
/// from every sequence, recursively, sequence elements included. Idempotent.
pub fn cleanup(value: Value) -> Value {
    match value {
        Value::Mapping(entries) => Value::Mapping(cleanup_mapping(entries)),
        Value::Sequence(items) => Value::Sequence(cleanup_sequence(items)),
        scalar => scalar,
    }
}

fn cleanup_mapping(mut entries: Mapping) -> Mapping {
    entries.shift_remove(CONTROL_KEY);
    entries.into_iter().map(|(k, v)| (k, cleanup(v))).collect()
}

fn cleanup_sequence(mut items: Vec<Value>) -> Vec<Value> {
    if matches!(items.first(), Some(Value::Mapping(first)) if first.contains_key(CONTROL_KEY)) {
        items.remove(0);
    }
    items.into_iter().map(cleanup).collect()
}

fn merge_mapping(
    mut accumulated: Mapping,
    mut incoming: Mapping,
    depth: usize,
    path: &mut Vec<String>,
    options: &MergeOptions,
) -> Result<Mapping, MergeError> {
    if depth > options.max_depth {
        return Err(MergeError::NestingTooDeep {
            max_depth: options.max_depth,
            path: path.clone(),
        });
    }

    let strategy = match incoming.shift_remove(CONTROL_KEY) {
        Some(control) => strategy_from_control(control, path)?,
        None => Strategy::default(),
    };

    match strategy {
        Strategy::Overwrite => Ok(cleanup_mapping(incoming)),
        Strategy::Remove => {
            // Incoming values are ignored; only the key names matter.
            for key in incoming.keys() {
                accumulated.shift_remove(key);
            }
            Ok(accumulated)
        }
        Strategy::MergeFirst | Strategy::MergeLast => {
            for (key, value) in incoming {
                match accumulated.entry(key) {
                    Entry::Vacant(slot) => {
                        slot.insert(cleanup(value));
                    }
                    Entry::Occupied(mut slot) => {
                        path.push(slot.key().clone());
                        // Take ownership without disturbing the key's position.
                        let existing = slot.insert(Value::Scalar(Yaml::Null));
                        // merge-first is merge-last with the operands' roles
                        // swapped, applied uniformly at every depth: the
                        // incoming value becomes the base and the accumulated
                        // value is folded onto it.
                        let (base, overlay) = match strategy {
                            Strategy::MergeFirst => (cleanup(value), existing),
                            _ => (existing, value),
                        };
                        let merged = merge_value(base, overlay, depth, path, options)?;
                        slot.insert(merged);
                        path.pop();
                    }
                }
            }
            Ok(accumulated)
        }
    }
}

fn merge_value(
    base: Value,
    overlay: Value,
    depth: usize,
    path: &mut Vec<String>,
    options: &MergeOptions,
) -> Result<Value, MergeError> {
    if base.kind() != overlay.kind() {
        tracing::debug!(
            path = %path.join("."),
            base = %base.kind(),
            overlay = %overlay.kind(),
            "type mismatch forces replacement"
        );
        return Ok(cleanup(overlay));
    }
    match (base, overlay) {
        (Value::Mapping(base), Value::Mapping(overlay)) => Ok(Value::Mapping(merge_mapping(
            base,
            overlay,
            depth + 1,
            path,
            options,
        )?)),
        (Value::Sequence(base), Value::Sequence(overlay)) => {
            Ok(Value::Sequence(merge_sequence(base, overlay, path)?))
        }
        (_, overlay) => Ok(overlay),
    }
}

/// Sequence merge is list-level only: concatenation or filtering, never a
/// positional element merge.
fn merge_sequence(
    accumulated: Vec<Value>,
    mut incoming: Vec<Value>,
    path: &[String],
) -> Result<Vec<Value>, MergeError> {
    let strategy = take_sequence_strategy(&mut incoming, path)?;
    let incoming: Vec<Value> = incoming.into_iter().map(cleanup).collect();
    match strategy {
        Strategy::Overwrite => Ok(incoming),
        Strategy::Remove => Ok(accumulated
            .into_iter()
            .filter(|item| !incoming.contains(item))
            .collect()),
        Strategy::MergeFirst => {
            let mut merged = incoming;
            merged.extend(accumulated);
            Ok(merged)
        }
        Strategy::MergeLast => {
            let mut merged = accumulated;
            merged.extend(incoming);
            Ok(merged)
        }
    }
}

/// Extract the strategy from a leading control element, if present.
///
/// The whole first element is metadata when it carries the control key;
/// it is removed, extra keys included.
fn take_sequence_strategy(
    incoming: &mut Vec<Value>,
    path: &[String],
) -> Result<Strategy, MergeError> {
    let control = match incoming.first_mut() {
        Some(Value::Mapping(first)) => first.shift_remove(CONTROL_KEY),
        _ => None,
    };
    match control {
        Some(value) => {
            incoming.remove(0);
            strategy_from_control(value, path)
        }
        None => Ok(Strategy::default()),
    }
}
