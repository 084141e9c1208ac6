//! # strata-merge
//!
//! A deterministic, strategy-driven engine for merging a sequence of
//! tree-shaped configuration documents into a single resulting tree.
//!
//! Each document may declare, at any nesting level, how its data combines
//! with what came before by writing one of the four strategy tokens under
//! the reserved [`CONTROL_KEY`] (`"__"`):
//!
//! - `overwrite` — discard the accumulated node, adopt the incoming one
//! - `merge-last` — merge, incoming side wins ties (the default)
//! - `merge-first` — merge, the already-accumulated side wins ties
//! - `remove` — delete the named keys (or equal sequence elements)
//!
//! Inside a sequence, a leading mapping element carrying the control key
//! declares the strategy for the whole sequence. Control markers are
//! metadata and never survive into merge output.
//!
//! Merging is a pure structural transformation: no I/O, no ambient state,
//! fully deterministic from its inputs. An unrecognized strategy token is a
//! configuration error that aborts the merge; it is never coerced to a
//! default.
//!
//! ## Example
//!
//! ```rust
//! use strata_merge::{merge, Stack};
//! use strata_value::{Mapping, Value};
//!
//! let mut base = Mapping::new();
//! base.insert("region".to_string(), Value::string("us-east-1"));
//!
//! let mut incoming = Mapping::new();
//! incoming.insert("zone".to_string(), Value::string("a"));
//!
//! let merged = merge(base, incoming)?;
//! assert_eq!(merged.len(), 2);
//!
//! // Or fold a whole document sequence:
//! let mut stack = Stack::from_mapping(merged);
//! stack.apply(Mapping::new())?;
//! assert_eq!(stack.len(), 2);
//! # Ok::<(), strata_merge::MergeError>(())
//! ```

mod error;
mod merge;
mod stack;
mod strategy;

pub use error::MergeError;
pub use merge::{cleanup, merge, merge_with_options, MergeOptions};
pub use stack::Stack;
pub use strategy::{Strategy, CONTROL_KEY};

// Re-export the value model for convenience
pub use strata_value::{Mapping, Value, ValueKind};
