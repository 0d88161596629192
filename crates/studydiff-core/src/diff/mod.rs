//! Diff primitives shared by every hierarchy level.
//!
//! - `comparator`: added/removed/common ids and per-field changes
//! - `myers`: minimal edit script between two ordered id sequences
//! - `order`: display-order sequences restricted to common ids

pub mod comparator;
pub mod myers;
pub mod order;

pub use comparator::{compare, compare_with_fields, Comparison, FieldChange, Keyed};
pub use myers::{DiffAlgorithm, Edit, MyersDiff};
pub use order::restricted_sequence;
