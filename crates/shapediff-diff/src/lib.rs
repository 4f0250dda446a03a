//! Comparison engine for shapediff.
//!
//! Computes field-level and key-level discrepancies between two values of the
//! same shape, reporting each as a [`DiffEntry`](shapediff_types::DiffEntry).
//!
//! # Key Functions
//!
//! - [`compare_records`] -- Walk two records field by field, flattening embedded sub-records
//! - [`compare_maps`] -- Compare two mappings key by key
//! - [`compare_sequences`] -- Index-aligned comparison of two sequences
//!
//! The comparators are independent; feeding the two values of an entry back
//! into another comparator is left to the caller.

pub mod error;
pub mod map_diff;
pub mod options;
pub mod record_diff;
pub mod seq_diff;

pub use error::{DiffError, DiffResult, Side};
pub use map_diff::compare_maps;
pub use options::DiffOptions;
pub use record_diff::{compare_records, compare_records_with};
pub use seq_diff::compare_sequences;
