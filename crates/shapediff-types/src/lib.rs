//! Foundation types for shapediff.
//!
//! This crate provides the value model and shape descriptions that the
//! comparison engine in `shapediff-diff` walks. Types that want to be compared
//! field by field implement [`Diffable`]; everything else is converted into a
//! dynamic [`Value`] through [`ToValue`].
//!
//! # Key Types
//!
//! - [`Value`] -- Tagged dynamic value (scalars, sequences, maps, records)
//! - [`MapKey`] -- Ordered scalar key of a [`Value::Map`]
//! - [`Diffable`] / [`Field`] -- Declared, ordered field list of a record type
//! - [`Record`] / [`RecordField`] -- Captured snapshot of a record's fields
//! - [`RecordRef`] / [`MapSource`] / [`SeqSource`] -- Input resolution for the comparators
//! - [`DiffEntry`] -- One observed discrepancy

pub mod convert;
pub mod entry;
pub mod error;
pub mod key;
pub mod record;
pub mod source;
pub mod value;

pub use convert::{ToMapKey, ToValue};
pub use entry::{DiffEntry, DiffKind};
pub use error::TypeError;
pub use key::MapKey;
pub use record::{Diffable, Field, Record, RecordField, Visibility};
pub use source::{MapSource, RecordRef, Resolved, SeqSource};
pub use value::{Value, ValueKind};
