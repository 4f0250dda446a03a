//! Error types for the diff crate.

use std::fmt;

use serde::{Deserialize, Serialize};
use shapediff_types::ValueKind;

/// Which comparator input an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first input.
    Left,
    /// The second input.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Errors that can occur during a comparison. Any error aborts the whole
/// call; partial results are discarded.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// A handle input resolved to nil.
    #[error("{side} input is nil")]
    NilInput { side: Side },

    /// The input resolved to something other than a record.
    #[error("{side} input is not a record: got {kind}")]
    NotARecord { side: Side, kind: ValueKind },

    /// The input is not a mapping.
    #[error("{side} input is not a map: got {kind}")]
    NotAMap { side: Side, kind: ValueKind },

    /// The input is not a sequence.
    #[error("{side} input is not a sequence: got {kind}")]
    NotASequence { side: Side, kind: ValueKind },

    /// An exported field could not be exposed mid-walk.
    #[error("field {location} cannot be read on the {side} side")]
    UnreadableField { location: String, side: Side },

    /// Embedded records nest deeper than the configured limit.
    #[error("embedding deeper than {max_depth} levels at {location}")]
    DepthExceeded { location: String, max_depth: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
