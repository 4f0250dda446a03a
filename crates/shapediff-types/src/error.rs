use thiserror::Error;

use crate::value::ValueKind;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("a {kind} value cannot be used as a map key")]
    NotAMapKey { kind: ValueKind },
}
