//! Sequence-level diff: index-aligned comparison of two sequences.
//!
//! Element `i` of the first sequence is compared with element `i` of the
//! second. No alignment is attempted, so an insertion near the front reports
//! every later position as modified.

use std::borrow::Cow;

use shapediff_types::{DiffEntry, Resolved, SeqSource, Value, ValueKind};
use tracing::{debug, trace};

use crate::error::{DiffError, DiffResult, Side};

/// Compare two sequences position by position.
///
/// Positions below the shorter length produce an entry when their elements
/// differ. Trailing elements of the longer sequence produce one-sided
/// entries. Locations are decimal indices.
pub fn compare_sequences<S: SeqSource + ?Sized>(a: &S, b: &S) -> DiffResult<Vec<DiffEntry>> {
    let left = resolve(a, Side::Left)?;
    let right = resolve(b, Side::Right)?;

    let mut entries = Vec::new();
    for (index, (l, r)) in left.iter().zip(right.iter()).enumerate() {
        if l != r {
            trace!(location = %index, "element differs");
            entries.push(DiffEntry::modified(index.to_string(), l.clone(), r.clone()));
        }
    }

    let shared = left.len().min(right.len());
    for (index, l) in left.iter().enumerate().skip(shared) {
        trace!(location = %index, "element only in left sequence");
        entries.push(DiffEntry::removed(index.to_string(), l.clone()));
    }
    for (index, r) in right.iter().enumerate().skip(shared) {
        trace!(location = %index, "element only in right sequence");
        entries.push(DiffEntry::added(index.to_string(), r.clone()));
    }

    debug!(
        left_len = left.len(),
        right_len = right.len(),
        entries = entries.len(),
        "sequence comparison complete"
    );
    Ok(entries)
}

fn resolve<S: SeqSource + ?Sized>(input: &S, side: Side) -> DiffResult<Cow<'_, [Value]>> {
    match input.resolve_seq() {
        Resolved::Found(items) => Ok(items),
        Resolved::Nil => Err(DiffError::NotASequence {
            side,
            kind: ValueKind::Null,
        }),
        Resolved::Mismatch(kind) => Err(DiffError::NotASequence { side, kind }),
    }
}
