//! Map-level diff: compare two key-value mappings.
//!
//! Keys present only in the first map produce entries with an absent right
//! side, keys present only in the second map produce entries with an absent
//! left side, and keys present in both with different values produce entries
//! with both sides set.

use std::borrow::Cow;
use std::collections::BTreeMap;

use shapediff_types::{DiffEntry, MapKey, MapSource, Resolved, Value, ValueKind};
use tracing::{debug, trace};

use crate::error::{DiffError, DiffResult, Side};

/// Compute the diff between two maps.
///
/// Entries for keys of `a` (matched or only in `a`) come first, followed by
/// entries for keys only in `b`. Both passes run in ascending key order, so
/// the output is deterministic. The location of each entry is the key's
/// display form.
pub fn compare_maps<M: MapSource + ?Sized>(a: &M, b: &M) -> DiffResult<Vec<DiffEntry>> {
    let left = resolve(a, Side::Left)?;
    let right = resolve(b, Side::Right)?;

    let mut entries = Vec::new();

    // Keys of the left map: removed or modified.
    for (key, left_val) in left.iter() {
        match right.get(key) {
            Some(right_val) => {
                if left_val != right_val {
                    trace!(%key, "value differs");
                    entries.push(DiffEntry::modified(
                        key.to_string(),
                        left_val.clone(),
                        right_val.clone(),
                    ));
                }
            }
            None => {
                trace!(%key, "key only in left map");
                entries.push(DiffEntry::removed(key.to_string(), left_val.clone()));
            }
        }
    }

    // Keys only in the right map: added.
    for (key, right_val) in right.iter() {
        if !left.contains_key(key) {
            trace!(%key, "key only in right map");
            entries.push(DiffEntry::added(key.to_string(), right_val.clone()));
        }
    }

    debug!(
        left_keys = left.len(),
        right_keys = right.len(),
        entries = entries.len(),
        "map comparison complete"
    );
    Ok(entries)
}

fn resolve<M: MapSource + ?Sized>(
    input: &M,
    side: Side,
) -> DiffResult<Cow<'_, BTreeMap<MapKey, Value>>> {
    match input.resolve_map() {
        Resolved::Found(map) => Ok(map),
        Resolved::Nil => Err(DiffError::NotAMap {
            side,
            kind: ValueKind::Null,
        }),
        Resolved::Mismatch(kind) => Err(DiffError::NotAMap { side, kind }),
    }
}
