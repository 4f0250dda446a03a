//! Record-level diff: compare two values of the same record shape.
//!
//! Fields are walked in declaration order. Private fields are skipped,
//! embedded sub-records are flattened into the walk under a dotted prefix,
//! and every other differing field produces one entry.

use std::borrow::Cow;

use shapediff_types::{DiffEntry, Record, RecordRef, Resolved, Value, Visibility};
use tracing::{debug, trace};

use crate::error::{DiffError, DiffResult, Side};
use crate::options::DiffOptions;

/// Compare two records with default options.
///
/// Inputs may be typed records (`&T` where `T: Diffable`), smart pointers,
/// optional handles, or dynamic [`Value`]s. An empty list means no
/// differences.
pub fn compare_records<R: RecordRef>(a: R, b: R) -> DiffResult<Vec<DiffEntry>> {
    compare_records_with(a, b, &DiffOptions::default())
}

/// Compare two records.
///
/// The two inputs are assumed to share one shape; fields are paired by
/// position.
pub fn compare_records_with<R: RecordRef>(
    a: R,
    b: R,
    options: &DiffOptions,
) -> DiffResult<Vec<DiffEntry>> {
    let left = resolve(&a, Side::Left)?;
    let right = resolve(&b, Side::Right)?;

    let mut entries = Vec::new();
    walk_fields(&left, &right, "", 0, options, &mut entries)?;

    debug!(
        record = %left.type_name,
        entries = entries.len(),
        "record comparison complete"
    );
    Ok(entries)
}

fn resolve<R: RecordRef>(input: &R, side: Side) -> DiffResult<Cow<'_, Record>> {
    match input.resolve_record() {
        Resolved::Found(record) => Ok(record),
        Resolved::Nil => Err(DiffError::NilInput { side }),
        Resolved::Mismatch(kind) => Err(DiffError::NotARecord { side, kind }),
    }
}

fn walk_fields(
    left: &Record,
    right: &Record,
    prefix: &str,
    depth: usize,
    options: &DiffOptions,
    entries: &mut Vec<DiffEntry>,
) -> DiffResult<()> {
    for (lf, rf) in left.fields.iter().zip(&right.fields) {
        if lf.visibility == Visibility::Private {
            continue;
        }

        let location = format!("{prefix}{}", lf.name);
        let Some(lv) = lf.value.as_ref() else {
            return Err(DiffError::UnreadableField { location, side: Side::Left });
        };
        let Some(rv) = rf.value.as_ref() else {
            return Err(DiffError::UnreadableField { location, side: Side::Right });
        };

        if lv == rv {
            continue;
        }

        if lf.embedded {
            if let (Value::Record(li), Value::Record(ri)) = (lv, rv) {
                if depth >= options.max_depth {
                    return Err(DiffError::DepthExceeded {
                        location,
                        max_depth: options.max_depth,
                    });
                }
                let nested = format!("{location}{}", options.path_separator);
                walk_fields(li, ri, &nested, depth + 1, options, entries)?;
                continue;
            }
        }

        trace!(%location, "field differs");
        entries.push(DiffEntry::modified(location, lv.clone(), rv.clone()));
    }

    Ok(())
}
