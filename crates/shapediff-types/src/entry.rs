use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One observed discrepancy between two compared inputs.
///
/// At least one side is present and the two sides are never deeply equal:
/// comparators only create an entry when a difference exists. `None` marks a
/// location that exists on one side only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffEntry {
    /// Dotted field path, mapping key, or sequence index.
    pub location: String,
    /// Value from the first input.
    pub left: Option<Value>,
    /// Value from the second input.
    pub right: Option<Value>,
}

/// Classification of a [`DiffEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiffKind {
    /// Present only in the second input.
    Added,
    /// Present only in the first input.
    Removed,
    /// Present in both with different values.
    Modified,
}

impl DiffEntry {
    /// Present on both sides with different values.
    pub fn modified(location: impl Into<String>, left: Value, right: Value) -> Self {
        Self {
            location: location.into(),
            left: Some(left),
            right: Some(right),
        }
    }

    /// Present only in the first input.
    pub fn removed(location: impl Into<String>, left: Value) -> Self {
        Self {
            location: location.into(),
            left: Some(left),
            right: None,
        }
    }

    /// Present only in the second input.
    pub fn added(location: impl Into<String>, right: Value) -> Self {
        Self {
            location: location.into(),
            left: None,
            right: Some(right),
        }
    }

    pub fn kind(&self) -> DiffKind {
        match (&self.left, &self.right) {
            (None, _) => DiffKind::Added,
            (_, None) => DiffKind::Removed,
            _ => DiffKind::Modified,
        }
    }
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.location)?;
        match &self.left {
            Some(v) => write!(f, "{v}")?,
            None => f.write_str("<absent>")?,
        }
        f.write_str(" -> ")?;
        match &self.right {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("<absent>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::MapKey;
    use crate::record::{Record, RecordField};

    #[test]
    fn kinds() {
        let s = |v: &str| Value::String(v.into());
        assert_eq!(DiffEntry::added("k", s("v")).kind(), DiffKind::Added);
        assert_eq!(DiffEntry::removed("k", s("v")).kind(), DiffKind::Removed);
        assert_eq!(DiffEntry::modified("k", s("a"), s("b")).kind(), DiffKind::Modified);
    }

    #[test]
    fn display_marks_absent_side() {
        let entry = DiffEntry::removed("key3", Value::String("val3".into()));
        assert_eq!(entry.to_string(), "key3: \"val3\" -> <absent>");
    }

    #[test]
    fn serializes_absent_as_null() {
        let entry = DiffEntry::added("port", Value::Uint(8080));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"location": "port", "left": null, "right": {"Uint": 8080}})
        );
        let back: DiffEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn map_and_record_values_round_trip_through_json() {
        let metadata = Value::Map(
            [(MapKey::from("key3"), Value::String("arg3".into()))]
                .into_iter()
                .collect(),
        );
        let entry = DiffEntry::modified("Config.Metadata", metadata, Value::Map(Default::default()));
        let text = serde_json::to_string(&entry).unwrap();
        let back: DiffEntry = serde_json::from_str(&text).unwrap();
        assert_eq!(back, entry);

        let record = Record::new("Config")
            .with_field(RecordField::exported("Labels", entry.left.clone().unwrap()))
            .with_field(RecordField::unreadable("Lock", crate::record::Visibility::Private));
        let entry = DiffEntry::removed("Config", Value::Record(record));
        let text = serde_json::to_string(&entry).unwrap();
        let back: DiffEntry = serde_json::from_str(&text).unwrap();
        assert_eq!(back, entry);
    }
}
