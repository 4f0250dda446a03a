//! Input resolution for the comparators.
//!
//! Each comparator accepts anything that can resolve to its shape: typed
//! records and collections are captured into owned snapshots, dynamic
//! [`Value`] inputs are borrowed as-is.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::convert::{ToMapKey, ToValue};
use crate::key::MapKey;
use crate::record::{Diffable, Record};
use crate::value::{Value, ValueKind};

/// Outcome of resolving a comparator input.
pub enum Resolved<'a, T: ToOwned + ?Sized + 'a> {
    /// The input has the requested shape.
    Found(Cow<'a, T>),
    /// The input is a nil handle or a null value.
    Nil,
    /// The input holds a value of another shape.
    Mismatch(ValueKind),
}

impl<T> fmt::Debug for Resolved<'_, T>
where
    T: ToOwned + fmt::Debug + ?Sized,
    T::Owned: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(inner) => f.debug_tuple("Found").field(inner).finish(),
            Self::Nil => f.write_str("Nil"),
            Self::Mismatch(kind) => f.debug_tuple("Mismatch").field(kind).finish(),
        }
    }
}

fn nil_or_mismatch<'a, T: ToOwned + ?Sized + 'a>(value: &Value) -> Resolved<'a, T> {
    match value {
        Value::Null => Resolved::Nil,
        other => Resolved::Mismatch(other.kind()),
    }
}

/// A record, or a reference-like handle to one.
pub trait RecordRef {
    fn resolve_record(&self) -> Resolved<'_, Record>;
}

impl<T: Diffable + ?Sized> RecordRef for &T {
    fn resolve_record(&self) -> Resolved<'_, Record> {
        Resolved::Found(Cow::Owned(Record::capture(*self)))
    }
}

impl<T: Diffable + ?Sized> RecordRef for Box<T> {
    fn resolve_record(&self) -> Resolved<'_, Record> {
        Resolved::Found(Cow::Owned(Record::capture(&**self)))
    }
}

impl<T: Diffable + ?Sized> RecordRef for Rc<T> {
    fn resolve_record(&self) -> Resolved<'_, Record> {
        Resolved::Found(Cow::Owned(Record::capture(&**self)))
    }
}

impl<T: Diffable + ?Sized> RecordRef for Arc<T> {
    fn resolve_record(&self) -> Resolved<'_, Record> {
        Resolved::Found(Cow::Owned(Record::capture(&**self)))
    }
}

/// `None` is a nil handle.
impl<R: RecordRef> RecordRef for Option<R> {
    fn resolve_record(&self) -> Resolved<'_, Record> {
        match self {
            Some(inner) => inner.resolve_record(),
            None => Resolved::Nil,
        }
    }
}

impl RecordRef for &Record {
    fn resolve_record(&self) -> Resolved<'_, Record> {
        Resolved::Found(Cow::Borrowed(*self))
    }
}

impl RecordRef for &Value {
    fn resolve_record(&self) -> Resolved<'_, Record> {
        match self {
            Value::Record(record) => Resolved::Found(Cow::Borrowed(record)),
            other => nil_or_mismatch(other),
        }
    }
}

/// A key-value mapping.
pub trait MapSource {
    fn resolve_map(&self) -> Resolved<'_, BTreeMap<MapKey, Value>>;
}

impl<K: ToMapKey, V: ToValue, S> MapSource for HashMap<K, V, S> {
    fn resolve_map(&self) -> Resolved<'_, BTreeMap<MapKey, Value>> {
        Resolved::Found(Cow::Owned(
            self.iter()
                .map(|(k, v)| (k.to_map_key(), v.to_value()))
                .collect(),
        ))
    }
}

impl<K: ToMapKey, V: ToValue> MapSource for BTreeMap<K, V> {
    fn resolve_map(&self) -> Resolved<'_, BTreeMap<MapKey, Value>> {
        Resolved::Found(Cow::Owned(
            self.iter()
                .map(|(k, v)| (k.to_map_key(), v.to_value()))
                .collect(),
        ))
    }
}

impl MapSource for Value {
    fn resolve_map(&self) -> Resolved<'_, BTreeMap<MapKey, Value>> {
        match self {
            Value::Map(map) => Resolved::Found(Cow::Borrowed(map)),
            other => nil_or_mismatch(other),
        }
    }
}

/// `None` resolves as nil, so the two sides of a
/// [`DiffEntry`](crate::DiffEntry) can be fed straight back into a comparator.
impl<M: MapSource> MapSource for Option<M> {
    fn resolve_map(&self) -> Resolved<'_, BTreeMap<MapKey, Value>> {
        match self {
            Some(inner) => inner.resolve_map(),
            None => Resolved::Nil,
        }
    }
}

/// An ordered sequence.
pub trait SeqSource {
    fn resolve_seq(&self) -> Resolved<'_, [Value]>;
}

impl<T: ToValue> SeqSource for [T] {
    fn resolve_seq(&self) -> Resolved<'_, [Value]> {
        Resolved::Found(Cow::Owned(self.iter().map(ToValue::to_value).collect()))
    }
}

impl<T: ToValue> SeqSource for Vec<T> {
    fn resolve_seq(&self) -> Resolved<'_, [Value]> {
        self.as_slice().resolve_seq()
    }
}

impl<T: ToValue> SeqSource for VecDeque<T> {
    fn resolve_seq(&self) -> Resolved<'_, [Value]> {
        Resolved::Found(Cow::Owned(self.iter().map(ToValue::to_value).collect()))
    }
}

impl SeqSource for Value {
    fn resolve_seq(&self) -> Resolved<'_, [Value]> {
        match self {
            Value::Seq(items) => Resolved::Found(Cow::Borrowed(items.as_slice())),
            other => nil_or_mismatch(other),
        }
    }
}

impl<S: SeqSource> SeqSource for Option<S> {
    fn resolve_seq(&self) -> Resolved<'_, [Value]> {
        match self {
            Some(inner) => inner.resolve_seq(),
            None => Resolved::Nil,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;

    struct Probe {
        state: String,
    }

    impl Diffable for Probe {
        fn type_name(&self) -> &'static str {
            "Probe"
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![Field::new("State", &self.state)]
        }
    }

    fn probe() -> Probe {
        Probe { state: "up".into() }
    }

    #[test]
    fn typed_record_is_captured() {
        let p = probe();
        match (&p).resolve_record() {
            Resolved::Found(record) => assert_eq!(record.type_name, "Probe"),
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn smart_pointers_resolve() {
        assert!(matches!(Box::new(probe()).resolve_record(), Resolved::Found(_)));
        assert!(matches!(Rc::new(probe()).resolve_record(), Resolved::Found(_)));
        assert!(matches!(Arc::new(probe()).resolve_record(), Resolved::Found(_)));
    }

    #[test]
    fn none_handle_is_nil() {
        let handle: Option<&Probe> = None;
        assert!(matches!(handle.resolve_record(), Resolved::Nil));
    }

    #[test]
    fn dynamic_record_is_borrowed() {
        let value = Value::Record(Record::capture(&probe()));
        assert!(matches!((&value).resolve_record(), Resolved::Found(Cow::Borrowed(_))));
    }

    #[test]
    fn dynamic_non_record_is_mismatch() {
        let value = Value::Int(3);
        assert!(matches!(
            (&value).resolve_record(),
            Resolved::Mismatch(ValueKind::Int)
        ));
        assert!(matches!((&Value::Null).resolve_record(), Resolved::Nil));
    }

    #[test]
    fn hash_map_resolves_to_sorted_map() {
        let map: HashMap<&str, &str> = [("b", "2"), ("a", "1")].into_iter().collect();
        let Resolved::Found(resolved) = map.resolve_map() else {
            panic!("expected map");
        };
        assert_eq!(resolved.keys().next(), Some(&MapKey::from("a")));
    }

    #[test]
    fn non_map_value_is_mismatch() {
        assert!(matches!(
            Value::String("x".into()).resolve_map(),
            Resolved::Mismatch(ValueKind::String)
        ));
        assert!(matches!(None::<Value>.resolve_map(), Resolved::Nil));
    }

    #[test]
    fn sequences_resolve() {
        let items = vec!["a", "b"];
        let Resolved::Found(resolved) = items.resolve_seq() else {
            panic!("expected seq");
        };
        assert_eq!(resolved.len(), 2);
        assert!(matches!(
            Value::Bool(true).resolve_seq(),
            Resolved::Mismatch(ValueKind::Bool)
        ));
    }
}
