//! Conversions from Rust values into the dynamic [`Value`] model.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::key::MapKey;
use crate::record::Record;
use crate::value::Value;

/// Types that can be observed as a dynamic [`Value`].
///
/// Record types implement [`Diffable`](crate::Diffable) instead; to place a
/// record inside a collection, implement `ToValue` for it with
/// `Value::Record(Record::capture(self))`.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Types that can be used as the key of a [`Value::Map`].
pub trait ToMapKey {
    fn to_map_key(&self) -> MapKey;
}

macro_rules! signed_to_value {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }

            impl ToMapKey for $t {
                fn to_map_key(&self) -> MapKey {
                    MapKey::Int(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! unsigned_to_value {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value {
                    Value::Uint(u64::from(*self))
                }
            }

            impl ToMapKey for $t {
                fn to_map_key(&self) -> MapKey {
                    MapKey::Uint(u64::from(*self))
                }
            }
        )*
    };
}

signed_to_value!(i8, i16, i32, i64);
unsigned_to_value!(u8, u16, u32, u64);

impl ToValue for isize {
    fn to_value(&self) -> Value {
        Value::Int(*self as i64)
    }
}

impl ToMapKey for isize {
    fn to_map_key(&self) -> MapKey {
        MapKey::Int(*self as i64)
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value {
        Value::Uint(*self as u64)
    }
}

impl ToMapKey for usize {
    fn to_map_key(&self) -> MapKey {
        MapKey::Uint(*self as u64)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToMapKey for bool {
    fn to_map_key(&self) -> MapKey {
        MapKey::Bool(*self)
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToMapKey for char {
    fn to_map_key(&self) -> MapKey {
        MapKey::String(self.to_string())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToMapKey for str {
    fn to_map_key(&self) -> MapKey {
        MapKey::String(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToMapKey for String {
    fn to_map_key(&self) -> MapKey {
        MapKey::String(self.clone())
    }
}

impl ToMapKey for MapKey {
    fn to_map_key(&self) -> MapKey {
        self.clone()
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for Record {
    fn to_value(&self) -> Value {
        Value::Record(self.clone())
    }
}

impl ToValue for serde_json::Value {
    fn to_value(&self) -> Value {
        Value::from_json(self)
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToMapKey + ?Sized> ToMapKey for &T {
    fn to_map_key(&self) -> MapKey {
        (**self).to_map_key()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Rc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// `None` is a present nil, not an absent location.
impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<K: ToMapKey, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_map_key(), v.to_value()))
                .collect(),
        )
    }
}

impl<K: ToMapKey, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_map_key(), v.to_value()))
                .collect(),
        )
    }
}
