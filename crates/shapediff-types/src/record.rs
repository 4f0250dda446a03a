//! Record shapes: the declared field list of a struct-like type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::ToValue;
use crate::value::Value;

/// Whether a field is part of a record's externally visible contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Exported,
    Private,
}

/// A type whose values can be compared field by field.
///
/// `fields` must return every field of the type, private ones included, in
/// declaration order. Two values of the same type must always return the
/// same list of names, visibilities and slot kinds; the comparator pairs
/// fields by position.
///
/// ```
/// use shapediff_types::{Diffable, Field};
///
/// struct Endpoint {
///     host: String,
///     port: u16,
///     retries: u32,
/// }
///
/// impl Diffable for Endpoint {
///     fn type_name(&self) -> &'static str {
///         "Endpoint"
///     }
///
///     fn fields(&self) -> Vec<Field<'_>> {
///         vec![
///             Field::new("Host", &self.host),
///             Field::new("Port", &self.port),
///             Field::private("retries", &self.retries),
///         ]
///     }
/// }
/// ```
pub trait Diffable {
    fn type_name(&self) -> &'static str;

    fn fields(&self) -> Vec<Field<'_>>;
}

/// One declared field of a [`Diffable`] value.
pub struct Field<'a> {
    name: &'static str,
    visibility: Visibility,
    slot: Slot<'a>,
}

enum Slot<'a> {
    Value(&'a dyn ToValue),
    Record(&'a dyn Diffable),
    Embedded(Option<&'a dyn Diffable>),
    Unreadable,
}

impl<'a> Field<'a> {
    /// An exported leaf field.
    pub fn new(name: &'static str, value: &'a dyn ToValue) -> Self {
        Self {
            name,
            visibility: Visibility::Exported,
            slot: Slot::Value(value),
        }
    }

    /// A private leaf field. Never reported, but part of deep equality.
    pub fn private(name: &'static str, value: &'a dyn ToValue) -> Self {
        Self {
            name,
            visibility: Visibility::Private,
            slot: Slot::Value(value),
        }
    }

    /// An exported field holding a named sub-record, compared as one leaf.
    pub fn record(name: &'static str, record: &'a dyn Diffable) -> Self {
        Self {
            name,
            visibility: Visibility::Exported,
            slot: Slot::Record(record),
        }
    }

    /// An embedded sub-record whose fields are flattened into the parent.
    pub fn embedded(name: &'static str, record: &'a dyn Diffable) -> Self {
        Self {
            name,
            visibility: Visibility::Exported,
            slot: Slot::Embedded(Some(record)),
        }
    }

    /// An embedded sub-record behind an optional handle. A `None` handle is
    /// observed as [`Value::Null`].
    pub fn embedded_opt<T: Diffable>(name: &'static str, record: Option<&'a T>) -> Self {
        Self {
            name,
            visibility: Visibility::Exported,
            slot: Slot::Embedded(record.map(|r| r as &dyn Diffable)),
        }
    }

    /// A field whose value cannot be exposed to a comparator.
    pub fn unreadable(name: &'static str, visibility: Visibility) -> Self {
        Self {
            name,
            visibility,
            slot: Slot::Unreadable,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self.slot, Slot::Embedded(_))
    }

    /// Snapshot this field, descending into sub-records.
    pub fn capture(&self) -> RecordField {
        let value = match &self.slot {
            Slot::Value(v) => Some(v.to_value()),
            Slot::Record(r) | Slot::Embedded(Some(r)) => Some(Value::Record(Record::capture(*r))),
            Slot::Embedded(None) => Some(Value::Null),
            Slot::Unreadable => None,
        };
        RecordField {
            name: self.name.to_owned(),
            visibility: self.visibility,
            embedded: self.is_embedded(),
            value,
        }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("embedded", &self.is_embedded())
            .finish()
    }
}

/// Captured snapshot of a record value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Name of the record type.
    pub type_name: String,
    /// All fields in declaration order, private ones included.
    pub fields: Vec<RecordField>,
}

/// One captured field of a [`Record`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordField {
    pub name: String,
    pub visibility: Visibility,
    /// Set for embedded sub-records flattened into the parent.
    pub embedded: bool,
    /// `None` when the field could not be exposed.
    pub value: Option<Value>,
}

impl Record {
    /// Create an empty record of the named type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field (builder style).
    pub fn with_field(mut self, field: RecordField) -> Self {
        self.fields.push(field);
        self
    }

    /// Snapshot a [`Diffable`] value, including its private fields.
    pub fn capture<T: Diffable + ?Sized>(record: &T) -> Self {
        Self {
            type_name: record.type_name().to_owned(),
            fields: record.fields().iter().map(Field::capture).collect(),
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&RecordField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl RecordField {
    pub fn exported(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Exported,
            embedded: false,
            value: Some(value),
        }
    }

    pub fn private(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Private,
            embedded: false,
            value: Some(value),
        }
    }

    pub fn embedded(name: impl Into<String>, record: Record) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Exported,
            embedded: true,
            value: Some(Value::Record(record)),
        }
    }

    pub fn unreadable(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            embedded: false,
            value: None,
        }
    }

    pub fn is_exported(&self) -> bool {
        self.visibility == Visibility::Exported
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.type_name)?;
        for (i, field) in self.fields.iter().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            match &field.value {
                Some(v) => write!(f, "{}: {v}", field.name)?,
                None => write!(f, "{}: <unreadable>", field.name)?,
            }
        }
        if self.fields.is_empty() {
            f.write_str("}")
        } else {
            f.write_str(" }")
        }
    }
}
