// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sample values fed to example targets.
//!
//! A [`Value`] is resolved once into one of four shapes, so nothing
//! downstream needs to inspect runtime types:
//!
//! * `Null` - an absent value
//! * `Scalar` - a single typed value
//! * `Record` - a keyed tuple, rendered whole like a scalar
//! * `Tuple` - an ordered sequence of values, rendered component by component

mod record;
mod scalar;

pub use record::Record;
pub use scalar::Scalar;

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, PartialEq)]
pub enum Value {
    Null,
    Scalar(Scalar),
    Record(Record),
    Tuple(Vec<Value>),
}

impl Value {
    pub fn tuple(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(items.into_iter().collect())
    }

    /// Wrap a value of any displayable type, labelled with its type name.
    pub fn custom<T: fmt::Display + ?Sized + 'static>(value: &T) -> Self {
        Value::Scalar(Scalar::custom(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Scalar(Scalar::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// Order two values. Only scalars of compatible kinds are comparable.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Scalar(left), Value::Scalar(right)) => left.compare(right),
            _ => None,
        }
    }

    /// Equality that lets numbers of different widths match (`5i32 == 5i64`).
    pub fn matches(&self, other: &Value) -> bool {
        self.compare(other) == Some(Ordering::Equal) || self == other
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Scalar(scalar) => scalar.is_truthy(),
            Value::Record(record) => !record.is_empty(),
            Value::Tuple(items) => !items.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Scalar(scalar) => write!(f, "{scalar}"),
            Value::Record(record) => write!(f, "{record}"),
            Value::Tuple(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Scalar(scalar) => fmt::Debug::fmt(scalar, f),
            Value::Record(record) => fmt::Debug::fmt(record, f),
            Value::Tuple(items) => f.debug_list().entries(items).finish(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Scalar(scalar) => scalar.serialize(serializer),
            Value::Record(record) => record.serialize(serializer),
            Value::Tuple(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Scalar(Scalar::Bool(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Scalar(Scalar::Int(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Scalar(Scalar::Long(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(Scalar::Float(v))
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Scalar(Scalar::Char(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Scalar(Scalar::Text(v.to_string()))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Scalar(Scalar::Text(v))
    }
}

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        Value::Scalar(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Tuple(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
