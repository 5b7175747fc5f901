// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The three external forms of a target: native, JSON and python.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};
use std::any::type_name;

use super::python::to_python;
use super::runner::contain;
use crate::traits::ExampleTarget;

const CLASS_FIELD: &str = "class";

/// A target dumped as native (`Debug`), JSON and python text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedForms {
    pub native: String,
    pub json: String,
    pub python: String,
}

impl SerializedForms {
    /// Dump `target` in all three forms.
    ///
    /// A panic in the target's `Serialize` or `Debug` impl comes back as an
    /// error, like any other serialization failure.
    pub fn of(target: &dyn ExampleTarget) -> serde_json::Result<Self> {
        contain(|| Self::dump(target)).unwrap_or_else(|message| {
            Err(serde::ser::Error::custom(format!(
                "target panicked while serializing: {message}"
            )))
        })
    }

    fn dump(target: &dyn ExampleTarget) -> serde_json::Result<Self> {
        let tree = with_leading_class(target.class_name(), target.json_value()?);
        Ok(Self {
            native: target.native_form(),
            json: serde_json::to_string_pretty(&tree)?,
            python: to_python(&tree),
        })
    }
}

/// Put a `class` field first in a JSON object.
///
/// Unit-like values (serialized as `null`) become an object holding only the
/// class. Other non-object values are returned unchanged.
pub fn with_leading_class(class: &str, tree: JsonValue) -> JsonValue {
    match tree {
        JsonValue::Object(fields) => {
            let mut classed = Map::with_capacity(fields.len() + 1);
            classed.insert(CLASS_FIELD.to_string(), JsonValue::from(class));
            classed.extend(fields.into_iter().filter(|(key, _)| key != CLASS_FIELD));
            JsonValue::Object(classed)
        }
        JsonValue::Null => {
            let mut classed = Map::new();
            classed.insert(CLASS_FIELD.to_string(), JsonValue::from(class));
            JsonValue::Object(classed)
        }
        other => other,
    }
}

/// `serialize_with` helper for fields that hold a nested target.
///
/// The nested value gets its own `class` field, so the JSON and python
/// forms show it as a constructor rather than a bare map.
pub fn with_class<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    let tree = serde_json::to_value(value).map_err(serde::ser::Error::custom)?;
    with_leading_class(type_name::<T>(), tree).serialize(serializer)
}
