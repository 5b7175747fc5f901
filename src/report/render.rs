// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Value rendering for the `Type` and `Input` columns.
//!
//! Rendering is total: every [`Value`] produces a cell, including nulls and
//! empty tuples.

use std::any::type_name;

use crate::value::{Record, Value};

/// A displayable `(type label, display string)` pair.
///
/// The type label is empty only for null values; the display string is never
/// empty for them (`"null"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    pub type_label: String,
    pub display: String,
}

impl RenderedCell {
    pub fn new(type_label: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            type_label: type_label.into(),
            display: display.into(),
        }
    }

    pub fn null() -> Self {
        Self::new("", "null")
    }
}

pub fn render(value: &Value) -> RenderedCell {
    match value {
        Value::Null => RenderedCell::null(),
        Value::Scalar(scalar) => RenderedCell::new(scalar.type_name(), scalar.to_string()),
        // Keyed tuples stay whole
        Value::Record(record) => RenderedCell::new(type_name::<Record>(), record.to_string()),
        Value::Tuple(items) => render_tuple(items),
    }
}

/// Render a tuple component by component.
///
/// Labels and display strings are joined separately but stay positionally
/// aligned: a null component contributes an empty label segment.
pub fn render_tuple(items: &[Value]) -> RenderedCell {
    let cells: Vec<RenderedCell> = items.iter().map(render).collect();

    let labels = cells
        .iter()
        .map(|cell| cell.type_label.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let displays = cells
        .iter()
        .map(|cell| cell.display.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    RenderedCell::new(format!("[{labels}]"), format!("[{displays}]"))
}
