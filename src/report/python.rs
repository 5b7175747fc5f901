// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Python shell form of a serialized target.
//!
//! Objects carrying a `class` field become `g.ShortName(field=value, ...)`
//! constructor calls; null fields are left out. Everything else maps onto the
//! matching python literal.

use serde_json::{Map, Value as JsonValue};

use super::consts::PYTHON_MODULE_ALIAS;

const INDENT: usize = 2;

pub fn to_python(tree: &JsonValue) -> String {
    let mut out = String::new();
    write_value(&mut out, tree, 0);
    out
}

fn write_value(out: &mut String, value: &JsonValue, indent: usize) {
    match value {
        JsonValue::Null => out.push_str("None"),
        JsonValue::Bool(true) => out.push_str("True"),
        JsonValue::Bool(false) => out.push_str("False"),
        JsonValue::Number(number) => out.push_str(&number.to_string()),
        JsonValue::String(text) => out.push_str(&quote(text)),
        JsonValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item, indent);
            }
            out.push(']');
        }
        JsonValue::Object(fields) => match fields.get("class").and_then(JsonValue::as_str) {
            Some(class) => write_constructor(out, class, fields, indent),
            None => write_dict(out, fields, indent),
        },
    }
}

fn write_constructor(out: &mut String, class: &str, fields: &Map<String, JsonValue>, indent: usize) {
    let arguments: Vec<(&String, &JsonValue)> = fields
        .iter()
        .filter(|(key, value)| key.as_str() != "class" && !value.is_null())
        .collect();

    out.push_str(PYTHON_MODULE_ALIAS);
    out.push('.');
    out.push_str(short_class_name(class));
    out.push('(');
    if arguments.is_empty() {
        out.push(')');
        return;
    }

    out.push('\n');
    for (i, (key, value)) in arguments.iter().enumerate() {
        out.push_str(&" ".repeat(indent + INDENT));
        out.push_str(key);
        out.push('=');
        write_value(out, value, indent + INDENT);
        if i + 1 < arguments.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(&" ".repeat(indent));
    out.push(')');
}

fn write_dict(out: &mut String, fields: &Map<String, JsonValue>, indent: usize) {
    out.push('{');
    for (i, (key, value)) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&quote(key));
        out.push_str(": ");
        write_value(out, value, indent);
    }
    out.push('}');
}

/// `a::b::Not<a::b::IsA>` -> `Not`
fn short_class_name(class: &str) -> &str {
    let without_generics = class.split('<').next().unwrap_or(class);
    without_generics.rsplit("::").next().unwrap_or(without_generics)
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    quoted
}
