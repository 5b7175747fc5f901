// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod comparison;
pub mod membership;
pub mod not;
pub mod pattern;

pub use comparison::*;
pub use membership::*;
pub use not::Not;
pub use pattern::Regex;

use std::cmp::Ordering;

use crate::errors::EvaluationError;
use crate::report::render;
use crate::value::Value;

/// Type label used in error messages; `null` for absent values.
fn label(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => render(other).type_label,
    }
}

fn compare_values(left: &Value, right: &Value) -> Result<Ordering, EvaluationError> {
    left.compare(right).ok_or_else(|| {
        EvaluationError::type_mismatch(format!(
            "cannot compare {} with {}",
            label(left),
            label(right)
        ))
    })
}

/// Split a two-component tuple input.
fn pair<'a>(input: &'a Value, target: &str) -> Result<(&'a Value, &'a Value), EvaluationError> {
    match input.as_tuple() {
        Some([first, second]) => Ok((first, second)),
        Some(items) => Err(EvaluationError::malformed_input(format!(
            "{} expects a tuple of 2 components but got {}",
            target,
            items.len()
        ))),
        None => Err(EvaluationError::malformed_input(format!(
            "{} expects a tuple of 2 components but got {}",
            target,
            label(input)
        ))),
    }
}
