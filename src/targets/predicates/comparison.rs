// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::any::type_name;
use std::cmp::Ordering;

use super::{compare_values, pair};
use crate::errors::EvaluationError;
use crate::traits::ExampleTarget;
use crate::value::Value;

/// Declared input type of a comparison against `value`.
fn comparable_type(value: &Value) -> Vec<&'static str> {
    match value {
        Value::Scalar(scalar) => vec![scalar.type_name()],
        _ => Vec::new(),
    }
}

/// True when the input is greater than the control value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsMoreThan {
    value: Value,
    or_equal_to: bool,
}

impl IsMoreThan {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            or_equal_to: false,
        }
    }

    pub fn or_equal_to(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            or_equal_to: true,
        }
    }
}

impl ExampleTarget for IsMoreThan {
    fn name(&self) -> &'static str {
        "is_more_than"
    }

    fn input_types(&self) -> Vec<&'static str> {
        comparable_type(&self.value)
    }

    fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
        if input.is_null() {
            return Ok(Value::from(false));
        }
        let ordering = compare_values(input, &self.value)?;
        Ok(Value::from(
            ordering == Ordering::Greater || (self.or_equal_to && ordering == Ordering::Equal),
        ))
    }
}

/// True when the input is less than the control value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsLessThan {
    value: Value,
    or_equal_to: bool,
}

impl IsLessThan {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            or_equal_to: false,
        }
    }

    pub fn or_equal_to(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            or_equal_to: true,
        }
    }
}

impl ExampleTarget for IsLessThan {
    fn name(&self) -> &'static str {
        "is_less_than"
    }

    fn input_types(&self) -> Vec<&'static str> {
        comparable_type(&self.value)
    }

    fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
        if input.is_null() {
            return Ok(Value::from(false));
        }
        let ordering = compare_values(input, &self.value)?;
        Ok(Value::from(
            ordering == Ordering::Less || (self.or_equal_to && ordering == Ordering::Equal),
        ))
    }
}

/// True when the input equals the control value.
///
/// Numbers of different widths are equal when their values are.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsEqual {
    value: Value,
}

impl IsEqual {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl ExampleTarget for IsEqual {
    fn name(&self) -> &'static str {
        "is_equal"
    }

    fn input_types(&self) -> Vec<&'static str> {
        vec![type_name::<Value>()]
    }

    fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
        Ok(Value::from(input.matches(&self.value)))
    }
}

/// True when both components of a `[x, y]` tuple are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AreEqual;

impl ExampleTarget for AreEqual {
    fn name(&self) -> &'static str {
        "are_equal"
    }

    fn input_types(&self) -> Vec<&'static str> {
        vec![type_name::<Value>(), type_name::<Value>()]
    }

    fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
        let (first, second) = pair(input, "AreEqual")?;
        Ok(Value::from(first.matches(second)))
    }
}

/// True when `x` is greater than `y` in a `[x, y]` tuple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IsXMoreThanY;

impl ExampleTarget for IsXMoreThanY {
    fn name(&self) -> &'static str {
        "is_x_more_than_y"
    }

    fn input_types(&self) -> Vec<&'static str> {
        vec![type_name::<Value>(), type_name::<Value>()]
    }

    fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
        let (x, y) = pair(input, "IsXMoreThanY")?;
        if x.is_null() || y.is_null() {
            return Ok(Value::from(false));
        }
        Ok(Value::from(compare_values(x, y)? == Ordering::Greater))
    }
}
