// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::any::type_name;

use super::label;
use crate::errors::EvaluationError;
use crate::traits::ExampleTarget;
use crate::value::Value;

/// True when the input matches one of the allowed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsIn {
    values: Vec<Value>,
}

impl IsIn {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl ExampleTarget for IsIn {
    fn name(&self) -> &'static str {
        "is_in"
    }

    fn input_types(&self) -> Vec<&'static str> {
        vec![type_name::<Value>()]
    }

    fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
        Ok(Value::from(self.values.iter().any(|allowed| input.matches(allowed))))
    }
}

/// True for any non-null input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Exists;

impl ExampleTarget for Exists {
    fn name(&self) -> &'static str {
        "exists"
    }

    fn input_types(&self) -> Vec<&'static str> {
        vec![type_name::<Value>()]
    }

    fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
        Ok(Value::from(!input.is_null()))
    }
}

/// True when the input's type label is exactly `type_name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsA {
    type_name: String,
}

impl IsA {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    /// Match values whose Rust type is `T`.
    pub fn of<T: ?Sized>() -> Self {
        Self::new(type_name::<T>())
    }
}

impl ExampleTarget for IsA {
    fn name(&self) -> &'static str {
        "is_a"
    }

    fn input_types(&self) -> Vec<&'static str> {
        vec![type_name::<Value>()]
    }

    fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
        if input.is_null() {
            return Ok(Value::from(false));
        }
        Ok(Value::from(label(input) == self.type_name))
    }
}

/// Truthiness: `true`, non-zero numbers, non-empty text and collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IsTrue;

impl ExampleTarget for IsTrue {
    fn name(&self) -> &'static str {
        "is_true"
    }

    fn input_types(&self) -> Vec<&'static str> {
        vec![type_name::<Value>()]
    }

    fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
        Ok(Value::from(input.is_truthy()))
    }
}
