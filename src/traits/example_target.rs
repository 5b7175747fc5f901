// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::fmt::Debug;

use crate::errors::EvaluationError;
use crate::value::Value;

/// Capability to dump a target in its external textual forms.
///
/// Blanket-implemented for every `Serialize + Debug` type, so targets get it
/// by deriving those two traits.
pub trait SerializedForm {
    /// Pretty `Debug` output, the form a Rust caller would recognise.
    fn native_form(&self) -> String;

    /// The target as a JSON tree, before any `class` field is added.
    fn json_value(&self) -> serde_json::Result<serde_json::Value>;
}

impl<T: Serialize + Debug> SerializedForm for T {
    fn native_form(&self) -> String {
        format!("{self:#?}")
    }

    fn json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// An operation or predicate that can be documented by example.
pub trait ExampleTarget: SerializedForm + Send + Sync {
    fn name(&self) -> &'static str;

    /// Fully-qualified type name, used as the `class` of the JSON form.
    fn class_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Declared input types, one per positional tuple component.
    ///
    /// An empty list means the target has no resolvable signature.
    fn input_types(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Evaluate the target against one sample input.
    fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError>;
}
