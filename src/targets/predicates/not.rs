// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::fmt::Debug;

use crate::errors::EvaluationError;
use crate::report::with_class;
use crate::traits::ExampleTarget;
use crate::value::Value;

/// Negates the boolean result of the wrapped predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "P: Serialize")]
pub struct Not<P> {
    #[serde(serialize_with = "with_class")]
    predicate: P,
}

impl<P> Not<P> {
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<P> ExampleTarget for Not<P>
where
    P: ExampleTarget + Serialize + Debug,
{
    fn name(&self) -> &'static str {
        "not"
    }

    fn input_types(&self) -> Vec<&'static str> {
        self.predicate.input_types()
    }

    fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
        let result = self.predicate.evaluate(input)?;
        result.as_bool().map(|b| Value::from(!b)).ok_or_else(|| {
            EvaluationError::type_mismatch(format!(
                "{} did not return a boolean",
                self.predicate.name()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvaluationErrorKind;
    use crate::report::SerializedForms;
    use crate::targets::predicates::{Exists, IsA, IsMoreThan};

    #[test]
    fn test_negates_result() {
        let predicate = Not::new(IsA::of::<String>());
        assert_eq!(predicate.evaluate(&Value::from(1)), Ok(Value::from(true)));
        assert_eq!(predicate.evaluate(&Value::from("a")), Ok(Value::from(false)));
    }

    #[test]
    fn test_inner_error_is_propagated() {
        let error = Not::new(IsMoreThan::new(1))
            .evaluate(&Value::from("a"))
            .unwrap_err();
        assert_eq!(error.kind(), EvaluationErrorKind::TypeMismatch);
    }

    #[test]
    fn test_signature_is_delegated() {
        assert_eq!(Not::new(IsMoreThan::new(1)).input_types(), vec!["i32"]);
    }

    #[test]
    fn test_nested_predicate_has_its_own_class() {
        let forms = SerializedForms::of(&Not::new(Exists)).unwrap();
        assert!(forms.json.contains("\"class\": \"opdoc::targets::predicates::membership::Exists\""));
        assert_eq!(forms.python, "g.Not(\n  predicate=g.Exists()\n)");
    }
}
