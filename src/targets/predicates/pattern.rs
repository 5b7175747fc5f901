// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::fmt;

use super::label;
use crate::errors::EvaluationError;
use crate::traits::ExampleTarget;
use crate::value::Value;

/// True when the whole input text matches a regular expression.
#[derive(Clone, Serialize)]
pub struct Regex {
    pattern: String,
    #[serde(skip)]
    compiled: Result<::regex::Regex, ::regex::Error>,
}

impl Regex {
    /// An invalid pattern is reported when the predicate is evaluated.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let compiled = ::regex::Regex::new(&format!("^(?:{pattern})$"));
        Self { pattern, compiled }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Regex")
            .field("pattern", &self.pattern)
            .finish()
    }
}

impl PartialEq for Regex {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl ExampleTarget for Regex {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn input_types(&self) -> Vec<&'static str> {
        vec![std::any::type_name::<String>()]
    }

    fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
        let compiled = self.compiled.as_ref().map_err(|error| {
            // Syntax errors span several lines; the last one names the problem.
            let detail = error.to_string();
            let reason = detail.lines().last().unwrap_or_default().trim().to_string();
            EvaluationError::invalid_argument(format!("invalid pattern {:?}: {}", self.pattern, reason))
        })?;
        if input.is_null() {
            return Ok(Value::from(false));
        }
        let text = input.as_text().ok_or_else(|| {
            EvaluationError::type_mismatch(format!(
                "regex can only match text, got {}",
                label(input)
            ))
        })?;
        Ok(Value::from(compiled.is_match(text)))
    }
}
