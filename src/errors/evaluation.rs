// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by example targets while evaluating a single sample input.
//!
//! These never abort a report. The execution runner turns each one into the
//! `Result` cell of the row that produced it, formatted as `Kind: message`.

use std::fmt;
use thiserror::Error;

/// Broad category of an evaluation failure, shown before the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationErrorKind {
    /// The input is well-formed but not acceptable to the target.
    InvalidArgument,
    /// The input (or a component of it) has a type the target cannot handle.
    TypeMismatch,
    /// A tuple input has the wrong arity or shape.
    MalformedInput,
    /// The target cannot be evaluated in-process at all.
    Unsupported,
    /// The toy graph rejected a mutation.
    Graph,
    /// The target panicked.
    Panic,
}

impl fmt::Display for EvaluationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EvaluationErrorKind::InvalidArgument => "InvalidArgument",
            EvaluationErrorKind::TypeMismatch => "TypeMismatch",
            EvaluationErrorKind::MalformedInput => "MalformedInput",
            EvaluationErrorKind::Unsupported => "Unsupported",
            EvaluationErrorKind::Graph => "GraphError",
            EvaluationErrorKind::Panic => "Panic",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct EvaluationError {
    kind: EvaluationErrorKind,
    message: String,
}

impl EvaluationError {
    pub fn new(kind: EvaluationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(EvaluationErrorKind::InvalidArgument, message)
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::new(EvaluationErrorKind::TypeMismatch, message)
    }

    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::new(EvaluationErrorKind::MalformedInput, message)
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(EvaluationErrorKind::Unsupported, message)
    }

    pub fn graph(message: impl Into<String>) -> Self {
        Self::new(EvaluationErrorKind::Graph, message)
    }

    pub fn kind(&self) -> EvaluationErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
