// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::render::render;
use crate::errors::{EvaluationError, EvaluationErrorKind};
use crate::observability::messages::report::PanicRaised;
use crate::observability::messages::StructuredLog;
use crate::traits::ExampleTarget;
use crate::value::Value;

/// Outcome of evaluating a target against one sample input.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult {
    Success(Value),
    Failure(EvaluationError),
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success(_))
    }

    /// Text for the `Result` column.
    pub fn result_cell(&self) -> String {
        match self {
            ExecutionResult::Success(value) => render(value).display,
            ExecutionResult::Failure(error) => error.to_string(),
        }
    }
}

/// Runs a target against single inputs, containing every failure.
pub struct ExecutionRunner;

impl ExecutionRunner {
    /// Evaluate `target` on `input`.
    ///
    /// Errors returned by the target and panics raised inside it both come
    /// back as [`ExecutionResult::Failure`]; nothing propagates to the caller.
    pub fn run(target: &dyn ExampleTarget, input: &Value) -> ExecutionResult {
        match contain(|| target.evaluate(input)) {
            Ok(Ok(value)) => ExecutionResult::Success(value),
            Ok(Err(error)) => ExecutionResult::Failure(error),
            Err(message) => {
                ExecutionResult::Failure(EvaluationError::new(EvaluationErrorKind::Panic, message))
            }
        }
    }
}

/// Call into target code, turning a panic into its message.
pub(super) fn contain<T>(call: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(call)).map_err(|payload| panic_message(payload.as_ref()))
}

/// Route panic reports through tracing instead of the default stderr printer.
///
/// Panics inside targets are already contained and shown in their report, so
/// the hook only logs them as [`PanicRaised`] events.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|location| format!("{}:{}", location.file(), location.line()))
            .unwrap_or_else(|| "unknown location".to_string());
        PanicRaised {
            location: &location,
            message: &panic_message(info.payload()),
        }
        .log();
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "target panicked".to_string()
    }
}
