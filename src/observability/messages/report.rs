// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for report building events.
//!
//! This module contains message types for logging events related to:
//! * Report lifecycle (start, completion)
//! * Per-row evaluation failures
//! * Signature and serialization fallbacks

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Report building started.
///
/// # Log Level
/// `debug!` - Routine event, one per example
pub struct ReportStarted<'a> {
    pub target: &'a str,
    pub example: &'a str,
    pub input_count: usize,
}

impl Display for ReportStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Building report '{}' for target '{}': {} sample inputs",
            self.example, self.target, self.input_count
        )
    }
}

impl StructuredLog for ReportStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            target_name = self.target,
            example = self.example,
            input_count = self.input_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "report",
            span_name = name,
            target_name = self.target,
            example = self.example,
            input_count = self.input_count,
        )
    }
}

/// Report building completed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use opdoc::observability::messages::report::ReportCompleted;
/// use std::time::Duration;
///
/// let msg = ReportCompleted {
///     target: "is_more_than",
///     example: "is_more_than_5",
///     row_count: 4,
///     failure_count: 1,
///     duration: Duration::from_millis(2),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ReportCompleted<'a> {
    pub target: &'a str,
    pub example: &'a str,
    pub row_count: usize,
    pub failure_count: usize,
    pub duration: std::time::Duration,
}

impl Display for ReportCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Report '{}' for target '{}' completed: rows={}, failures={}, duration={:?}",
            self.example, self.target, self.row_count, self.failure_count, self.duration
        )
    }
}

impl StructuredLog for ReportCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            target_name = self.target,
            example = self.example,
            row_count = self.row_count,
            failure_count = self.failure_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "report_completed",
            span_name = name,
            target_name = self.target,
            example = self.example,
            row_count = self.row_count,
            duration = ?self.duration,
        )
    }
}

/// A sample input failed to evaluate. The row still renders.
///
/// # Log Level
/// `debug!` - Expected in documentation; failures are part of the examples
pub struct SampleEvaluationFailed<'a> {
    pub target: &'a str,
    pub row: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for SampleEvaluationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Target '{}' failed on sample input {}: {}",
            self.target, self.row, self.error
        )
    }
}

impl StructuredLog for SampleEvaluationFailed<'_> {
    fn log(&self) {
        tracing::debug!(
            target_name = self.target,
            row = self.row,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "sample_evaluation_failed",
            span_name = name,
            target_name = self.target,
            row = self.row,
        )
    }
}

/// Target has no usable input signature; a placeholder is rendered.
///
/// # Log Level
/// `warn!` - Degraded output
pub struct SignatureUnavailable<'a> {
    pub target: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for SignatureUnavailable<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Input signature of '{}' unavailable, rendering placeholder: {}",
            self.target, self.error
        )
    }
}

impl StructuredLog for SignatureUnavailable<'_> {
    fn log(&self) {
        tracing::warn!(target_name = self.target, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("signature_unavailable", span_name = name, target_name = self.target)
    }
}

/// Target could not be serialized; a placeholder is rendered.
///
/// # Log Level
/// `warn!` - Degraded output
pub struct SerializationFailed<'a> {
    pub target: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for SerializationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Target '{}' could not be serialized, rendering placeholder: {}",
            self.target, self.error
        )
    }
}

impl StructuredLog for SerializationFailed<'_> {
    fn log(&self) {
        tracing::warn!(target_name = self.target, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("serialization_failed", span_name = name, target_name = self.target)
    }
}

/// A panic was raised; shown in place of the default panic printer.
///
/// # Log Level
/// `warn!` - Panics inside targets are contained and rendered into their row
pub struct PanicRaised<'a> {
    pub location: &'a str,
    pub message: &'a str,
}

impl Display for PanicRaised<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Panic at {}: {}", self.location, self.message)
    }
}

impl StructuredLog for PanicRaised<'_> {
    fn log(&self) {
        tracing::warn!(location = self.location, panic_message = self.message, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("panic_raised", span_name = name, location = self.location)
    }
}
