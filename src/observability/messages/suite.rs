// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for example suite and document generation events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Suite rendering started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use opdoc::observability::messages::suite::SuiteStarted;
///
/// let msg = SuiteStarted {
///     suite_id: "is_more_than",
///     example_count: 3,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct SuiteStarted<'a> {
    pub suite_id: &'a str,
    pub example_count: usize,
}

impl Display for SuiteStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rendering suite '{}': {} examples",
            self.suite_id, self.example_count
        )
    }
}

impl StructuredLog for SuiteStarted<'_> {
    fn log(&self) {
        tracing::info!(
            suite_id = self.suite_id,
            example_count = self.example_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "suite",
            span_name = name,
            suite_id = self.suite_id,
            example_count = self.example_count,
        )
    }
}

/// Suite rendering completed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct SuiteCompleted<'a> {
    pub suite_id: &'a str,
    pub example_count: usize,
    pub duration: std::time::Duration,
}

impl Display for SuiteCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Suite '{}' rendered {} examples in {:?}",
            self.suite_id, self.example_count, self.duration
        )
    }
}

impl StructuredLog for SuiteCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            suite_id = self.suite_id,
            example_count = self.example_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "suite_completed",
            span_name = name,
            suite_id = self.suite_id,
            duration = ?self.duration,
        )
    }
}

/// A suite could not build its examples and was skipped.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct SuiteSkipped<'a> {
    pub suite_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for SuiteSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skipping suite '{}': {}", self.suite_id, self.error)
    }
}

impl StructuredLog for SuiteSkipped<'_> {
    fn log(&self) {
        tracing::error!(suite_id = self.suite_id, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("suite_skipped", span_name = name, suite_id = self.suite_id)
    }
}

/// Whole document written.
///
/// # Log Level
/// `info!` - Important operational event
pub struct DocumentGenerated {
    pub suite_count: usize,
    pub report_count: usize,
    pub row_count: usize,
    pub failure_count: usize,
    pub skipped_count: usize,
}

impl Display for DocumentGenerated {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Documentation generated: suites={}, reports={}, rows={}, failing_rows={}, skipped_suites={}",
            self.suite_count, self.report_count, self.row_count, self.failure_count, self.skipped_count
        )
    }
}

impl StructuredLog for DocumentGenerated {
    fn log(&self) {
        tracing::info!(
            suite_count = self.suite_count,
            report_count = self.report_count,
            row_count = self.row_count,
            failure_count = self.failure_count,
            skipped_count = self.skipped_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "document_generated",
            span_name = name,
            suite_count = self.suite_count,
            report_count = self.report_count,
        )
    }
}
