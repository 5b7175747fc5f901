// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and validation.
//!
//! This module contains message types for logging events related to:
//! * Config file loading
//! * Unknown suite detection
//! * Duplicate suite detection

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Config file loaded.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub format: &'a str,
    pub suite_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} config '{}': {} suites listed",
            self.format, self.path, self.suite_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            format = self.format,
            suite_count = self.suite_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("config_loaded", span_name = name, path = self.path)
    }
}

/// Unknown suite referenced in configuration.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use opdoc::observability::messages::validation::UnknownSuiteReferenced;
///
/// let msg = UnknownSuiteReferenced {
///     suite_id: "is_bigger_than",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct UnknownSuiteReferenced<'a> {
    pub suite_id: &'a str,
}

impl Display for UnknownSuiteReferenced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Config references unknown suite '{}'", self.suite_id)
    }
}

impl StructuredLog for UnknownSuiteReferenced<'_> {
    fn log(&self) {
        tracing::error!(suite_id = self.suite_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "unknown_suite",
            span_name = name,
            suite_id = self.suite_id,
        )
    }
}

/// Suite listed more than once in configuration.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DuplicateSuiteListed<'a> {
    pub suite_id: &'a str,
}

impl Display for DuplicateSuiteListed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Config lists suite '{}' more than once", self.suite_id)
    }
}

impl StructuredLog for DuplicateSuiteListed<'_> {
    fn log(&self) {
        tracing::error!(suite_id = self.suite_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "duplicate_suite",
            span_name = name,
            suite_id = self.suite_id,
        )
    }
}
