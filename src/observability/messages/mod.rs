// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for a human-readable line and
//! [`StructuredLog`] to emit itself with structured fields at its own level.
//!
//! # Organization
//!
//! * `report` - report building and per-row evaluation events
//! * `suite` - example suite and document generation events
//! * `validation` - configuration loading and validation events
//!
//! # Usage Pattern
//!
//! ```rust
//! use opdoc::observability::messages::report::ReportStarted;
//! use opdoc::observability::messages::StructuredLog;
//!
//! let msg = ReportStarted {
//!     target: "is_more_than",
//!     example: "is_more_than_5",
//!     input_count: 3,
//! };
//!
//! msg.log();
//! ```

pub mod report;
pub mod suite;
pub mod validation;

use std::fmt::Display;
use tracing::Span;

/// A log message that knows its level and structured fields.
pub trait StructuredLog: Display {
    /// Emit the message at its level.
    fn log(&self);

    /// A span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
