// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in opdoc. Message types follow a struct-based pattern
//! with `Display` implementations so that:
//!
//! * Log text lives in one place instead of inline format strings
//! * Every event carries the same structured fields wherever it is emitted
//!
//! Logs go to stderr (see `main.rs`); stdout is reserved for the generated
//! markdown.

pub mod messages;
