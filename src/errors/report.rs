// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors around building and writing reports.

use thiserror::Error;

/// The target declared no usable input signature.
///
/// Reports recover from this with a placeholder on the `Input type:` line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Target '{target}' declares no input types")]
    Unavailable { target: String },

    #[error("Target '{target}' declares a blank input type at position {position}")]
    BlankTypeName { target: String, position: usize },

    #[error("Target '{target}' panicked while declaring input types: {message}")]
    Panicked { target: String, message: String },
}

/// Writing a finished report to its sink failed.
///
/// This is the only error that leaves the report builder; everything that
/// goes wrong while building is rendered into the report itself.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Sink(#[from] std::io::Error),
}
