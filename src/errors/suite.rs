// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for example suite creation and operation building.

use thiserror::Error;

/// An operation builder was asked to build an incomplete or inconsistent operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationBuildError {
    #[error("{operation} requires at least one input mapper pair")]
    MissingInputMapperPairs { operation: &'static str },

    #[error("{operation} requires an output path")]
    MissingOutputPath { operation: &'static str },

    #[error("{operation} has min_reducers ({min}) greater than max_reducers ({max})")]
    InvalidReducerRange {
        operation: &'static str,
        min: u32,
        max: u32,
    },
}

/// Errors that can occur while creating a suite or its examples
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuiteError {
    #[error("Unknown example suite: '{suite_id}'")]
    UnknownSuite { suite_id: String },

    #[error("Suite '{suite_id}' could not build its examples: {source}")]
    ExampleBuildFailed {
        suite_id: &'static str,
        #[source]
        source: OperationBuildError,
    },
}
