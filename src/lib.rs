// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // doc config loading + validation
pub mod errors;     // error handling
pub mod generator;  // whole-document rendering
pub mod observability;
pub mod report;     // per-example report engine
pub mod suites;     // built-in example suites
pub mod targets;    // predicates and operations
pub mod traits;     // unified abstractions
pub mod value;      // sample input values
