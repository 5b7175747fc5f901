// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in example targets: predicates, and operations against a toy graph.

pub mod graph;
pub mod operations;
pub mod predicates;

pub use graph::{Edge, ToyGraph};
