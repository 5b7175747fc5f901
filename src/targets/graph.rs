// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory graph that operation examples mutate.

use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::errors::EvaluationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub group: String,
    pub source: String,
    pub destination: String,
    pub directed: bool,
}

impl Edge {
    fn connects(&self, source: &str, destination: &str) -> bool {
        (self.source == source && self.destination == destination)
            || (!self.directed && self.source == destination && self.destination == source)
    }
}

#[derive(Debug, Default)]
struct GraphState {
    vertices: BTreeSet<String>,
    edges: Vec<Edge>,
}

/// A shared, thread-safe graph of string vertices.
#[derive(Debug, Default)]
pub struct ToyGraph {
    state: Mutex<GraphState>,
}

impl ToyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, GraphState> {
        // A panicking example leaves the state consistent; keep using it.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add an edge, creating missing vertices.
    pub fn add_edge(
        &self,
        group: &str,
        source: &str,
        destination: &str,
        directed: bool,
    ) -> Result<(), EvaluationError> {
        if source.trim().is_empty() || destination.trim().is_empty() {
            return Err(EvaluationError::graph(format!(
                "edge {group} requires non-empty vertex ids"
            )));
        }

        let mut state = self.state();
        state.vertices.insert(source.to_string());
        state.vertices.insert(destination.to_string());
        state.edges.push(Edge {
            group: group.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            directed,
        });
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.state().vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.state().edges.len()
    }

    pub fn edges(&self) -> Vec<Edge> {
        self.state().edges.clone()
    }

    /// Whether any edge joins `source` to `destination`, either way for undirected edges.
    pub fn has_edge(&self, source: &str, destination: &str) -> bool {
        self.state()
            .edges
            .iter()
            .any(|edge| edge.connects(source, destination))
    }
}
