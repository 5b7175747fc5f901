// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use crate::errors::EvaluationError;
use crate::targets::graph::ToyGraph;
use crate::traits::ExampleTarget;
use crate::value::Value;

/// Adds a `[source, destination]` edge of one group to a shared graph.
#[derive(Clone, Serialize)]
pub struct AddEdge {
    group: String,
    directed: bool,
    #[serde(skip)]
    graph: Arc<ToyGraph>,
}

impl AddEdge {
    pub fn new(group: impl Into<String>, directed: bool, graph: Arc<ToyGraph>) -> Self {
        Self {
            group: group.into(),
            directed,
            graph,
        }
    }

    pub fn graph(&self) -> &Arc<ToyGraph> {
        &self.graph
    }

    fn vertex<'a>(&self, component: &'a Value, position: &str) -> Result<&'a str, EvaluationError> {
        component.as_text().ok_or_else(|| {
            EvaluationError::malformed_input(format!(
                "{position} vertex must be text, got {component}"
            ))
        })
    }
}

impl fmt::Debug for AddEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddEdge")
            .field("group", &self.group)
            .field("directed", &self.directed)
            .finish_non_exhaustive()
    }
}

impl ExampleTarget for AddEdge {
    fn name(&self) -> &'static str {
        "add_edge"
    }

    fn input_types(&self) -> Vec<&'static str> {
        vec![type_name::<String>(), type_name::<String>()]
    }

    fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
        let (source, destination) = match input.as_tuple() {
            Some([source, destination]) => (source, destination),
            _ => {
                return Err(EvaluationError::malformed_input(format!(
                    "AddEdge expects [source, destination], got {input}"
                )))
            }
        };
        let source = self.vertex(source, "source")?;
        let destination = self.vertex(destination, "destination")?;

        self.graph
            .add_edge(&self.group, source, destination, self.directed)?;
        Ok(Value::Null)
    }
}
