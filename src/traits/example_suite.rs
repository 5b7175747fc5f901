// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::errors::SuiteError;
use crate::report::{Report, ReportBuilder};
use crate::traits::ExampleTarget;
use crate::value::Value;

/// How an example is documented.
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleKind {
    /// Run the target on each sample input and tabulate the results.
    Evaluated(Vec<Value>),
    /// Show the target's configuration only.
    Configuration,
}

/// One documented use of a target.
pub struct Example {
    pub name: String,
    pub description: Option<String>,
    pub target: Box<dyn ExampleTarget>,
    pub kind: ExampleKind,
}

impl Example {
    pub fn evaluated(
        name: impl Into<String>,
        target: impl ExampleTarget + 'static,
        inputs: Vec<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            target: Box::new(target),
            kind: ExampleKind::Evaluated(inputs),
        }
    }

    pub fn configuration(name: impl Into<String>, target: impl ExampleTarget + 'static) -> Self {
        Self {
            name: name.into(),
            description: None,
            target: Box::new(target),
            kind: ExampleKind::Configuration,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn report(&self) -> Report {
        let description = self.description.as_deref();
        match &self.kind {
            ExampleKind::Evaluated(inputs) => {
                ReportBuilder::build(&self.name, self.target.as_ref(), description, inputs)
            }
            ExampleKind::Configuration => {
                ReportBuilder::build_configuration(&self.name, self.target.as_ref(), description)
            }
        }
    }
}

impl fmt::Debug for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("name", &self.name)
            .field("target", &self.target.name())
            .field("kind", &self.kind)
            .finish()
    }
}

/// A titled group of examples documenting one target.
///
/// Suites are created by id through the suite factory and rendered in order
/// by the document generator.
pub trait ExampleSuite: Send + Sync {
    /// Stable identifier used in configuration files.
    fn id(&self) -> &'static str;

    fn title(&self) -> &'static str;

    fn description(&self) -> Option<&str> {
        None
    }

    /// Build this suite's examples, in the order they are documented.
    fn examples(&self) -> Result<Vec<Example>, SuiteError>;
}
