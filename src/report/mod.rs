// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Example report engine.
//!
//! Takes an example target plus sample inputs, runs the target on each input
//! and renders a deterministic markdown report:
//!
//! ~~~text
//! ### <Heading>
//!
//! <description>
//!
//! ```rust / ```json / ```python   serialized forms of the target
//!
//! Input type:
//!
//! ```
//! <signature>
//! ```
//!
//! Example inputs:
//! <table> ... one row per sample input ... </table>
//!
//! -----------------------------------------------
//! ~~~
//!
//! Building a report never fails. Evaluation errors, panics, missing
//! signatures and serialization failures are all rendered into the report;
//! only writing to the sink can return an error.

mod builder;
pub mod consts;
mod heading;
mod python;
mod render;
mod runner;
mod serialized;
mod signature;

#[cfg(test)]
mod integration_tests;

pub use builder::ReportBuilder;
pub use heading::method_name_as_sentence;
pub use python::to_python;
pub use render::{render, render_tuple, RenderedCell};
pub use runner::{install_panic_hook, ExecutionResult, ExecutionRunner};
pub use serialized::{with_class, with_leading_class, SerializedForms};
pub use signature::{input_signature_of, Signature};

use std::fmt;
use std::io::Write;

use crate::errors::SignatureError;
use consts::{DIVIDER, SERIALIZATION_PLACEHOLDER, SIGNATURE_PLACEHOLDER, TABLE_HEADER};

/// One row of the example inputs table.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleRow {
    pub input: RenderedCell,
    pub result: ExecutionResult,
}

impl ExampleRow {
    fn fmt_html(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            self.input.type_label,
            self.input.display,
            self.result.result_cell()
        )
    }
}

/// A report section, in the fixed order the builder emits them.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Heading(String),
    Description(String),
    SerializedForms(SerializedForms),
    SerializationUnavailable(String),
    InputType(Result<Signature, SignatureError>),
    ExampleTable(Vec<ExampleRow>),
    Divider,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Heading(heading) => write!(f, "### {heading}\n\n"),
            Section::Description(description) => write!(f, "{description}\n\n"),
            Section::SerializedForms(forms) => {
                write!(f, "```rust\n{}\n```\n\n", forms.native)?;
                write!(f, "```json\n{}\n```\n\n", forms.json)?;
                write!(f, "```python\n{}\n```\n\n", forms.python)
            }
            Section::SerializationUnavailable(reason) => {
                write!(f, "```\n{SERIALIZATION_PLACEHOLDER}: {reason}\n```\n\n")
            }
            Section::InputType(signature) => {
                writeln!(f, "Input type:")?;
                write!(f, "\n```\n")?;
                match signature {
                    Ok(signature) => writeln!(f, "{signature}")?,
                    Err(_) => writeln!(f, "{SIGNATURE_PLACEHOLDER}")?,
                }
                write!(f, "```\n\n")
            }
            Section::ExampleTable(rows) => {
                writeln!(f, "Example inputs:")?;
                writeln!(f, "<table>")?;
                writeln!(f, "{TABLE_HEADER}")?;
                for row in rows {
                    row.fmt_html(f)?;
                }
                write!(f, "</table>\n\n")
            }
            Section::Divider => write!(f, "{DIVIDER}\n\n"),
        }
    }
}

/// A rendered example, ready to be written to a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub(crate) fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Table rows, in input order. Empty for configuration reports.
    pub fn rows(&self) -> &[ExampleRow] {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::ExampleTable(rows) => Some(rows.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn failure_count(&self) -> usize {
        self.rows()
            .iter()
            .filter(|row| !row.result.is_success())
            .count()
    }

    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> std::io::Result<()> {
        sink.write_all(self.to_string().as_bytes())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            write!(f, "{section}")?;
        }
        Ok(())
    }
}
