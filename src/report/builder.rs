// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;
use std::time::Instant;

use super::heading::method_name_as_sentence;
use super::render::render;
use super::runner::{ExecutionResult, ExecutionRunner};
use super::serialized::SerializedForms;
use super::signature::{input_signature_of, Signature};
use super::{ExampleRow, Report, Section};
use crate::errors::{ReportError, SignatureError};
use crate::observability::messages::report::{
    ReportCompleted, ReportStarted, SampleEvaluationFailed, SerializationFailed,
    SignatureUnavailable,
};
use crate::observability::messages::StructuredLog;
use crate::traits::ExampleTarget;
use crate::value::Value;

/// Assembles example reports.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Build the full report for an evaluated example.
    ///
    /// One table row per input, in input order. A failing input only
    /// affects its own row, and nothing here returns an error.
    pub fn build(
        example_name: &str,
        target: &dyn ExampleTarget,
        description: Option<&str>,
        inputs: &[Value],
    ) -> Report {
        let start_msg = ReportStarted {
            target: target.name(),
            example: example_name,
            input_count: inputs.len(),
        };
        let span = start_msg.span("report_build");
        let _guard = span.enter();
        start_msg.log();
        let start_time = Instant::now();

        let mut sections = Self::preamble(example_name, target, description);
        sections.push(Section::InputType(Self::inspect_signature(target)));

        let rows: Vec<ExampleRow> = inputs
            .iter()
            .enumerate()
            .map(|(index, input)| Self::build_row(target, index, input))
            .collect();
        let failure_count = rows.iter().filter(|row| !row.result.is_success()).count();
        let row_count = rows.len();

        sections.push(Section::ExampleTable(rows));
        sections.push(Section::Divider);

        ReportCompleted {
            target: target.name(),
            example: example_name,
            row_count,
            failure_count,
            duration: start_time.elapsed(),
        }
        .log();

        Report::new(sections)
    }

    /// Build a report that documents a target by its configuration only.
    ///
    /// Used for operations that cannot run in-process; there is no input
    /// type line and no table.
    pub fn build_configuration(
        example_name: &str,
        target: &dyn ExampleTarget,
        description: Option<&str>,
    ) -> Report {
        let mut sections = Self::preamble(example_name, target, description);
        sections.push(Section::Divider);
        Report::new(sections)
    }

    /// Build a report and append it to `sink`.
    pub fn write_report<W: Write + ?Sized>(
        sink: &mut W,
        example_name: &str,
        target: &dyn ExampleTarget,
        description: Option<&str>,
        inputs: &[Value],
    ) -> Result<Report, ReportError> {
        let report = Self::build(example_name, target, description, inputs);
        report.write_to(sink)?;
        Ok(report)
    }

    fn preamble(
        example_name: &str,
        target: &dyn ExampleTarget,
        description: Option<&str>,
    ) -> Vec<Section> {
        let mut sections = vec![Section::Heading(method_name_as_sentence(example_name))];

        if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
            sections.push(Section::Description(description.to_string()));
        }

        match SerializedForms::of(target) {
            Ok(forms) => sections.push(Section::SerializedForms(forms)),
            Err(error) => {
                SerializationFailed {
                    target: target.name(),
                    error: &error,
                }
                .log();
                sections.push(Section::SerializationUnavailable(error.to_string()));
            }
        }

        sections
    }

    fn inspect_signature(target: &dyn ExampleTarget) -> Result<Signature, SignatureError> {
        let signature = input_signature_of(target);
        if let Err(error) = &signature {
            SignatureUnavailable {
                target: target.name(),
                error,
            }
            .log();
        }
        signature
    }

    fn build_row(target: &dyn ExampleTarget, index: usize, input: &Value) -> ExampleRow {
        let result = ExecutionRunner::run(target, input);
        if let ExecutionResult::Failure(error) = &result {
            SampleEvaluationFailed {
                target: target.name(),
                row: index,
                error,
            }
            .log();
        }

        ExampleRow {
            input: render(input),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvaluationError;
    use crate::report::consts::DIVIDER;
    use serde::Serialize;

    #[derive(Debug, Serialize)]
    struct IsPositive;

    impl crate::traits::ExampleTarget for IsPositive {
        fn name(&self) -> &'static str {
            "is_positive"
        }

        fn input_types(&self) -> Vec<&'static str> {
            vec!["i32"]
        }

        fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
            match input {
                Value::Scalar(crate::value::Scalar::Int(v)) => Ok(Value::from(*v > 0)),
                _ => Err(EvaluationError::type_mismatch("expected i32")),
            }
        }
    }

    #[test]
    fn test_section_order() {
        let report = ReportBuilder::build(
            "is_positive_example",
            &IsPositive,
            Some("Checks sign."),
            &[Value::from(1)],
        );
        let kinds: Vec<&str> = report
            .sections()
            .iter()
            .map(|section| match section {
                Section::Heading(_) => "heading",
                Section::Description(_) => "description",
                Section::SerializedForms(_) => "forms",
                Section::SerializationUnavailable(_) => "forms_unavailable",
                Section::InputType(_) => "input_type",
                Section::ExampleTable(_) => "table",
                Section::Divider => "divider",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["heading", "description", "forms", "input_type", "table", "divider"]
        );
    }

    #[test]
    fn test_blank_description_is_omitted() {
        let report = ReportBuilder::build("example", &IsPositive, Some("   "), &[]);
        assert!(!report
            .sections()
            .iter()
            .any(|section| matches!(section, Section::Description(_))));

        let report = ReportBuilder::build("example", &IsPositive, None, &[]);
        assert!(matches!(report.sections()[1], Section::SerializedForms(_)));
    }

    #[test]
    fn test_rendered_layout() {
        let report = ReportBuilder::build(
            "isPositive",
            &IsPositive,
            None,
            &[Value::from(3), Value::from("x")],
        );
        let text = report.to_string();

        assert!(text.starts_with("### Is positive\n\n```rust\n"));
        assert!(text.contains("Input type:\n\n```\ni32\n```\n\n"));
        assert!(text.contains(
            "Example inputs:\n<table>\n<tr><th>Type</th><th>Input</th><th>Result</th></tr>\n"
        ));
        assert!(text.contains("<tr><td>i32</td><td>3</td><td>true</td></tr>\n"));
        assert!(text.contains(
            "<tr><td>alloc::string::String</td><td>x</td><td>TypeMismatch: expected i32</td></tr>\n"
        ));
        assert!(text.ends_with(&format!("</table>\n\n{DIVIDER}\n\n")));
    }

    #[test]
    fn test_configuration_report_has_no_table() {
        let report = ReportBuilder::build_configuration("configured", &IsPositive, None);
        assert!(report.rows().is_empty());
        let text = report.to_string();
        assert!(!text.contains("<table>"));
        assert!(!text.contains("Input type:"));
        assert!(text.ends_with(&format!("{DIVIDER}\n\n")));
    }

    #[test]
    fn test_write_report_appends_to_sink() {
        let mut sink: Vec<u8> = Vec::new();
        let report =
            ReportBuilder::write_report(&mut sink, "example", &IsPositive, None, &[Value::from(-1)])
                .unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), report.to_string());
        assert_eq!(report.rows()[0].result.result_cell(), "false");
    }
}
