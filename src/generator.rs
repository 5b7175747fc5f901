// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Renders whole suites of examples into one markdown document.

use std::io::Write;
use std::time::Instant;

use crate::config::DocConfig;
use crate::errors::ReportError;
use crate::observability::messages::suite::{
    DocumentGenerated, SuiteCompleted, SuiteSkipped, SuiteStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::ExampleSuite;

/// Counts gathered while generating a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub suite_count: usize,
    pub report_count: usize,
    pub row_count: usize,
    pub failure_count: usize,
    pub skipped_count: usize,
}

impl GenerationSummary {
    pub fn log(&self) {
        DocumentGenerated {
            suite_count: self.suite_count,
            report_count: self.report_count,
            row_count: self.row_count,
            failure_count: self.failure_count,
            skipped_count: self.skipped_count,
        }
        .log();
    }
}

#[derive(Debug, Clone)]
pub struct DocGenerator {
    include_suite_headers: bool,
}

impl Default for DocGenerator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DocGenerator {
    pub fn new(include_suite_headers: bool) -> Self {
        Self {
            include_suite_headers,
        }
    }

    pub fn from_config(config: &DocConfig) -> Self {
        Self::new(config.include_suite_headers)
    }

    /// Write every suite to `sink`, in order.
    ///
    /// A suite that cannot build its examples is logged and skipped; the
    /// rest of the document is still written. Only sink errors are returned.
    pub fn generate<W: Write + ?Sized>(
        &self,
        suites: &[Box<dyn ExampleSuite>],
        sink: &mut W,
    ) -> Result<GenerationSummary, ReportError> {
        let mut summary = GenerationSummary::default();

        for suite in suites {
            let examples = match suite.examples() {
                Ok(examples) => examples,
                Err(error) => {
                    SuiteSkipped {
                        suite_id: suite.id(),
                        error: &error,
                    }
                    .log();
                    summary.skipped_count += 1;
                    continue;
                }
            };

            let start_msg = SuiteStarted {
                suite_id: suite.id(),
                example_count: examples.len(),
            };
            let span = start_msg.span("generate_suite");
            let _guard = span.enter();
            start_msg.log();
            let start_time = Instant::now();

            if self.include_suite_headers {
                write!(sink, "## {}\n\n", suite.title())?;
                if let Some(description) = suite.description().filter(|d| !d.trim().is_empty()) {
                    write!(sink, "{description}\n\n")?;
                }
            }

            for example in &examples {
                let report = example.report();
                report.write_to(sink)?;
                summary.report_count += 1;
                summary.row_count += report.rows().len();
                summary.failure_count += report.failure_count();
            }
            summary.suite_count += 1;

            SuiteCompleted {
                suite_id: suite.id(),
                example_count: examples.len(),
                duration: start_time.elapsed(),
            }
            .log();
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{OperationBuildError, SuiteError};
    use crate::suites::SuiteFactory;
    use crate::targets::predicates::Exists;
    use crate::traits::Example;
    use crate::value::Value;

    struct BrokenSuite;

    impl ExampleSuite for BrokenSuite {
        fn id(&self) -> &'static str {
            "broken"
        }

        fn title(&self) -> &'static str {
            "Broken"
        }

        fn examples(&self) -> Result<Vec<Example>, SuiteError> {
            Err(SuiteError::ExampleBuildFailed {
                suite_id: "broken",
                source: OperationBuildError::MissingOutputPath { operation: "Broken" },
            })
        }
    }

    struct TinySuite;

    impl ExampleSuite for TinySuite {
        fn id(&self) -> &'static str {
            "tiny"
        }

        fn title(&self) -> &'static str {
            "Tiny"
        }

        fn description(&self) -> Option<&str> {
            Some("A tiny suite.")
        }

        fn examples(&self) -> Result<Vec<Example>, SuiteError> {
            Ok(vec![Example::evaluated(
                "exists",
                Exists,
                vec![Value::from(1), Value::Null],
            )])
        }
    }

    #[test]
    fn test_suite_header_precedes_reports() {
        let suites: Vec<Box<dyn ExampleSuite>> = vec![Box::new(TinySuite)];
        let mut sink = Vec::new();
        let summary = DocGenerator::default().generate(&suites, &mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();

        assert!(text.starts_with("## Tiny\n\nA tiny suite.\n\n### Exists\n\n"));
        assert_eq!(summary.suite_count, 1);
        assert_eq!(summary.report_count, 1);
        assert_eq!(summary.row_count, 2);
        assert_eq!(summary.failure_count, 0);
    }

    #[test]
    fn test_headers_can_be_disabled() {
        let suites: Vec<Box<dyn ExampleSuite>> = vec![Box::new(TinySuite)];
        let mut sink = Vec::new();
        DocGenerator::new(false).generate(&suites, &mut sink).unwrap();
        assert!(String::from_utf8(sink).unwrap().starts_with("### Exists\n\n"));
    }

    #[test]
    fn test_broken_suite_is_skipped() {
        let suites: Vec<Box<dyn ExampleSuite>> = vec![Box::new(BrokenSuite), Box::new(TinySuite)];
        let mut sink = Vec::new();
        let summary = DocGenerator::default().generate(&suites, &mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();

        assert_eq!(summary.skipped_count, 1);
        assert_eq!(summary.suite_count, 1);
        assert!(!text.contains("## Broken"));
        assert!(text.starts_with("## Tiny"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let render = || {
            let suites = SuiteFactory::create_suites(&[]).unwrap();
            let mut sink = Vec::new();
            DocGenerator::default().generate(&suites, &mut sink).unwrap();
            sink
        };
        assert_eq!(render(), render());
    }
}
