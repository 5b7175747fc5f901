// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::collections::BTreeMap;

use crate::errors::{EvaluationError, OperationBuildError};
use crate::traits::ExampleTarget;
use crate::value::Value;

const OPERATION: &str = "AddElementsFromHdfs";

/// Mapper generator used by the bundled examples.
pub const TEXT_MAPPER_GENERATOR: &str = "TextMapperGenerator";

/// How the Hadoop job reads its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "class")]
pub enum JobInitialiser {
    #[serde(rename = "TextJobInitialiser")]
    Text,
}

/// Bulk import of elements from HDFS files, run as a Hadoop job.
///
/// Only ever documented by its configuration; evaluating it in-process is
/// unsupported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddElementsFromHdfs {
    input_mapper_pairs: BTreeMap<String, String>,
    output_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    splits_file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    working_path: Option<String>,
    use_provided_splits: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_initialiser: Option<JobInitialiser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_reducers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_reducers: Option<u32>,
}

impl AddElementsFromHdfs {
    pub fn builder() -> AddElementsFromHdfsBuilder {
        AddElementsFromHdfsBuilder::default()
    }

    pub fn input_mapper_pairs(&self) -> &BTreeMap<String, String> {
        &self.input_mapper_pairs
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    pub fn reducer_range(&self) -> (Option<u32>, Option<u32>) {
        (self.min_reducers, self.max_reducers)
    }
}

impl ExampleTarget for AddElementsFromHdfs {
    fn name(&self) -> &'static str {
        "add_elements_from_hdfs"
    }

    fn evaluate(&self, _input: &Value) -> Result<Value, EvaluationError> {
        Err(EvaluationError::unsupported(format!(
            "{OPERATION} must be run as a Hadoop job"
        )))
    }
}

#[derive(Debug, Clone, Default)]
pub struct AddElementsFromHdfsBuilder {
    input_mapper_pairs: BTreeMap<String, String>,
    output_path: Option<String>,
    failure_path: Option<String>,
    splits_file_path: Option<String>,
    working_path: Option<String>,
    use_provided_splits: bool,
    job_initialiser: Option<JobInitialiser>,
    min_reducers: Option<u32>,
    max_reducers: Option<u32>,
}

impl AddElementsFromHdfsBuilder {
    pub fn add_input_mapper_pair(
        mut self,
        input_path: impl Into<String>,
        mapper_generator: impl Into<String>,
    ) -> Self {
        self.input_mapper_pairs
            .insert(input_path.into(), mapper_generator.into());
        self
    }

    pub fn input_mapper_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.input_mapper_pairs
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn output_path(mut self, path: impl Into<String>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn failure_path(mut self, path: impl Into<String>) -> Self {
        self.failure_path = Some(path.into());
        self
    }

    pub fn splits_file_path(mut self, path: impl Into<String>) -> Self {
        self.splits_file_path = Some(path.into());
        self
    }

    pub fn working_path(mut self, path: impl Into<String>) -> Self {
        self.working_path = Some(path.into());
        self
    }

    pub fn use_provided_splits(mut self, use_provided_splits: bool) -> Self {
        self.use_provided_splits = use_provided_splits;
        self
    }

    pub fn job_initialiser(mut self, job_initialiser: JobInitialiser) -> Self {
        self.job_initialiser = Some(job_initialiser);
        self
    }

    pub fn min_reducers(mut self, min_reducers: u32) -> Self {
        self.min_reducers = Some(min_reducers);
        self
    }

    pub fn max_reducers(mut self, max_reducers: u32) -> Self {
        self.max_reducers = Some(max_reducers);
        self
    }

    pub fn build(self) -> Result<AddElementsFromHdfs, OperationBuildError> {
        if self.input_mapper_pairs.is_empty() {
            return Err(OperationBuildError::MissingInputMapperPairs {
                operation: OPERATION,
            });
        }

        let output_path = self
            .output_path
            .filter(|path| !path.trim().is_empty())
            .ok_or(OperationBuildError::MissingOutputPath {
                operation: OPERATION,
            })?;

        if let (Some(min), Some(max)) = (self.min_reducers, self.max_reducers) {
            if min > max {
                return Err(OperationBuildError::InvalidReducerRange {
                    operation: OPERATION,
                    min,
                    max,
                });
            }
        }

        Ok(AddElementsFromHdfs {
            input_mapper_pairs: self.input_mapper_pairs,
            output_path,
            failure_path: self.failure_path,
            splits_file_path: self.splits_file_path,
            working_path: self.working_path,
            use_provided_splits: self.use_provided_splits,
            job_initialiser: self.job_initialiser,
            min_reducers: self.min_reducers,
            max_reducers: self.max_reducers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvaluationErrorKind;
    use crate::report::SerializedForms;

    fn minimal() -> AddElementsFromHdfsBuilder {
        AddElementsFromHdfs::builder()
            .add_input_mapper_pair("/input", TEXT_MAPPER_GENERATOR)
            .output_path("/output")
    }

    #[test]
    fn test_build_minimal() {
        let operation = minimal().build().unwrap();
        assert_eq!(operation.output_path(), "/output");
        assert_eq!(operation.input_mapper_pairs().len(), 1);
        assert_eq!(operation.reducer_range(), (None, None));
    }

    #[test]
    fn test_pairs_are_merged() {
        let operation = minimal()
            .input_mapper_pairs([("/a", TEXT_MAPPER_GENERATOR), ("/b", TEXT_MAPPER_GENERATOR)])
            .build()
            .unwrap();
        let paths: Vec<&str> = operation
            .input_mapper_pairs()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(paths, vec!["/a", "/b", "/input"]);
    }

    #[test]
    fn test_missing_input_mapper_pairs() {
        let result = AddElementsFromHdfs::builder().output_path("/output").build();
        assert_eq!(
            result,
            Err(OperationBuildError::MissingInputMapperPairs {
                operation: "AddElementsFromHdfs"
            })
        );
    }

    #[test]
    fn test_missing_or_blank_output_path() {
        let builder =
            AddElementsFromHdfs::builder().add_input_mapper_pair("/input", TEXT_MAPPER_GENERATOR);
        assert!(matches!(
            builder.clone().build(),
            Err(OperationBuildError::MissingOutputPath { .. })
        ));
        assert!(matches!(
            builder.output_path(" ").build(),
            Err(OperationBuildError::MissingOutputPath { .. })
        ));
    }

    #[test]
    fn test_invalid_reducer_range() {
        let error = minimal().min_reducers(100).max_reducers(10).build().unwrap_err();
        assert_eq!(
            error.to_string(),
            "AddElementsFromHdfs has min_reducers (100) greater than max_reducers (10)"
        );
        assert!(minimal().min_reducers(10).max_reducers(10).build().is_ok());
    }

    #[test]
    fn test_evaluation_is_unsupported() {
        let error = minimal().build().unwrap().evaluate(&Value::Null).unwrap_err();
        assert_eq!(error.kind(), EvaluationErrorKind::Unsupported);
    }

    #[test]
    fn test_serialized_forms() {
        let operation = minimal()
            .job_initialiser(JobInitialiser::Text)
            .min_reducers(10)
            .build()
            .unwrap();
        let forms = SerializedForms::of(&operation).unwrap();
        assert!(forms.json.contains("\"class\": \"TextJobInitialiser\""));
        assert!(!forms.json.contains("failure_path"));
        assert!(forms.python.contains("  job_initialiser=g.TextJobInitialiser(),\n"));
        assert!(forms
            .python
            .contains("  input_mapper_pairs={'/input': 'TextMapperGenerator'},\n"));
    }
}
