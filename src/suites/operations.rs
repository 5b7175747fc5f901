// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Suites documenting operations.

use std::sync::Arc;

use crate::errors::{OperationBuildError, SuiteError};
use crate::targets::operations::{
    AddEdge, AddElementsFromHdfs, JobInitialiser, TEXT_MAPPER_GENERATOR,
};
use crate::targets::ToyGraph;
use crate::traits::{Example, ExampleSuite};
use crate::value::Value;

/// Adds edges to a fresh toy graph each time its examples are built.
#[derive(Debug, Default)]
pub struct AddEdgeSuite;

impl ExampleSuite for AddEdgeSuite {
    fn id(&self) -> &'static str {
        "add_edge"
    }

    fn title(&self) -> &'static str {
        "AddEdge"
    }

    fn description(&self) -> Option<&str> {
        Some("Adds an edge between two vertices of the graph, creating the vertices if needed.")
    }

    fn examples(&self) -> Result<Vec<Example>, SuiteError> {
        let graph = Arc::new(ToyGraph::new());
        let edge = |source: &str, destination: &str| {
            Value::tuple([Value::from(source), Value::from(destination)])
        };

        Ok(vec![
            Example::evaluated(
                "add_directed_edges",
                AddEdge::new("knows", true, Arc::clone(&graph)),
                vec![edge("1", "2"), edge("2", "3"), edge("3", "")],
            ),
            Example::evaluated(
                "add_undirected_edge",
                AddEdge::new("near", false, graph),
                vec![
                    edge("1", "3"),
                    Value::from("1"),
                    Value::tuple([Value::from(1), Value::from(2)]),
                ],
            )
            .with_description("Inputs must be pairs of text vertex ids."),
        ])
    }
}

const HDFS_DESCRIPTION: &str = "This operation must be run as a Hadoop Job. \
So you will need to package up a shaded jar containing a main method \
that creates an instance of Graph and executes the operation. \
It can then be run with: \n\n\
```bash\n\
hadoop jar custom-shaded-jar.jar\n\
```\n\n\
When running an AddElementsFromHdfs on Accumulo, if you do not specify use_provided_splits \
and the Accumulo table does not have a full set of split points \
then this operation will first sample the input data, generate \
split points and set them on the Accumulo table. \
It does this by delegating to SampleDataForSplitPoints and SplitStoreFromFile.\n\n\
Specifying the number of reducers within the Job has now been deprecated, \
and instead it is preferred to set the minimum and/or maximum number of reducers. \
Most users should not need to set the min or max number of reducers and simply leave the Store to pick the optimal number. \
The Accumulo Store does this by using the number of tablet servers. \
If you choose to set a min or max number of reducers then the Store will try to use a number within that range. \
If there is no optimal number within the provided range an exception is thrown.";

/// Documents the HDFS bulk import by configuration only.
#[derive(Debug, Default)]
pub struct AddElementsFromHdfsSuite;

impl AddElementsFromHdfsSuite {
    const ID: &'static str = "add_elements_from_hdfs";

    fn simple() -> Result<AddElementsFromHdfs, OperationBuildError> {
        AddElementsFromHdfs::builder()
            .add_input_mapper_pair("/path/to/input/fileOrFolder", TEXT_MAPPER_GENERATOR)
            .output_path("/path/to/output/folder")
            .failure_path("/path/to/failure/folder")
            .splits_file_path("/path/to/splits/file")
            .working_path("/tmp/workingDir")
            .use_provided_splits(false)
            .job_initialiser(JobInitialiser::Text)
            .min_reducers(10)
            .max_reducers(100)
            .build()
    }

    /// What a job's main method builds from its five command line arguments.
    fn main_method() -> Result<AddElementsFromHdfs, OperationBuildError> {
        AddElementsFromHdfs::builder()
            .add_input_mapper_pair("<inputPath>", TEXT_MAPPER_GENERATOR)
            .output_path("<outputPath>")
            .failure_path("<failurePath>")
            .splits_file_path("/tmp/splits")
            .working_path("/tmp/workingDir")
            .use_provided_splits(false)
            .job_initialiser(JobInitialiser::Text)
            .min_reducers(10)
            .max_reducers(100)
            .build()
    }

    fn multiple_input() -> Result<AddElementsFromHdfs, OperationBuildError> {
        AddElementsFromHdfs::builder()
            .input_mapper_pairs([
                ("/path/to/first/inputFileOrFolder", TEXT_MAPPER_GENERATOR),
                ("/path/to/second/inputFileOrFolder", TEXT_MAPPER_GENERATOR),
            ])
            .add_input_mapper_pair("/path/to/third/inputFileOrFolder", TEXT_MAPPER_GENERATOR)
            .output_path("/path/to/output/folder")
            .failure_path("/path/to/failure/folder")
            .splits_file_path("/path/to/splits/file")
            .working_path("/tmp/workingDir")
            .use_provided_splits(false)
            .job_initialiser(JobInitialiser::Text)
            .min_reducers(10)
            .max_reducers(100)
            .build()
    }
}

impl ExampleSuite for AddElementsFromHdfsSuite {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn title(&self) -> &'static str {
        "AddElementsFromHdfs"
    }

    fn description(&self) -> Option<&str> {
        Some(HDFS_DESCRIPTION)
    }

    fn examples(&self) -> Result<Vec<Example>, SuiteError> {
        let build_failed = |source| SuiteError::ExampleBuildFailed {
            suite_id: Self::ID,
            source,
        };

        Ok(vec![
            Example::configuration("add_elements_from_hdfs", Self::simple().map_err(build_failed)?),
            Example::configuration(
                "add_elements_from_hdfs_main_method",
                Self::main_method().map_err(build_failed)?,
            )
            .with_description(
                "Example content for a main method that takes 5 arguments and runs an AddElementsFromHdfs",
            ),
            Example::configuration(
                "add_elements_from_hdfs_with_multiple_input",
                Self::multiple_input().map_err(build_failed)?,
            ),
        ])
    }
}
