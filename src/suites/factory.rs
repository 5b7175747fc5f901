// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::SuiteError;
use crate::traits::ExampleSuite;

use super::operations::{AddEdgeSuite, AddElementsFromHdfsSuite};
use super::predicates::PredicateSuite;

/// Factory for the built-in example suites
pub struct SuiteFactory;

impl SuiteFactory {
    /// Create a suite by id
    ///
    /// Predicate suites are named after their predicate in snake case
    /// (`is_more_than`, `regex`, `not`, ...). Operation suites are
    /// `add_edge` and `add_elements_from_hdfs`.
    pub fn create_suite(suite_id: &str) -> Result<Box<dyn ExampleSuite>, SuiteError> {
        match suite_id {
            "add_edge" => Ok(Box::new(AddEdgeSuite)),
            "add_elements_from_hdfs" => Ok(Box::new(AddElementsFromHdfsSuite)),
            other => PredicateSuite::find(other)
                .map(|suite| Box::new(*suite) as Box<dyn ExampleSuite>)
                .ok_or_else(|| SuiteError::UnknownSuite {
                    suite_id: other.to_string(),
                }),
        }
    }

    /// Create the listed suites in order, or every suite when the list is empty
    pub fn create_suites(suite_ids: &[String]) -> Result<Vec<Box<dyn ExampleSuite>>, SuiteError> {
        if suite_ids.is_empty() {
            return Self::list_available_suites()
                .into_iter()
                .map(Self::create_suite)
                .collect();
        }
        suite_ids.iter().map(|id| Self::create_suite(id)).collect()
    }

    /// List all available suite ids, in document order
    pub fn list_available_suites() -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = PredicateSuite::ids().collect();
        ids.extend(["add_edge", "add_elements_from_hdfs"]);
        ids
    }

    /// Check if a suite is available
    pub fn is_suite_available(suite_id: &str) -> bool {
        Self::list_available_suites().contains(&suite_id)
    }
}
