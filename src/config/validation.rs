// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Validation for documentation configs.
//!
//! Every problem is collected before returning, so one run reports all
//! unknown and duplicate suite ids at once:
//!
//! 1. **Output path**: when present, it must not be empty
//! 2. **Suite references**: every id must name a suite the factory can build
//! 3. **Uniqueness**: no suite may be listed twice
//!
//! # Examples
//!
//! ```rust
//! use opdoc::config::{validate_config, DocConfig};
//!
//! let config = DocConfig {
//!     suites: vec!["is_more_than".to_string(), "is_more_than".to_string()],
//!     ..DocConfig::default()
//! };
//!
//! let errors = validate_config(&config).unwrap_err();
//! assert_eq!(errors.len(), 1);
//! ```

use std::collections::HashSet;

use crate::errors::ValidationError;
use crate::observability::messages::validation::{DuplicateSuiteListed, UnknownSuiteReferenced};
use crate::observability::messages::StructuredLog;
use crate::suites::SuiteFactory;

use super::DocConfig;

pub fn validate_config(config: &DocConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config
        .output
        .as_ref()
        .is_some_and(|path| path.as_os_str().is_empty())
    {
        errors.push(ValidationError::EmptyOutputPath);
    }

    let mut seen = HashSet::new();
    for suite_id in &config.suites {
        if !SuiteFactory::is_suite_available(suite_id) {
            UnknownSuiteReferenced { suite_id }.log();
            errors.push(ValidationError::UnknownSuite {
                suite_id: suite_id.clone(),
                available: SuiteFactory::list_available_suites()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            });
            continue;
        }

        if !seen.insert(suite_id.as_str()) {
            DuplicateSuiteListed { suite_id }.log();
            errors.push(ValidationError::DuplicateSuiteId {
                suite_id: suite_id.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
