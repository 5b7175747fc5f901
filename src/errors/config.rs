// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during documentation config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A suite id does not name any registered example suite
    UnknownSuite {
        /// The id as written in the config
        suite_id: String,
        /// Ids the factory does know about
        available: Vec<String>,
    },
    /// The same suite is listed more than once
    DuplicateSuiteId {
        /// The duplicate suite id
        suite_id: String,
    },
    /// The output path is present but empty
    EmptyOutputPath,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownSuite {
                suite_id,
                available,
            } => {
                write!(
                    f,
                    "Unknown example suite '{}'. Available suites: {}",
                    suite_id,
                    available.join(", ")
                )
            }
            ValidationError::DuplicateSuiteId { suite_id } => {
                write!(f, "Duplicate example suite: '{}'", suite_id)
            }
            ValidationError::EmptyOutputPath => {
                write!(f, "Output path is empty; omit it to write to stdout")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading a documentation config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(
        "Configuration validation failed:\n{}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    )]
    Validation(Vec<ValidationError>),
}
