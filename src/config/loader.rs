// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_INCLUDE_SUITE_HEADERS, TOML_EXTENSION};
use crate::errors::ConfigError;
use crate::observability::messages::validation::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a documentation run.
///
/// Loaded from YAML, or from TOML when the file ends in `.toml`. Every field
/// is optional, so an empty file documents all suites to stdout.
///
/// # Fields
/// * `output` - File to write the markdown document to; stdout when absent
/// * `include_suite_headers` - Whether each suite gets a `##` title and description
/// * `suites` - Suite ids to document, in order; all suites when empty
///
/// # Example
/// ```yaml
/// output: docs/predicates.md
/// include_suite_headers: true
/// suites:
///   - is_more_than
///   - regex
///   - add_elements_from_hdfs
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocConfig {
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_include_suite_headers")]
    pub include_suite_headers: bool,
    #[serde(default)]
    pub suites: Vec<String>,
}

fn default_include_suite_headers() -> bool {
    DEFAULT_INCLUDE_SUITE_HEADERS
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            output: None,
            include_suite_headers: DEFAULT_INCLUDE_SUITE_HEADERS,
            suites: Vec::new(),
        }
    }
}

/// Config file syntax, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(TOML_EXTENSION) => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
        }
    }
}

pub fn parse_config(content: &str, format: ConfigFormat) -> Result<DocConfig, ConfigError> {
    match format {
        // An empty YAML document is `null`, not an empty mapping.
        ConfigFormat::Yaml if content.trim().is_empty() => Ok(DocConfig::default()),
        ConfigFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        ConfigFormat::Toml => Ok(toml::from_str(content)?),
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DocConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format = ConfigFormat::from_path(path);
    let config = parse_config(&content, format)?;

    ConfigLoaded {
        path: &path.display().to_string(),
        format: format.as_str(),
        suite_count: config.suites.len(),
    }
    .log();

    Ok(config)
}

pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<DocConfig, ConfigError> {
    let config = load_config(path)?;
    crate::config::validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
output: docs/predicates.md
include_suite_headers: false
suites: [is_more_than, regex]
"#;

        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(cfg.output, Some(PathBuf::from("docs/predicates.md")));
        assert!(!cfg.include_suite_headers);
        assert_eq!(cfg.suites, vec!["is_more_than", "regex"]);
    }

    #[test]
    fn parse_defaults() {
        let cfg = parse_config("suites: []\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(cfg, DocConfig::default());
        assert_eq!(parse_config("", ConfigFormat::Yaml).unwrap(), DocConfig::default());
        assert_eq!(parse_config("", ConfigFormat::Toml).unwrap(), DocConfig::default());
    }

    #[test]
    fn parse_toml_config() {
        let toml = r#"
output = "out.md"
suites = ["exists"]
"#;
        let cfg = parse_config(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(cfg.output, Some(PathBuf::from("out.md")));
        assert!(cfg.include_suite_headers);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = parse_config("suite: [exists]\n", ConfigFormat::Yaml);
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a")), ConfigFormat::Yaml);
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "suites: [is_true, add_edge]").unwrap();

        let result = load_and_validate_config(file.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_and_validate_unknown_suite() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "suites: [is_true, is_purple]").unwrap();

        let result = load_and_validate_config(file.path());
        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("Configuration validation failed:\n"));
        assert!(message.contains("Unknown example suite 'is_purple'"));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("does/not/exist.yaml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
