#[cfg(test)]
mod integration_tests {
    use crate::config::{load_and_validate_config, DocConfig};
    use crate::errors::{ConfigError, ValidationError};
    use crate::generator::DocGenerator;
    use crate::suites::SuiteFactory;
    use std::path::PathBuf;

    /// Test that the bundled predicate config loads and lists every predicate suite
    #[test]
    fn test_predicates_yaml_loading() {
        let config = load_and_validate_config("configs/predicates.yaml").unwrap();

        assert_eq!(config.output, Some(PathBuf::from("target/doc/predicates.md")));
        assert!(config.include_suite_headers);
        assert_eq!(config.suites.len(), 11);
        assert_eq!(config.suites[0], "is_more_than");
        assert_eq!(config.suites[10], "not");
    }

    /// Test that a TOML config is picked by extension
    #[test]
    fn test_operations_toml_loading() {
        let config = load_and_validate_config("configs/operations.toml").unwrap();

        assert_eq!(config.output, None);
        assert!(!config.include_suite_headers);
        assert_eq!(config.suites, vec!["add_edge", "add_elements_from_hdfs"]);
    }

    /// Test that an empty suite list selects every suite
    #[test]
    fn test_all_suites_yaml_loading() {
        let config = load_and_validate_config("configs/all-suites.yaml").unwrap();
        assert_eq!(config, DocConfig::default());

        let suites = SuiteFactory::create_suites(&config.suites).unwrap();
        assert_eq!(suites.len(), SuiteFactory::list_available_suites().len());
    }

    /// Test that every validation problem in a file is reported together
    #[test]
    fn test_invalid_suites_yaml() {
        let error = load_and_validate_config("configs/invalid-suites.yaml").unwrap_err();

        match &error {
            ConfigError::Validation(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(matches!(
                    &errors[0],
                    ValidationError::UnknownSuite { suite_id, .. } if suite_id == "is_bigger_than"
                ));
                assert_eq!(
                    errors[1],
                    ValidationError::DuplicateSuiteId {
                        suite_id: "is_more_than".to_string()
                    }
                );
            }
            other => panic!("Expected validation error, got {:?}", other),
        }

        let message = error.to_string();
        assert!(message.contains("Unknown example suite 'is_bigger_than'"));
        assert!(message.contains("Duplicate example suite: 'is_more_than'"));
    }

    /// Test generating the operations document end to end from its config
    #[test]
    fn test_generate_from_operations_config() {
        let config = load_and_validate_config("configs/operations.toml").unwrap();
        let suites = SuiteFactory::create_suites(&config.suites).unwrap();

        let mut sink = Vec::new();
        let summary = DocGenerator::from_config(&config)
            .generate(&suites, &mut sink)
            .unwrap();
        let text = String::from_utf8(sink).unwrap();

        assert!(text.starts_with("### Add directed edges\n\n"));
        assert!(!text.contains("## AddEdge"));
        assert!(text.contains("### Add elements from hdfs with multiple input\n\n"));
        assert_eq!(summary.suite_count, 2);
        assert_eq!(summary.report_count, 5);
        assert_eq!(summary.row_count, 6);
    }
}
