#[cfg(test)]
mod integration_tests {
    use crate::errors::{EvaluationError, SignatureError};
    use crate::report::consts::{DIVIDER, SERIALIZATION_PLACEHOLDER, SIGNATURE_PLACEHOLDER};
    use crate::report::{ExecutionResult, ReportBuilder, Section};
    use crate::targets::predicates::{IsTrue, IsXMoreThanY};
    use crate::traits::ExampleTarget;
    use crate::value::{Record, Value};
    use serde::Serialize;
    use std::collections::BTreeMap;

    /// Declares no input types.
    #[derive(Debug, Serialize)]
    struct Untyped;

    impl ExampleTarget for Untyped {
        fn name(&self) -> &'static str {
            "untyped"
        }

        fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
            Ok(input.clone())
        }
    }

    /// Panics on negative numbers.
    #[derive(Debug, Serialize)]
    struct Fragile;

    impl ExampleTarget for Fragile {
        fn name(&self) -> &'static str {
            "fragile"
        }

        fn input_types(&self) -> Vec<&'static str> {
            vec!["i32"]
        }

        fn evaluate(&self, input: &Value) -> Result<Value, EvaluationError> {
            if input.compare(&Value::from(0)) == Some(std::cmp::Ordering::Less) {
                panic!("negative input");
            }
            Ok(Value::from(true))
        }
    }

    /// Map keys that JSON cannot represent.
    #[derive(Debug, Serialize)]
    struct Unserializable {
        grid: BTreeMap<(i32, i32), i32>,
    }

    impl ExampleTarget for Unserializable {
        fn name(&self) -> &'static str {
            "unserializable"
        }

        fn input_types(&self) -> Vec<&'static str> {
            vec!["i32"]
        }

        fn evaluate(&self, _input: &Value) -> Result<Value, EvaluationError> {
            Ok(Value::from(false))
        }
    }

    /// Panics while declaring its input types.
    #[derive(Debug, Serialize)]
    struct BrokenSignature;

    impl ExampleTarget for BrokenSignature {
        fn name(&self) -> &'static str {
            "broken_signature"
        }

        fn input_types(&self) -> Vec<&'static str> {
            panic!("no declared types")
        }

        fn evaluate(&self, _input: &Value) -> Result<Value, EvaluationError> {
            Ok(Value::from(true))
        }
    }

    /// Panics while being serialized.
    #[derive(Debug)]
    struct BrokenSerialize;

    impl Serialize for BrokenSerialize {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            panic!("no serial form")
        }
    }

    impl ExampleTarget for BrokenSerialize {
        fn name(&self) -> &'static str {
            "broken_serialize"
        }

        fn input_types(&self) -> Vec<&'static str> {
            vec!["i32"]
        }

        fn evaluate(&self, _input: &Value) -> Result<Value, EvaluationError> {
            Ok(Value::from(false))
        }
    }

    struct Celsius(i32);

    impl std::fmt::Display for Celsius {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}C", self.0)
        }
    }

    fn cells(report: &crate::report::Report) -> Vec<(String, String, String)> {
        report
            .rows()
            .iter()
            .map(|row| {
                (
                    row.input.type_label.clone(),
                    row.input.display.clone(),
                    row.result.result_cell(),
                )
            })
            .collect()
    }

    fn row(type_label: &str, display: &str, result: &str) -> (String, String, String) {
        (type_label.to_string(), display.to_string(), result.to_string())
    }

    #[test]
    fn test_is_true_on_mixed_inputs() {
        let inputs = [Value::from("hello"), Value::Null, Value::from(42)];
        let report = ReportBuilder::build("is_true", &IsTrue, None, &inputs);

        assert_eq!(
            cells(&report),
            vec![
                row("alloc::string::String", "hello", "true"),
                row("", "null", "false"),
                row("i32", "42", "true"),
            ]
        );
        let text = report.to_string();
        assert!(text.contains("<tr><td></td><td>null</td><td>false</td></tr>\n"));
    }

    #[test]
    fn test_one_row_per_input_in_order() {
        let inputs: Vec<Value> = (0..7).map(|i: i32| Value::from(i)).collect();
        let report = ReportBuilder::build("fragile", &Fragile, None, &inputs);

        let displays: Vec<String> = report.rows().iter().map(|r| r.input.display.clone()).collect();
        assert_eq!(displays, vec!["0", "1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_panic_is_contained_to_its_row() {
        let inputs = [Value::from(1), Value::from(-1), Value::from(2)];
        let report = ReportBuilder::build("fragile", &Fragile, None, &inputs);
        let rows = report.rows();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].result, ExecutionResult::Success(Value::from(true)));
        assert_eq!(rows[1].result.result_cell(), "Panic: negative input");
        assert_eq!(rows[2].result, ExecutionResult::Success(Value::from(true)));
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn test_tuple_inputs_render_per_component() {
        let inputs = [
            Value::tuple([Value::from(5), Value::from("a")]),
            Value::tuple([Value::from(1i64), Value::Null]),
            Value::Tuple(Vec::new()),
        ];
        let report = ReportBuilder::build("is_x_more_than_y", &IsXMoreThanY, None, &inputs);

        assert_eq!(
            cells(&report),
            vec![
                row(
                    "[i32, alloc::string::String]",
                    "[5, a]",
                    "TypeMismatch: cannot compare i32 with alloc::string::String",
                ),
                row("[i64, ]", "[1, null]", "false"),
                row(
                    "[]",
                    "[]",
                    "MalformedInput: IsXMoreThanY expects a tuple of 2 components but got 0",
                ),
            ]
        );
    }

    #[test]
    fn test_input_type_line_lists_every_component() {
        let report = ReportBuilder::build("is_x_more_than_y", &IsXMoreThanY, None, &[]);
        assert!(report
            .to_string()
            .contains("Input type:\n\n```\nopdoc::value::Value, opdoc::value::Value\n```\n\n"));
    }

    #[test]
    fn test_record_renders_whole() {
        let record = Record::new().with("age", 30).with("name", "alice");
        let report = ReportBuilder::build("untyped", &Untyped, None, &[Value::from(record)]);

        assert_eq!(
            cells(&report),
            vec![row(
                "opdoc::value::record::Record",
                "{age=30, name=alice}",
                "{age=30, name=alice}",
            )]
        );
    }

    #[test]
    fn test_missing_signature_uses_placeholder() {
        let report = ReportBuilder::build("untyped", &Untyped, None, &[Value::from(1)]);

        assert!(report
            .to_string()
            .contains(&format!("Input type:\n\n```\n{SIGNATURE_PLACEHOLDER}\n```\n\n")));
        assert_eq!(report.rows().len(), 1);
        assert!(report.rows()[0].result.is_success());
    }

    #[test]
    fn test_serialization_failure_uses_placeholder() {
        let target = Unserializable {
            grid: BTreeMap::from([((0, 0), 1)]),
        };
        let report = ReportBuilder::build("unserializable", &target, None, &[Value::from(1)]);

        assert!(report
            .sections()
            .iter()
            .any(|section| matches!(section, Section::SerializationUnavailable(_))));
        let text = report.to_string();
        assert!(text.contains(&format!("```\n{SERIALIZATION_PLACEHOLDER}: ")));
        assert!(!text.contains("```json"));
        assert!(text.contains("<tr><td>i32</td><td>1</td><td>false</td></tr>\n"));
    }

    #[test]
    fn test_reports_are_deterministic() {
        let inputs = [Value::from("hello"), Value::Null, Value::from(42)];
        let first = ReportBuilder::build("is_true", &IsTrue, Some("Truthiness."), &inputs);
        let second = ReportBuilder::build("is_true", &IsTrue, Some("Truthiness."), &inputs);
        assert_eq!(first.to_string(), second.to_string());
        assert!(first.to_string().ends_with(&format!("{DIVIDER}\n\n")));
    }

    #[test]
    fn test_consecutive_reports_share_a_sink() {
        let mut sink = Vec::new();
        ReportBuilder::write_report(&mut sink, "first", &IsTrue, None, &[Value::from(true)]).unwrap();
        ReportBuilder::write_report(&mut sink, "second", &IsTrue, None, &[Value::from(false)])
            .unwrap();
        let text = String::from_utf8(sink).unwrap();

        let first = text.find("### First").unwrap();
        let second = text.find("### Second").unwrap();
        assert!(first < second);
        assert_eq!(text.matches(DIVIDER).count(), 2);
    }

    #[test]
    fn test_signature_panic_uses_placeholder() {
        let report =
            ReportBuilder::build("broken_signature", &BrokenSignature, None, &[Value::from(1)]);

        assert!(report.sections().iter().any(|section| matches!(
            section,
            Section::InputType(Err(SignatureError::Panicked { message, .. }))
                if message == "no declared types"
        )));
        assert!(report
            .to_string()
            .contains(&format!("Input type:\n\n```\n{SIGNATURE_PLACEHOLDER}\n```\n\n")));
        assert_eq!(report.rows()[0].result.result_cell(), "true");
    }

    #[test]
    fn test_serialize_panic_uses_placeholder() {
        let report =
            ReportBuilder::build("broken_serialize", &BrokenSerialize, None, &[Value::from(1)]);

        let text = report.to_string();
        assert!(text.contains(&format!(
            "```\n{SERIALIZATION_PLACEHOLDER}: target panicked while serializing: no serial form"
        )));
        assert!(!text.contains("```rust"));
        assert!(text.contains("<tr><td>i32</td><td>1</td><td>false</td></tr>\n"));
    }

    #[test]
    fn test_custom_value_keeps_its_type_name() {
        let report =
            ReportBuilder::build("untyped", &Untyped, None, &[Value::custom(&Celsius(21))]);
        assert_eq!(
            cells(&report),
            vec![row(std::any::type_name::<Celsius>(), "21C", "21C")]
        );
    }
}
