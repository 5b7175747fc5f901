// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! One suite per built-in predicate.

use crate::errors::SuiteError;
use crate::targets::predicates::*;
use crate::traits::{Example, ExampleSuite};
use crate::value::{Record, Value};

/// A predicate suite: static metadata plus the function that builds its examples.
#[derive(Debug, Clone, Copy)]
pub struct PredicateSuite {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    build: fn() -> Vec<Example>,
}

impl PredicateSuite {
    pub fn find(id: &str) -> Option<&'static PredicateSuite> {
        PREDICATE_SUITES.iter().find(|suite| suite.id == id)
    }

    pub fn ids() -> impl Iterator<Item = &'static str> {
        PREDICATE_SUITES.iter().map(|suite| suite.id)
    }
}

impl ExampleSuite for PredicateSuite {
    fn id(&self) -> &'static str {
        self.id
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn description(&self) -> Option<&str> {
        Some(self.description)
    }

    fn examples(&self) -> Result<Vec<Example>, SuiteError> {
        Ok((self.build)())
    }
}

static PREDICATE_SUITES: &[PredicateSuite] = &[
    PredicateSuite {
        id: "is_more_than",
        title: "IsMoreThan",
        description: "Checks if a comparable value is more than a provided value.",
        build: is_more_than,
    },
    PredicateSuite {
        id: "is_less_than",
        title: "IsLessThan",
        description: "Checks if a comparable value is less than a provided value.",
        build: is_less_than,
    },
    PredicateSuite {
        id: "is_equal",
        title: "IsEqual",
        description: "Checks if a value is equal to a provided value.",
        build: is_equal,
    },
    PredicateSuite {
        id: "is_in",
        title: "IsIn",
        description: "Checks if a value is in a provided set of allowed values.",
        build: is_in,
    },
    PredicateSuite {
        id: "exists",
        title: "Exists",
        description: "Checks if a value is not null.",
        build: exists,
    },
    PredicateSuite {
        id: "is_a",
        title: "IsA",
        description: "Checks if a value has a given type.",
        build: is_a,
    },
    PredicateSuite {
        id: "regex",
        title: "Regex",
        description: "Checks if a string matches a regular expression pattern. \
                      The whole string must match.",
        build: regex,
    },
    PredicateSuite {
        id: "is_true",
        title: "IsTrue",
        description: "Checks if a value is truthy: true, a non-zero number, \
                      or non-empty text, tuple or record.",
        build: is_true,
    },
    PredicateSuite {
        id: "are_equal",
        title: "AreEqual",
        description: "Checks if the two components of a tuple are equal.",
        build: are_equal,
    },
    PredicateSuite {
        id: "is_x_more_than_y",
        title: "IsXMoreThanY",
        description: "Checks if the first component of a tuple is more than the second.",
        build: is_x_more_than_y,
    },
    PredicateSuite {
        id: "not",
        title: "Not",
        description: "Wraps a predicate and negates its result.",
        build: not,
    },
];

fn values<const N: usize>(items: [Value; N]) -> Vec<Value> {
    Vec::from(items)
}

fn pairs<const N: usize>(items: [(Value, Value); N]) -> Vec<Value> {
    items
        .into_iter()
        .map(|(x, y)| Value::tuple([x, y]))
        .collect()
}

fn is_more_than() -> Vec<Example> {
    vec![
        Example::evaluated(
            "is_more_than_5",
            IsMoreThan::new(5),
            values([1.into(), 5.into(), 10.into()]),
        ),
        Example::evaluated(
            "is_more_than_or_equal_to_5",
            IsMoreThan::or_equal_to(5),
            values([1.into(), 5.into(), 10.into()]),
        ),
        Example::evaluated(
            "is_more_than_a_long_5",
            IsMoreThan::new(5i64),
            values([1i64.into(), 5i64.into(), 10i64.into(), 10.into()]),
        ),
        Example::evaluated(
            "is_more_than_a_string",
            IsMoreThan::new("B"),
            values(["A".into(), "B".into(), "C".into(), 1.into()]),
        ),
    ]
}

fn is_less_than() -> Vec<Example> {
    vec![
        Example::evaluated(
            "is_less_than_5",
            IsLessThan::new(5),
            values([1.into(), 5.into(), 10.into()]),
        ),
        Example::evaluated(
            "is_less_than_or_equal_to_5",
            IsLessThan::or_equal_to(5),
            values([1.into(), 5.into(), 10.into()]),
        ),
        Example::evaluated(
            "is_less_than_a_string",
            IsLessThan::new("B"),
            values(["A".into(), "B".into(), "C".into(), Value::Null]),
        ),
    ]
}

fn is_equal() -> Vec<Example> {
    vec![
        Example::evaluated(
            "is_equal_to_the_string_test",
            IsEqual::new("test"),
            values(["test".into(), "a different value".into(), Value::Null, 123.into()]),
        ),
        Example::evaluated(
            "is_equal_to_5",
            IsEqual::new(5),
            values([5.into(), 5i64.into(), 5.0.into(), "5".into()]),
        ),
    ]
}

fn is_in() -> Vec<Example> {
    vec![Example::evaluated(
        "is_in_set",
        IsIn::new([Value::from(5), Value::from(5i64), Value::from("value1")]),
        values([5.into(), 5i64.into(), "value1".into(), "value2".into(), Value::Null]),
    )]
}

fn exists() -> Vec<Example> {
    vec![Example::evaluated(
        "exists",
        Exists,
        values([1.into(), Value::Null, "".into(), "abc".into()]),
    )]
}

fn is_a() -> Vec<Example> {
    vec![
        Example::evaluated(
            "is_a_string",
            IsA::of::<String>(),
            values([1.into(), 2.5.into(), "abc".into(), Value::Null]),
        ),
        Example::evaluated(
            "is_a_record",
            IsA::of::<Record>(),
            values([
                Record::new().with("name", "alice").with("age", 30).into(),
                "alice".into(),
            ]),
        ),
    ]
}

fn regex() -> Vec<Example> {
    vec![
        Example::evaluated(
            "regex_with_pattern",
            Regex::new("t.*"),
            values(["test".into(), "tic".into(), "pretty".into(), 1.into()]),
        ),
        Example::evaluated(
            "regex_with_invalid_pattern",
            Regex::new("[a-z"),
            values(["a".into()]),
        )
        .with_description("An invalid pattern fails every input."),
    ]
}

fn is_true() -> Vec<Example> {
    vec![Example::evaluated(
        "is_true",
        IsTrue,
        values([
            true.into(),
            false.into(),
            "hello".into(),
            Value::Null,
            42.into(),
            0.into(),
        ]),
    )]
}

fn are_equal() -> Vec<Example> {
    vec![Example::evaluated(
        "are_equal",
        AreEqual,
        pairs([
            (1.into(), 1.0.into()),
            (2.5.into(), 2.5.into()),
            ("abc".into(), "abc".into()),
            ("abc".into(), "xyz".into()),
            (Value::Null, Value::Null),
        ]),
    )]
}

fn is_x_more_than_y() -> Vec<Example> {
    let mut inputs = pairs([
        (5.into(), 1.into()),
        (5i64.into(), 1i64.into()),
        (5.into(), 6.into()),
        ("bcd".into(), "abc".into()),
        (1.into(), "a".into()),
    ]);
    inputs.push(Value::tuple([Value::from(1), Value::from(2), Value::from(3)]));
    vec![Example::evaluated("is_x_more_than_y", IsXMoreThanY, inputs)]
}

fn not() -> Vec<Example> {
    vec![
        Example::evaluated(
            "does_not_exist",
            Not::new(Exists),
            values([1.into(), Value::Null, "".into(), "abc".into()]),
        ),
        Example::evaluated(
            "are_not_equal",
            Not::new(AreEqual),
            pairs([
                (1.into(), 1.0.into()),
                (2.5.into(), 2.5.into()),
                ("abc".into(), "abc".into()),
                ("abc".into(), "xyz".into()),
            ]),
        ),
    ]
}
