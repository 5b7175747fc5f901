// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::Value;

/// A keyed tuple.
///
/// Records are the one tuple-like value that reports treat as a scalar: they
/// are shown whole, with their own type name, and never split into columns.
#[derive(Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_sorted_by_key() {
        let record = Record::new().with("b", 2).with("a", "x");
        assert_eq!(record.to_string(), "{a=x, b=2}");
    }

    #[test]
    fn test_empty_record_display() {
        assert_eq!(Record::new().to_string(), "{}");
    }

    #[test]
    fn test_null_entries_display_as_null() {
        let record = Record::new().with("missing", Value::Null);
        assert_eq!(record.to_string(), "{missing=null}");
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut record = Record::new().with("name", "alice");
        record.insert("name", "bob");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("name"), Some(&Value::from("bob")));
        assert_eq!(record.get("age"), None);
    }
}
