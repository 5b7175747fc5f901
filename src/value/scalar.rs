// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Serialize, Serializer};
use std::any::type_name;
use std::cmp::Ordering;
use std::fmt;

/// A single, non-decomposable sample value.
///
/// Every variant knows its fully-qualified Rust type name, which is what the
/// report's `Type` column shows. `Custom` carries values of domain types that
/// are only known by their `Display` form.
#[derive(Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f64),
    Char(char),
    Text(String),
    Custom {
        type_name: &'static str,
        display: String,
    },
}

impl Scalar {
    /// Wrap any displayable value, labelled with its own type name.
    pub fn custom<T: fmt::Display + ?Sized + 'static>(value: &T) -> Self {
        Scalar::Custom {
            type_name: type_name::<T>(),
            display: value.to_string(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => type_name::<bool>(),
            Scalar::Int(_) => type_name::<i32>(),
            Scalar::Long(_) => type_name::<i64>(),
            Scalar::Float(_) => type_name::<f64>(),
            Scalar::Char(_) => type_name::<char>(),
            Scalar::Text(_) => type_name::<String>(),
            Scalar::Custom { type_name, .. } => type_name,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(i64::from(*v)),
            Scalar::Long(v) => Some(*v),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(v) => Some(f64::from(*v)),
            Scalar::Long(v) => Some(*v as f64),
            Scalar::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Order two scalars of compatible kinds.
    ///
    /// Integers of different widths compare exactly; any other numeric mix
    /// compares as `f64`. Values of unrelated kinds are incomparable.
    pub fn compare(&self, other: &Scalar) -> Option<Ordering> {
        if let (Some(left), Some(right)) = (self.as_i64(), other.as_i64()) {
            return Some(left.cmp(&right));
        }
        if let (Some(left), Some(right)) = (self.as_f64(), other.as_f64()) {
            return left.partial_cmp(&right);
        }
        match (self, other) {
            (Scalar::Bool(left), Scalar::Bool(right)) => Some(left.cmp(right)),
            (Scalar::Char(left), Scalar::Char(right)) => Some(left.cmp(right)),
            (Scalar::Text(left), Scalar::Text(right)) => Some(left.cmp(right)),
            _ => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(v) => *v,
            Scalar::Int(v) => *v != 0,
            Scalar::Long(v) => *v != 0,
            Scalar::Float(v) => *v != 0.0,
            Scalar::Char(_) => true,
            Scalar::Text(v) => !v.is_empty(),
            Scalar::Custom { display, .. } => !display.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Long(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Char(v) => write!(f, "{v}"),
            Scalar::Text(v) => f.write_str(v),
            Scalar::Custom { display, .. } => f.write_str(display),
        }
    }
}

// Literal-like debug output keeps the native serialized form readable.
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{v:?}"),
            Scalar::Int(v) => write!(f, "{v:?}"),
            Scalar::Long(v) => write!(f, "{v:?}i64"),
            Scalar::Float(v) => write!(f, "{v:?}"),
            Scalar::Char(v) => write!(f, "{v:?}"),
            Scalar::Text(v) => write!(f, "{v:?}"),
            Scalar::Custom { type_name, display } => write!(f, "{type_name}({display:?})"),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Bool(v) => serializer.serialize_bool(*v),
            Scalar::Int(v) => serializer.serialize_i32(*v),
            Scalar::Long(v) => serializer.serialize_i64(*v),
            Scalar::Float(v) => serializer.serialize_f64(*v),
            Scalar::Char(v) => serializer.serialize_char(*v),
            Scalar::Text(v) => serializer.serialize_str(v),
            Scalar::Custom { display, .. } => serializer.serialize_str(display),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_are_fully_qualified() {
        assert_eq!(Scalar::Text("a".to_string()).type_name(), "alloc::string::String");
        assert_eq!(Scalar::Int(1).type_name(), "i32");
        assert_eq!(Scalar::Long(1).type_name(), "i64");
        assert_eq!(Scalar::Bool(true).type_name(), "bool");
    }

    #[test]
    fn test_integer_widths_compare_exactly() {
        assert_eq!(Scalar::Int(5).compare(&Scalar::Long(5)), Some(Ordering::Equal));
        assert_eq!(Scalar::Long(i64::MAX).compare(&Scalar::Long(i64::MAX - 1)), Some(Ordering::Greater));
    }

    #[test]
    fn test_mixed_numeric_compares_as_float() {
        assert_eq!(Scalar::Int(2).compare(&Scalar::Float(2.5)), Some(Ordering::Less));
    }

    #[test]
    fn test_unrelated_kinds_are_incomparable() {
        assert_eq!(Scalar::Text("5".to_string()).compare(&Scalar::Int(5)), None);
        assert_eq!(Scalar::Bool(true).compare(&Scalar::Int(1)), None);
    }

    struct Celsius(i32);

    impl fmt::Display for Celsius {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}°C", self.0)
        }
    }

    #[test]
    fn test_custom_scalar_uses_own_type_name() {
        let scalar = Scalar::custom(&Celsius(21));
        assert!(scalar.type_name().ends_with("::Celsius"));
        assert_eq!(scalar.to_string(), "21°C");
    }
}
