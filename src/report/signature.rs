// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use super::runner::contain;
use crate::errors::SignatureError;
use crate::traits::ExampleTarget;

/// Ordered, non-empty list of the type names a target accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(Vec<&'static str>);

impl Signature {
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn type_names(&self) -> &[&'static str] {
        &self.0
    }
}

/// Comma-joined, as shown on the `Input type:` line.
///
/// Generic names such as `HashMap<i32, i32>` are written without the space
/// after their inner commas, so `", "` only ever separates arguments.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&name.replace(", ", ","))?;
        }
        Ok(())
    }
}

/// Resolve the input signature a target declares.
///
/// A panic inside the target's `input_types` is reported as
/// [`SignatureError::Panicked`].
pub fn input_signature_of(target: &dyn ExampleTarget) -> Result<Signature, SignatureError> {
    let types = contain(|| target.input_types()).map_err(|message| SignatureError::Panicked {
        target: target.name().to_string(),
        message,
    })?;
    if types.is_empty() {
        return Err(SignatureError::Unavailable {
            target: target.name().to_string(),
        });
    }
    if let Some(position) = types.iter().position(|name| name.trim().is_empty()) {
        return Err(SignatureError::BlankTypeName {
            target: target.name().to_string(),
            position,
        });
    }
    Ok(Signature(types))
}
