// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Layout markers that downstream doc tooling keys on. Do not change.

/// Marks the boundary between reports
pub const DIVIDER: &str = "-----------------------------------------------";
/// Shown on the `Input type:` line when a target has no usable signature
pub const SIGNATURE_PLACEHOLDER: &str = "unknown";
/// Shown instead of the code blocks when a target cannot be serialized
pub const SERIALIZATION_PLACEHOLDER: &str = "serialized form unavailable";
/// Header row of the example inputs table
pub const TABLE_HEADER: &str = "<tr><th>Type</th><th>Input</th><th>Result</th></tr>";
/// Prefix of the python form of a target
pub const PYTHON_MODULE_ALIAS: &str = "g";
