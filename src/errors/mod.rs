// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod evaluation;
mod report;
mod suite;

pub use config::{ConfigError, ValidationError};
pub use evaluation::{EvaluationError, EvaluationErrorKind};
pub use report::{ReportError, SignatureError};
pub use suite::{OperationBuildError, SuiteError};
