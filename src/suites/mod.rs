// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
pub mod operations;
pub mod predicates;

pub use factory::SuiteFactory;
pub use operations::{AddEdgeSuite, AddElementsFromHdfsSuite};
pub use predicates::PredicateSuite;
