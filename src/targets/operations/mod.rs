// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod add_edge;
pub mod add_elements_from_hdfs;

pub use add_edge::AddEdge;
pub use add_elements_from_hdfs::{
    AddElementsFromHdfs, AddElementsFromHdfsBuilder, JobInitialiser, TEXT_MAPPER_GENERATOR,
};
