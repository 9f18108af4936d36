// src/dag/mod.rs

//! DAG representation and analysis.
//!
//! - [`graph`] holds the directed dependency graph of tasks.
//! - [`analyze`] validates acyclicity and computes the critical path.

pub mod analyze;
pub mod graph;

pub use analyze::{CriticalPathResult, analyze, topological_order};
pub use graph::DependencyGraph;
