// src/config/mod.rs

//! Task definition file loading.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a task file from disk (`loader.rs`).
//!
//! Semantic validation (durations, dependency resolution, acyclicity) lives
//! in the registry and DAG layers.

pub mod loader;
pub mod model;

pub use loader::load_from_path;
pub use model::{ConfigFile, TaskEntry};
