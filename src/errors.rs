// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

/// Errors surfaced by registry construction, graph building, analysis and
/// execution.
///
/// Structural errors (`UnknownDependency`, `Cycle`, `InvalidDuration`,
/// `NoTasks`) are detected before any execution begins; `ExecutionFailed` is
/// the single aggregated error for a run in which task work failed.
#[derive(Error, Debug)]
pub enum TaskPathError {
    #[error("task '{task}' depends on unknown task '{missing}'")]
    UnknownDependency { task: String, missing: String },

    #[error("cycle detected in task dependencies involving '{task}'")]
    Cycle { task: String },

    #[error("task '{task}' has invalid duration '{raw}' (expected a non-negative integer number of seconds)")]
    InvalidDuration { task: String, raw: String },

    #[error("task file must define at least one [task.<name>] section")]
    NoTasks,

    #[error("execution failed: failed tasks {failed:?}, blocked tasks {blocked:?}")]
    ExecutionFailed {
        failed: Vec<String>,
        blocked: Vec<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TaskPathError>;
