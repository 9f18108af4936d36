// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level task file as read from TOML.
///
/// ```toml
/// [task.fetch]
/// duration = 2
///
/// [task.build]
/// duration = 3
/// after = ["fetch"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// All tasks from `[task.<name>]`, keyed by task name.
    ///
    /// A `BTreeMap` so duplicate keys are last-write-wins at the TOML level
    /// and iteration order is deterministic.
    #[serde(default)]
    pub task: BTreeMap<String, TaskEntry>,
}

/// `[task.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskEntry {
    /// Simulated work time in whole seconds.
    ///
    /// Deserialized as a signed integer so that a negative value surfaces as
    /// a typed `InvalidDuration` error during registry construction instead
    /// of an opaque serde error.
    pub duration: i64,

    /// Dependency list: this task waits for all tasks listed here.
    #[serde(default)]
    pub after: Vec<String>,
}
