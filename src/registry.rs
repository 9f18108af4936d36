// src/registry.rs

//! The task registry: validated, immutable task specifications.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::model::ConfigFile;
use crate::errors::{Result, TaskPathError};

/// A single named task: how long it runs and which tasks must finish first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub name: String,
    /// Simulated work time in whole seconds.
    pub duration_secs: u64,
    /// Names of tasks that must complete before this one starts.
    pub deps: Vec<String>,
}

impl TaskSpec {
    pub fn new(
        name: impl Into<String>,
        duration_secs: u64,
        deps: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            duration_secs,
            deps: deps.into_iter().map(Into::into).collect(),
        }
    }

    /// Declared duration as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }
}

/// Immutable mapping from task name to its [`TaskSpec`].
///
/// Built once from a loaded task file (or directly from specs in tests) and
/// then shared read-only by the graph builder, analyzer and executor. Keyed
/// by a `BTreeMap` so iteration order is deterministic.
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: BTreeMap<String, TaskSpec>,
}

impl TaskRegistry {
    /// Build a registry from a parsed task file.
    ///
    /// Fails with [`TaskPathError::NoTasks`] on an empty task table and with
    /// [`TaskPathError::InvalidDuration`] on a negative duration. Dependency
    /// resolution is left to the graph builder.
    pub fn from_config(cfg: &ConfigFile) -> Result<Self> {
        if cfg.task.is_empty() {
            return Err(TaskPathError::NoTasks);
        }

        let mut tasks = BTreeMap::new();
        for (name, entry) in cfg.task.iter() {
            let duration_secs =
                u64::try_from(entry.duration).map_err(|_| TaskPathError::InvalidDuration {
                    task: name.clone(),
                    raw: entry.duration.to_string(),
                })?;

            tasks.insert(
                name.clone(),
                TaskSpec {
                    name: name.clone(),
                    duration_secs,
                    deps: entry.after.clone(),
                },
            );
        }

        Ok(Self { tasks })
    }

    /// Build a registry directly from specs.
    ///
    /// Later specs with the same name overwrite earlier ones (last write
    /// wins).
    pub fn from_specs(specs: impl IntoIterator<Item = TaskSpec>) -> Self {
        let mut tasks = BTreeMap::new();
        for spec in specs {
            tasks.insert(spec.name.clone(), spec);
        }
        Self { tasks }
    }

    pub fn get(&self, name: &str) -> Option<&TaskSpec> {
        self.tasks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    /// Iterate specs in name order.
    pub fn iter(&self) -> impl Iterator<Item = &TaskSpec> {
        self.tasks.values()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
