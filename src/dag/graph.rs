// src/dag/graph.rs

use std::collections::BTreeMap;

use crate::errors::{Result, TaskPathError};
use crate::registry::TaskRegistry;

/// Internal node structure: duration plus direct dependencies.
#[derive(Debug, Clone)]
struct DagNode {
    duration_secs: u64,
    /// Direct dependencies: tasks that must finish before this one starts.
    deps: Vec<String>,
}

/// Directed dependency graph keyed by task name.
///
/// Edges point from a dependency to its dependent: an edge `u -> v` means
/// "u must finish before v starts". The graph is built once from a
/// [`TaskRegistry`] and never mutated afterwards. Acyclicity is checked by
/// the analyzer, not here.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: BTreeMap<String, DagNode>,
}

impl DependencyGraph {
    /// Build a graph from a registry.
    ///
    /// Fails with [`TaskPathError::UnknownDependency`] on the first
    /// dependency reference that is not a registry key; no partial graph is
    /// returned.
    pub fn build(registry: &TaskRegistry) -> Result<Self> {
        let mut nodes: BTreeMap<String, DagNode> = BTreeMap::new();

        for spec in registry.iter() {
            for dep in &spec.deps {
                if !registry.contains(dep) {
                    return Err(TaskPathError::UnknownDependency {
                        task: spec.name.clone(),
                        missing: dep.clone(),
                    });
                }
            }

            nodes.insert(
                spec.name.clone(),
                DagNode {
                    duration_secs: spec.duration_secs,
                    deps: spec.deps.clone(),
                },
            );
        }

        Ok(Self { nodes })
    }

    /// All task names, in lexicographic order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Declared duration of a task in seconds (0 for unknown names).
    pub fn duration_of(&self, name: &str) -> u64 {
        self.nodes.get(name).map(|n| n.duration_secs).unwrap_or(0)
    }

    /// Immediate dependencies of a task.
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.nodes
            .get(name)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }
}
