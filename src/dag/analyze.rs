// src/dag/analyze.rs

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::dag::graph::DependencyGraph;
use crate::errors::{Result, TaskPathError};

/// Result of critical-path analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalPathResult {
    /// Sum of durations along the critical path, in seconds. This is the
    /// theoretical minimum completion time under unlimited parallelism.
    pub expected_runtime: u64,
    /// Task names along the critical path, in execution order.
    pub path: Vec<String>,
}

/// Compute a topological order of the graph.
///
/// Fails with [`TaskPathError::Cycle`] naming one task on a cycle if the
/// graph is not acyclic.
pub fn topological_order(graph: &DependencyGraph) -> Result<Vec<String>> {
    // Edge direction: dep -> dependent, matching the graph's contract.
    let mut pg: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in graph.tasks() {
        pg.add_node(name);
    }
    for name in graph.tasks() {
        for dep in graph.dependencies_of(name) {
            if dep.as_str() == name {
                return Err(TaskPathError::Cycle {
                    task: name.to_string(),
                });
            }
            pg.add_edge(dep.as_str(), name, ());
        }
    }

    match toposort(&pg, None) {
        Ok(order) => Ok(order.into_iter().map(|s| s.to_string()).collect()),
        Err(cycle) => Err(TaskPathError::Cycle {
            task: cycle.node_id().to_string(),
        }),
    }
}

/// Validate the graph and compute its critical path.
///
/// Runs a single dynamic-programming pass over a topological order: each
/// task's earliest finish is the maximum earliest finish among its
/// dependencies plus its own duration, and the critical path is recovered by
/// backtracking parent links from the task with the overall maximum earliest
/// finish.
///
/// Ties (equal earliest finish between candidate predecessors, or between
/// terminal candidates) break towards the lexicographically smallest task
/// name, so the reported path is deterministic. `expected_runtime` is
/// unaffected by tie-breaking.
pub fn analyze(graph: &DependencyGraph) -> Result<CriticalPathResult> {
    let order = topological_order(graph)?;

    let mut earliest_finish: HashMap<&str, u64> = HashMap::new();
    let mut parent: HashMap<&str, Option<&str>> = HashMap::new();

    for u in order.iter().map(|s| s.as_str()) {
        let mut best: Option<&str> = None;
        for p in graph.dependencies_of(u).iter().map(|s| s.as_str()) {
            best = Some(match best {
                None => p,
                Some(b) => {
                    let fp = finish_of(&earliest_finish, p);
                    let fb = finish_of(&earliest_finish, b);
                    if fp > fb || (fp == fb && p < b) { p } else { b }
                }
            });
        }

        let start = best.map(|p| finish_of(&earliest_finish, p)).unwrap_or(0);
        earliest_finish.insert(u, start + graph.duration_of(u));
        parent.insert(u, best);
    }

    // Terminal node: maximum earliest finish over all tasks.
    let mut terminal: Option<&str> = None;
    for u in order.iter().map(|s| s.as_str()) {
        terminal = Some(match terminal {
            None => u,
            Some(t) => {
                let fu = finish_of(&earliest_finish, u);
                let ft = finish_of(&earliest_finish, t);
                if fu > ft || (fu == ft && u < t) { u } else { t }
            }
        });
    }

    let Some(terminal) = terminal else {
        // Empty graph: nothing to schedule.
        return Ok(CriticalPathResult {
            expected_runtime: 0,
            path: Vec::new(),
        });
    };

    let mut path = Vec::new();
    let mut cur = Some(terminal);
    while let Some(u) = cur {
        path.push(u.to_string());
        cur = parent.get(u).copied().flatten();
    }
    path.reverse();

    let expected_runtime = finish_of(&earliest_finish, terminal);
    debug!(expected_runtime, path = ?path, "critical path computed");

    Ok(CriticalPathResult {
        expected_runtime,
        path,
    })
}

fn finish_of(earliest_finish: &HashMap<&str, u64>, name: &str) -> u64 {
    earliest_finish.get(name).copied().unwrap_or(0)
}
