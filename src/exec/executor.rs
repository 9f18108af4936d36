// src/exec/executor.rs

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::dag::analyze::topological_order;
use crate::dag::graph::DependencyGraph;
use crate::errors::{Result, TaskPathError};
use crate::exec::report::{ExecutionReport, TaskTiming};
use crate::registry::{TaskRegistry, TaskSpec};

/// Terminal outcome of one task unit, as observed by its dependents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Success,
    Failed,
}

/// Trait abstracting what a task actually does when it runs.
///
/// Production code uses [`SleepWork`]; tests can provide implementations
/// that fail selected tasks or record invocations.
pub trait TaskWork: Send + Sync + 'static {
    fn run(&self, spec: &TaskSpec) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;
}

/// Default work: sleep for the task's declared duration.
pub struct SleepWork;

impl TaskWork for SleepWork {
    fn run(&self, spec: &TaskSpec) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>> {
        let duration = spec.duration();
        Box::pin(async move {
            tokio::time::sleep(duration).await;
            Ok(())
        })
    }
}

/// What one spawned unit reports back to the executor.
enum UnitResult {
    Completed { name: String, timing: TaskTiming },
    Failed { name: String },
    Blocked { name: String, failed_dep: String },
}

/// Concurrent DAG executor.
///
/// Every task is spawned as its own Tokio task up front, in topological
/// order. A unit awaits one completion channel per dependency before it
/// starts; waiting parks the unit without occupying a worker thread, so a
/// waiting task can never starve its own dependency out of the pool,
/// regardless of graph width.
pub struct Executor {
    work: Arc<dyn TaskWork>,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor {
    /// Executor with the default sleep-for-duration work.
    pub fn new() -> Self {
        Self {
            work: Arc::new(SleepWork),
        }
    }

    /// Executor with custom task work.
    pub fn with_work(work: impl TaskWork) -> Self {
        Self {
            work: Arc::new(work),
        }
    }

    /// Run every task in the graph, respecting dependency order.
    ///
    /// Fails with [`TaskPathError::Cycle`] before anything is spawned if the
    /// graph is cyclic, and with [`TaskPathError::ExecutionFailed`] if any
    /// unit's work fails. Dependents of a failed task never start and are
    /// reported as blocked.
    pub async fn execute(
        &self,
        registry: &TaskRegistry,
        graph: &DependencyGraph,
    ) -> Result<ExecutionReport> {
        let order = topological_order(graph)?;

        // One completion channel per task. The sender moves into the unit;
        // dependents hold receiver clones.
        let mut senders: HashMap<String, watch::Sender<Option<TaskOutcome>>> = HashMap::new();
        let mut receivers: HashMap<String, watch::Receiver<Option<TaskOutcome>>> = HashMap::new();
        for name in &order {
            let (tx, rx) = watch::channel(None);
            senders.insert(name.clone(), tx);
            receivers.insert(name.clone(), rx);
        }

        let epoch = Instant::now();
        info!(tasks = order.len(), "starting execution run");

        let mut units = JoinSet::new();
        for name in &order {
            let spec = registry
                .get(name)
                .cloned()
                .ok_or_else(|| anyhow!("graph/registry mismatch: task '{name}' not registered"))?;

            let dep_rxs: Vec<(String, watch::Receiver<Option<TaskOutcome>>)> = graph
                .dependencies_of(name)
                .iter()
                .filter_map(|dep| receivers.get(dep).map(|rx| (dep.clone(), rx.clone())))
                .collect();

            let done_tx = senders
                .remove(name)
                .ok_or_else(|| anyhow!("missing completion channel for task '{name}'"))?;

            let work = Arc::clone(&self.work);
            units.spawn(run_unit(spec, dep_rxs, done_tx, work, epoch));
        }
        drop(receivers);

        let mut timings: HashMap<String, TaskTiming> = HashMap::new();
        let mut failed: Vec<String> = Vec::new();
        let mut blocked: Vec<String> = Vec::new();

        while let Some(joined) = units.join_next().await {
            match joined {
                Ok(UnitResult::Completed { name, timing }) => {
                    timings.insert(name, timing);
                }
                Ok(UnitResult::Failed { name }) => {
                    failed.push(name);
                }
                Ok(UnitResult::Blocked { name, failed_dep }) => {
                    debug!(task = %name, dep = %failed_dep, "task blocked by failed dependency");
                    blocked.push(name);
                }
                Err(join_err) => {
                    // A panicked unit dropped its sender, so its waiters have
                    // already observed a failure; record the unit itself too.
                    error!(error = %join_err, "task unit panicked");
                    failed.push(format!("<panicked: {join_err}>"));
                }
            }
        }

        let total_elapsed = epoch.elapsed();

        if !failed.is_empty() || !blocked.is_empty() {
            failed.sort();
            blocked.sort();
            return Err(TaskPathError::ExecutionFailed { failed, blocked });
        }

        info!(
            total_secs = total_elapsed.as_secs_f64(),
            "execution run finished"
        );
        Ok(ExecutionReport::new(total_elapsed, timings))
    }
}

/// One task unit: wait for all dependencies, run the work, signal completion.
async fn run_unit(
    spec: TaskSpec,
    mut dep_rxs: Vec<(String, watch::Receiver<Option<TaskOutcome>>)>,
    done_tx: watch::Sender<Option<TaskOutcome>>,
    work: Arc<dyn TaskWork>,
    epoch: Instant,
) -> UnitResult {
    for (dep_name, rx) in dep_rxs.iter_mut() {
        let outcome = match rx.wait_for(|o| o.is_some()).await {
            Ok(value) => (*value).unwrap_or(TaskOutcome::Failed),
            // Sender dropped without a terminal value: the dependency's unit
            // panicked. Treat it as failed.
            Err(_) => TaskOutcome::Failed,
        };

        if outcome == TaskOutcome::Failed {
            warn!(task = %spec.name, dep = %dep_name, "dependency failed; not starting");
            let _ = done_tx.send(Some(TaskOutcome::Failed));
            return UnitResult::Blocked {
                name: spec.name,
                failed_dep: dep_name.clone(),
            };
        }
    }

    let start_offset = epoch.elapsed();
    info!(task = %spec.name, duration_secs = spec.duration_secs, "task started");

    let result = work.run(&spec).await;
    let end_offset = epoch.elapsed();

    match result {
        Ok(()) => {
            info!(task = %spec.name, end_secs = end_offset.as_secs_f64(), "task finished");
            let _ = done_tx.send(Some(TaskOutcome::Success));
            UnitResult::Completed {
                name: spec.name,
                timing: TaskTiming {
                    start_offset,
                    end_offset,
                },
            }
        }
        Err(err) => {
            warn!(task = %spec.name, error = %err, "task work failed");
            let _ = done_tx.send(Some(TaskOutcome::Failed));
            UnitResult::Failed { name: spec.name }
        }
    }
}
