use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

use taskpath::dag::DependencyGraph;
use taskpath::errors::TaskPathError;
use taskpath::exec::{Executor, TaskWork};
use taskpath::registry::TaskSpec;
use taskpath_test_utils::builders::registry;

/// Work that sleeps like the default implementation but fails selected tasks.
struct FailWork {
    failing: HashSet<String>,
}

impl FailWork {
    fn new(failing: &[&str]) -> Self {
        Self {
            failing: failing.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TaskWork for FailWork {
    fn run(&self, spec: &TaskSpec) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>> {
        let fails = self.failing.contains(&spec.name);
        let duration = spec.duration();
        let name = spec.name.clone();
        Box::pin(async move {
            tokio::time::sleep(duration).await;
            if fails {
                anyhow::bail!("task '{name}' exploded");
            }
            Ok(())
        })
    }
}

#[tokio::test(start_paused = true)]
async fn failed_task_blocks_transitive_dependents() {
    let reg = registry(&[
        ("a", 1, &[]),
        ("b", 1, &["a"]),
        ("c", 1, &["b"]),
        ("d", 1, &["c"]),
    ]);
    let graph = DependencyGraph::build(&reg).unwrap();

    let err = Executor::with_work(FailWork::new(&["b"]))
        .execute(&reg, &graph)
        .await
        .unwrap_err();

    match err {
        TaskPathError::ExecutionFailed { failed, blocked } => {
            assert_eq!(failed, vec!["b"]);
            assert_eq!(blocked, vec!["c", "d"]);
        }
        other => panic!("expected ExecutionFailed, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn independent_branch_still_completes_when_sibling_fails() {
    let reg = registry(&[("bad", 1, &[]), ("child", 1, &["bad"]), ("other", 2, &[])]);
    let graph = DependencyGraph::build(&reg).unwrap();

    let err = Executor::with_work(FailWork::new(&["bad"]))
        .execute(&reg, &graph)
        .await
        .unwrap_err();

    // "other" does not depend on the failing task, so it is neither failed
    // nor blocked.
    match err {
        TaskPathError::ExecutionFailed { failed, blocked } => {
            assert_eq!(failed, vec!["bad"]);
            assert_eq!(blocked, vec!["child"]);
        }
        other => panic!("expected ExecutionFailed, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn failing_root_blocks_whole_diamond() {
    let reg = registry(&[
        ("a", 1, &[]),
        ("b", 2, &["a"]),
        ("c", 3, &["a"]),
        ("d", 1, &["b", "c"]),
    ]);
    let graph = DependencyGraph::build(&reg).unwrap();

    let err = Executor::with_work(FailWork::new(&["a"]))
        .execute(&reg, &graph)
        .await
        .unwrap_err();

    match err {
        TaskPathError::ExecutionFailed { failed, blocked } => {
            assert_eq!(failed, vec!["a"]);
            assert_eq!(blocked, vec!["b", "c", "d"]);
        }
        other => panic!("expected ExecutionFailed, got {other:?}"),
    }
}
