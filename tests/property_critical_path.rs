use std::collections::HashSet;

use proptest::prelude::*;
use taskpath::dag::{DependencyGraph, analyze};
use taskpath::registry::{TaskRegistry, TaskSpec};

// Strategy to generate a valid (acyclic) task registry.
// Acyclicity is guaranteed by only allowing task N to depend on tasks 0..N-1.
fn dag_registry_strategy(max_tasks: usize) -> impl Strategy<Value = TaskRegistry> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let durations = proptest::collection::vec(0u64..20, num_tasks);
        let raw_deps = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_tasks),
            num_tasks,
        );

        (durations, raw_deps).prop_map(|(durations, raw_deps)| {
            let mut specs = Vec::new();
            for (i, (duration, potential)) in durations.iter().zip(raw_deps).enumerate() {
                let mut dep_indices: HashSet<usize> = HashSet::new();
                for d in potential {
                    if i > 0 {
                        dep_indices.insert(d % i);
                    }
                }
                let mut deps: Vec<String> = dep_indices
                    .into_iter()
                    .map(|d| format!("task_{d:02}"))
                    .collect();
                deps.sort();
                specs.push(TaskSpec::new(format!("task_{i:02}"), *duration, deps));
            }
            TaskRegistry::from_specs(specs)
        })
    })
}

proptest! {
    #[test]
    fn critical_path_is_consistent(reg in dag_registry_strategy(10)) {
        let graph = DependencyGraph::build(&reg).expect("generated deps all exist");
        let first = analyze(&graph).expect("generated graph is acyclic");
        let second = analyze(&graph).expect("analysis is repeatable");

        // Deterministic result.
        prop_assert_eq!(&first, &second);

        // The path is non-empty, consecutive entries are real edges, and its
        // durations sum to the expected runtime.
        prop_assert!(!first.path.is_empty());
        let mut sum = 0u64;
        for (idx, name) in first.path.iter().enumerate() {
            sum += reg.get(name).expect("path names are registered tasks").duration_secs;
            if idx > 0 {
                let prev = &first.path[idx - 1];
                prop_assert!(graph.dependencies_of(name).contains(prev));
            }
        }
        prop_assert_eq!(sum, first.expected_runtime);

        // The critical path is at least as long as any single task.
        let max_duration = reg.iter().map(|s| s.duration_secs).max().unwrap_or(0);
        prop_assert!(first.expected_runtime >= max_duration);
    }
}
