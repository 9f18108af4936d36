// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod registry;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_from_path;
use crate::dag::{CriticalPathResult, DependencyGraph, analyze};
use crate::exec::{ExecutionReport, Executor};
use crate::registry::TaskRegistry;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - task file loading
/// - registry + dependency graph construction
/// - critical-path analysis (`--validate`)
/// - concurrent execution (`--run`)
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_from_path(&args.file)?;
    let registry = TaskRegistry::from_config(&cfg)?;
    let graph = DependencyGraph::build(&registry)?;

    info!(tasks = registry.len(), file = %args.file.display(), "task definitions loaded");

    if args.dry_run {
        print_dry_run(&registry);
        return Ok(());
    }

    // Default to validation when no mode was requested.
    if args.validate || !args.run {
        let result = analyze(&graph)?;
        print_validation(&result);
    }

    if args.run {
        let expected = analyze(&graph)?;
        let report = Executor::new().execute(&registry, &graph).await?;
        print_run_report(&expected, &report);
    }

    Ok(())
}

fn print_validation(result: &CriticalPathResult) {
    println!("Task list is valid");
    println!("Critical path: {}", result.path.join(" -> "));
    println!(
        "Expected total runtime: {:.2} seconds",
        result.expected_runtime as f64
    );
}

fn print_run_report(expected: &CriticalPathResult, report: &ExecutionReport) {
    let expected_secs = expected.expected_runtime as f64;
    let actual_secs = report.total_elapsed.as_secs_f64();

    println!();
    print!("{}", report.render_summary());
    println!();
    println!("Expected runtime: {expected_secs:.2} seconds");
    println!("Actual runtime:   {actual_secs:.2} seconds");
    println!("Difference:       {:.2} seconds", actual_secs - expected_secs);
}

/// Simple dry-run output: print tasks, durations and dependencies.
fn print_dry_run(registry: &TaskRegistry) {
    println!("taskpath dry-run");
    println!();
    println!("tasks ({}):", registry.len());
    for spec in registry.iter() {
        println!("  - {}", spec.name);
        println!("      duration: {}s", spec.duration_secs);
        if !spec.deps.is_empty() {
            println!("      after: {:?}", spec.deps);
        }
    }

    debug!("dry-run complete (no execution)");
}
