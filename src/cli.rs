// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskpath`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskpath",
    version,
    about = "Schedule and run task DAGs, reporting the critical path and per-task timings.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task definition file (TOML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Validate the task graph and print the critical path and expected runtime.
    ///
    /// This is also the default when neither `--validate` nor `--run` is given.
    #[arg(long)]
    pub validate: bool,

    /// Execute the tasks concurrently and print the timing report.
    #[arg(long)]
    pub run: bool,

    /// Parse the task file and print tasks, but don't analyze or execute.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKPATH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
