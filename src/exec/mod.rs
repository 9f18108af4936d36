// src/exec/mod.rs

//! Concurrent task execution and timing reports.
//!
//! - [`executor`] owns the run: one Tokio task per unit, completion
//!   signalling via per-task watch channels.
//! - [`report`] holds the per-task timings and the Gantt-style renderer.

pub mod executor;
pub mod report;

pub use executor::{Executor, SleepWork, TaskOutcome, TaskWork};
pub use report::{ExecutionReport, TaskTiming};
