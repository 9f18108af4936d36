// src/exec/report.rs

use std::collections::HashMap;
use std::fmt::Write as _;
use std::time::Duration;

/// Start/end offsets of one task relative to the run epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTiming {
    pub start_offset: Duration,
    pub end_offset: Duration,
}

impl TaskTiming {
    /// Measured wall-clock duration of the task.
    pub fn elapsed(&self) -> Duration {
        self.end_offset.saturating_sub(self.start_offset)
    }
}

/// Aggregate timing report for one execution run.
#[derive(Debug, Clone, Default)]
pub struct ExecutionReport {
    /// Total wall-clock time from the run epoch until the last task finished.
    pub total_elapsed: Duration,
    timings: HashMap<String, TaskTiming>,
}

impl ExecutionReport {
    pub fn new(total_elapsed: Duration, timings: HashMap<String, TaskTiming>) -> Self {
        Self {
            total_elapsed,
            timings,
        }
    }

    /// Timing of a single task, if it ran.
    pub fn timing_of(&self, name: &str) -> Option<&TaskTiming> {
        self.timings.get(name)
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }

    /// All timings sorted by start offset (task name as tie-break).
    pub fn timings_by_start(&self) -> Vec<(&str, TaskTiming)> {
        let mut rows: Vec<(&str, TaskTiming)> = self
            .timings
            .iter()
            .map(|(name, timing)| (name.as_str(), *timing))
            .collect();
        rows.sort_by(|a, b| {
            a.1.start_offset
                .cmp(&b.1.start_offset)
                .then_with(|| a.0.cmp(b.0))
        });
        rows
    }

    /// Render a Gantt-style summary, one line per task in start order.
    pub fn render_summary(&self) -> String {
        let mut out = String::from("Gantt summary (all times in seconds):\n");
        for (name, timing) in self.timings_by_start() {
            let _ = writeln!(
                out,
                "{:<12} | start: {:>6.2}  end: {:>6.2}  duration: {:>6.2}",
                name,
                timing.start_offset.as_secs_f64(),
                timing.end_offset.as_secs_f64(),
                timing.elapsed().as_secs_f64(),
            );
        }
        out
    }
}
