// src/logging.rs

//! Logging setup for `taskpath` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log filter:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `TASKPATH_LOG` environment variable, interpreted as an `EnvFilter`
//!    directive (e.g. "debug", or "taskpath=trace")
//! 3. default to `info`

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

/// Initialise the global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(lvl) => EnvFilter::new(directive_for(lvl)),
        None => {
            EnvFilter::try_from_env("TASKPATH_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
        }
    };

    fmt().with_env_filter(filter).with_target(true).init();

    Ok(())
}

fn directive_for(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
