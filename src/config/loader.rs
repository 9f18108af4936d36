// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::ConfigFile;
use crate::errors::Result;

/// Load a task definition file from disk.
///
/// This only performs TOML deserialization; semantic validation (durations,
/// dependency resolution, acyclicity) happens when the registry and graph
/// are built from the returned [`ConfigFile`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let config: ConfigFile = toml::from_str(&contents)?;
    Ok(config)
}
