use taskpath::config::{ConfigFile, TaskEntry};
use taskpath::registry::{TaskRegistry, TaskSpec};

/// Build a registry from `(name, duration_secs, deps)` triples.
pub fn registry(specs: &[(&str, u64, &[&str])]) -> TaskRegistry {
    TaskRegistry::from_specs(
        specs
            .iter()
            .map(|(name, duration, deps)| TaskSpec::new(*name, *duration, deps.iter().copied())),
    )
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: ConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: ConfigFile::default(),
        }
    }

    pub fn with_task(mut self, name: &str, duration: i64, after: &[&str]) -> Self {
        self.config.task.insert(
            name.to_string(),
            TaskEntry {
                duration,
                after: after.iter().map(|s| s.to_string()).collect(),
            },
        );
        self
    }

    pub fn build(self) -> ConfigFile {
        self.config
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
