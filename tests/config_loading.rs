use std::io::Write;

use taskpath::config::load_from_path;
use taskpath::errors::TaskPathError;
use taskpath::registry::TaskRegistry;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn loads_tasks_with_durations_and_deps() {
    let file = write_config(
        r#"
[task.fetch]
duration = 2

[task.build]
duration = 3
after = ["fetch"]
"#,
    );

    let cfg = load_from_path(file.path()).unwrap();
    let registry = TaskRegistry::from_config(&cfg).unwrap();

    assert_eq!(registry.len(), 2);
    let build = registry.get("build").unwrap();
    assert_eq!(build.duration_secs, 3);
    assert_eq!(build.deps, vec!["fetch"]);
    assert!(registry.get("fetch").unwrap().deps.is_empty());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("[task.broken\nduration = 1");

    assert!(matches!(
        load_from_path(file.path()),
        Err(TaskPathError::Toml(_))
    ));
}

#[test]
fn missing_duration_is_a_parse_error() {
    let file = write_config("[task.x]\nafter = []\n");

    assert!(matches!(
        load_from_path(file.path()),
        Err(TaskPathError::Toml(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        load_from_path("/nonexistent/Tasks.toml"),
        Err(TaskPathError::Io(_))
    ));
}
