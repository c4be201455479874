use levelog::{Config, OutputTarget, Severity};
use serde_json::Value;
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn init_to_file(dir: &TempDir, level: Severity) -> std::path::PathBuf {
    let path = dir.path().join("global.log");
    levelog::init(
        Config::new(level)
            .with_output(OutputTarget::File(path.clone()))
            .with_error_output(OutputTarget::File(path.clone())),
    )
    .unwrap();
    path
}

fn read_lines(path: &Path) -> Vec<String> {
    if !path.exists() {
        return Vec::new();
    }
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
#[serial]
fn test_init_returns_installed_handle() {
    let dir = TempDir::new().unwrap();
    let path = init_to_file(&dir, Severity::Info);

    let handle = levelog::handle().unwrap();
    handle.info("through returned handle");
    levelog::info("through free function");

    assert_eq!(read_lines(&path).len(), 2);
    assert_eq!(levelog::current_level(), Some(Severity::Info));
}

#[test]
#[serial]
fn test_free_functions_respect_threshold() {
    let dir = TempDir::new().unwrap();
    let path = init_to_file(&dir, Severity::Warn);

    levelog::debug("dropped");
    levelog::info("dropped");
    levelog::warning("kept");
    levelog::error("kept");

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 2);
    let first: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(first["level"], "warn");
}

#[test]
#[serial]
fn test_set_level_is_process_wide() {
    let dir = TempDir::new().unwrap();
    let path = init_to_file(&dir, Severity::Error);

    levelog::debug("dropped");
    levelog::set_level(Severity::Debug);
    assert_eq!(levelog::current_level(), Some(Severity::Debug));
    levelog::debug("kept");

    let lines = read_lines(&path);
    // Change notice plus the debug record
    assert_eq!(lines.len(), 2);
    let notice: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(notice["msg"], "log level changed to debug");
}

#[test]
#[serial]
fn test_reinit_replaces_handle() {
    let first_dir = TempDir::new().unwrap();
    let first_path = init_to_file(&first_dir, Severity::Info);
    levelog::info("to first");

    let second_dir = TempDir::new().unwrap();
    let second_path = init_to_file(&second_dir, Severity::Debug);
    levelog::info("to second");

    assert_eq!(read_lines(&first_path).len(), 1);
    assert_eq!(read_lines(&second_path).len(), 1);
    assert_eq!(levelog::current_level(), Some(Severity::Debug));
}

#[test]
#[serial]
fn test_macros_format_arguments() {
    let dir = TempDir::new().unwrap();
    let path = init_to_file(&dir, Severity::Debug);

    let port = 9600;
    levelog::info!("listening on port {port}");
    levelog::warning!("{} retries left", 3);
    levelog::log_at!(Severity::Error, "status {}", 502);

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 3);
    let first: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(first["msg"], "listening on port 9600");
    let last: Value = serde_json::from_str(&lines[2]).unwrap();
    assert_eq!(last["level"], "error");
    assert_eq!(last["msg"], "status 502");
}

#[test]
#[serial]
fn test_init_with_level_uses_default_console_config() {
    let logger = levelog::init_with_level(Severity::Warn).unwrap();
    assert_eq!(logger.current_level(), Severity::Warn);
    assert_eq!(levelog::current_level(), Some(Severity::Warn));
}

#[test]
#[serial]
fn test_init_surfaces_build_failure_without_installing() {
    let dir = TempDir::new().unwrap();
    init_to_file(&dir, Severity::Info);

    let bad = Config::new(Severity::Info).with_message_key("");
    assert!(levelog::init(bad).is_err());

    // The previously installed handle survives a failed re-init
    assert_eq!(levelog::current_level(), Some(Severity::Info));
}
