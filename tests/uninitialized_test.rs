// This binary never installs a global handle (outside child processes), so
// it can observe the defined pre-initialization behavior.
use levelog::Severity;
use std::env;
use std::process::Command;

#[test]
fn test_no_handle_before_init() {
    assert!(levelog::handle().is_none());
    assert_eq!(levelog::current_level(), None);
}

#[test]
fn test_logging_before_init_is_a_silent_noop() {
    levelog::debug("dropped");
    levelog::info("dropped");
    levelog::warning("dropped");
    levelog::error("dropped");
    levelog::critical("dropped");
    levelog::log_at(Severity::Warn, "dropped");
    levelog::set_level(Severity::Debug);

    levelog::info!("dropped via macro: {}", 1);

    // Still uninstalled; set_level had nothing to update
    assert_eq!(levelog::current_level(), None);
}

#[test]
fn test_fatal_without_handle_still_exits() {
    if env::var("LEVELOG_UNINIT_FATAL").is_ok() {
        levelog::fatal!("no handle installed");
    }

    let output = Command::new(env::current_exe().unwrap())
        .arg("test_fatal_without_handle_still_exits")
        .arg("--exact")
        .arg("--nocapture")
        .env("LEVELOG_UNINIT_FATAL", "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
