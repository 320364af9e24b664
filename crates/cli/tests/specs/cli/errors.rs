//! Failures surface as `error: ...` on stderr with exit code 1.

use crate::prelude::*;

#[test]
fn missing_input_file_fails() {
    let dir = LogDir::new();
    let missing = dir.join("nope.txt");

    let run = cli()
        .args(&["--dir", dir.path_str(), missing.to_str().unwrap()])
        .fails()
        .stderr_has("error:")
        .stderr_has("nope.txt");
    assert_eq!(run.code(), Some(1));
    assert!(!dir.exists("rotlog.log"), "no log opened before inputs");
}

#[test]
fn missing_config_file_fails() {
    let dir = LogDir::new();
    let config = dir.join("absent.toml");

    cli()
        .args(&["--dir", dir.path_str(), "--config", config.to_str().unwrap()])
        .fails()
        .stderr_has("error:")
        .stderr_has("absent.toml");
}

#[test]
fn unknown_level_flag_is_a_usage_error() {
    let dir = LogDir::new();

    let run = cli()
        .args(&["--dir", dir.path_str(), "--level", "loud"])
        .fails()
        .stderr_has("loud");
    assert_eq!(run.code(), Some(2), "clap usage errors exit 2");
}

#[test]
fn invalid_level_env_fails() {
    let dir = LogDir::new();

    cli()
        .args(&["--dir", dir.path_str()])
        .env("ROTLOG_LEVEL", "chatty")
        .fails()
        .stderr_has("error: invalid ROTLOG_LEVEL");
}

#[test]
fn base_name_with_separator_is_rejected() {
    let dir = LogDir::new();

    cli()
        .args(&["--dir", dir.path_str(), "--name", "sub/app.log"])
        .stdin("x\n")
        .fails()
        .stderr_has("error:");
}
