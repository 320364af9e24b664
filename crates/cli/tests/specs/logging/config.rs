//! Settings loaded from a TOML file, layered under flags and environment.

use crate::prelude::*;

#[test]
fn config_file_sets_folder_and_name() {
    let dir = LogDir::new();
    let logs = dir.join("logs");
    let config = dir.file(
        "rotlog.toml",
        &format!(
            "folder = {:?}\nbase_file_name = \"app.log\"\nlevel = \"error\"\n",
            logs.to_str().unwrap()
        ),
    );

    cli()
        .args(&["--config", config.to_str().unwrap(), "--input-level", "error"])
        .stdin("kept\n")
        .passes();

    let lines = std::fs::read_to_string(logs.join("app.log")).unwrap();
    assert_eq!(lines.lines().count(), 1);
    assert!(lines.ends_with("[ERROR] kept\n"));
}

#[test]
fn config_from_environment_path() {
    let dir = LogDir::new();
    let config = dir.file("cfg.toml", "base_file_name = \"env.log\"\n");

    cli()
        .args(&["--dir", dir.path_str()])
        .env("ROTLOG_CONFIG", &config)
        .stdin("x\n")
        .passes();

    assert_eq!(dir.messages("env.log"), ["x"]);
}

#[test]
fn flags_override_config_file() {
    let dir = LogDir::new();
    let config = dir.file("cfg.toml", "base_file_name = \"file.log\"\nlevel = \"error\"\n");

    cli()
        .args(&[
            "--dir",
            dir.path_str(),
            "--config",
            config.to_str().unwrap(),
            "--name",
            "flag.log",
            "--level",
            "debug",
        ])
        .stdin("x\n")
        .passes();

    assert_eq!(dir.messages("flag.log"), ["x"]);
    assert!(!dir.exists("file.log"));
}

#[test]
fn unknown_config_key_fails() {
    let dir = LogDir::new();
    let config = dir.file("cfg.toml", "colour = \"red\"\n");

    cli()
        .args(&["--dir", dir.path_str(), "--config", config.to_str().unwrap()])
        .fails()
        .stderr_has("error:")
        .stderr_has("colour");
}
