//! Size-based rotation as seen from the command line.

use crate::prelude::*;

#[test]
fn previous_log_is_rotated_on_start() {
    let dir = LogDir::new();
    dir.file("rotlog.log", "old run\n");

    cli()
        .args(&["--dir", dir.path_str()])
        .stdin("new run\n")
        .passes();

    assert_eq!(
        std::fs::read_to_string(dir.join("rotlog.log.1")).unwrap(),
        "old run\n"
    );
    assert_eq!(dir.messages("rotlog.log"), ["new run"]);
}

#[test]
fn small_limit_produces_bounded_backups() {
    let dir = LogDir::new();
    // Each line is 33 bytes, so two fill a 64-byte file.
    let input: String = ('a'..='j').map(|c| format!("{c}\n")).collect();

    cli()
        .args(&[
            "--dir",
            dir.path_str(),
            "--max-bytes",
            "64",
            "--max-files",
            "3",
        ])
        .stdin(&input)
        .passes();

    assert_eq!(dir.messages("rotlog.log"), Vec::<String>::new());
    assert_eq!(dir.messages("rotlog.log.1"), ["i", "j"]);
    assert_eq!(dir.messages("rotlog.log.2"), ["g", "h"]);
    assert!(!dir.exists("rotlog.log.3"));
}

#[test]
fn max_bytes_below_floor_is_raised() {
    let dir = LogDir::new();

    cli()
        .args(&["--dir", dir.path_str(), "--max-bytes", "1"])
        .stdin("a\n")
        .passes();

    // A 1-byte limit would rotate after every line; the floor keeps it.
    assert_eq!(dir.messages("rotlog.log"), ["a"]);
    assert!(!dir.exists("rotlog.log.1"));
}
