//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running rotlog against a scratch folder.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;
use rotlog_core::line::TIMESTAMP_LEN;

/// Create a CLI builder for rotlog
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Feed text on stdin
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    fn command(self) -> Command {
        let mut cmd = Command::cargo_bin("rotlog").unwrap();
        cmd.args(&self.args);

        // Keep the caller's environment from steering the spec.
        for key in ["ROTLOG_DIR", "ROTLOG_LEVEL", "ROTLOG_CONFIG", "RUST_LOG"] {
            cmd.env_remove(key);
        }
        for (key, value) in self.envs {
            cmd.env(key, value);
        }
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}

/// Scratch folder for one spec.
pub struct LogDir {
    dir: tempfile::TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_str(&self) -> &str {
        self.dir.path().to_str().unwrap()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file relative to the scratch folder.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn exists(&self, name: &str) -> bool {
        self.join(name).exists()
    }

    /// Messages of every line in `name`, with timestamp and level stripped.
    pub fn messages(&self, name: &str) -> Vec<String> {
        self.lines(name)
            .iter()
            .map(|l| strip_prefix(l).1.to_string())
            .collect()
    }

    pub fn lines(&self, name: &str) -> Vec<String> {
        std::fs::read_to_string(self.join(name))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Split a log line into (`LEVEL`, message), checking the timestamp shape.
pub fn strip_prefix(line: &str) -> (&str, &str) {
    let (ts, rest) = line.split_at(TIMESTAMP_LEN);
    assert_eq!(ts.as_bytes()[4], b'-', "bad timestamp in {line:?}");
    assert_eq!(ts.as_bytes()[19], b'.', "bad timestamp in {line:?}");
    let rest = rest.strip_prefix(" [").expect("level tag");
    rest.split_once("] ").expect("level tag")
}
