// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rotlog - pipe lines into a size-rotating log file

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod env;
mod pipe;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rotlog::{MirrorSink, RotatingLogger};
use rotlog_core::{ConfigFile, LoggerConfig, Severity};

#[derive(Parser, Debug)]
#[command(
    name = "rotlog",
    version,
    about = "Pipe lines into a size-rotating log file"
)]
struct Cli {
    /// Files to read lines from (stdin when none are given)
    files: Vec<PathBuf>,

    /// TOML config file (env: ROTLOG_CONFIG)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Folder holding the log and its backups (env: ROTLOG_DIR)
    #[arg(short, long, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Name of the current log file
    #[arg(short, long, value_name = "FILE")]
    name: Option<String>,

    /// Rotate once the current file reaches this many bytes
    #[arg(long, value_name = "BYTES")]
    max_bytes: Option<u64>,

    /// Files to keep, current file included
    #[arg(long, value_name = "COUNT")]
    max_files: Option<usize>,

    /// Minimum severity written (env: ROTLOG_LEVEL)
    #[arg(short, long, value_name = "LEVEL")]
    level: Option<Severity>,

    /// Severity given to every input line
    #[arg(long, value_name = "LEVEL", default_value_t = Severity::Info)]
    input_level: Severity,

    /// Also copy each line to this stream
    #[arg(long, value_enum, default_value_t)]
    mirror: Mirror,

    /// How long to wait for queued lines at exit
    #[arg(long, value_name = "MS")]
    grace_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
enum Mirror {
    #[default]
    None,
    Stdout,
    Stderr,
}

impl Mirror {
    fn sink(self) -> Option<MirrorSink> {
        match self {
            Mirror::None => None,
            Mirror::Stdout => Some(Box::new(io::stdout())),
            Mirror::Stderr => Some(Box::new(io::stderr())),
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", format_error(&e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = resolve_config(&cli)?;
    let sources = pipe::open_sources(&cli.files)?;

    let logger = RotatingLogger::open(config, cli.mirror.sink())?;
    let result = pipe::pipe(&logger, sources, cli.input_level);
    logger.dispose();

    let lines = result?;
    let stats = logger.stats();
    tracing::info!(
        lines,
        written = stats.lines_written,
        rotations = stats.rotations,
        failed = stats.failed_writes,
        "input drained"
    );
    Ok(())
}

/// Diagnostics about the logger itself go to stderr, filtered by RUST_LOG.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}

/// Layer settings: flags > environment > config file > defaults.
fn resolve_config(cli: &Cli) -> Result<LoggerConfig> {
    let file = match cli.config.clone().or_else(env::config_path) {
        Some(path) => ConfigFile::read(&path)?,
        None => ConfigFile::default(),
    };

    let folder = cli
        .dir
        .clone()
        .or_else(env::log_dir)
        .or_else(|| file.folder.clone())
        .unwrap_or_else(env::default_log_dir);

    let mut config = file.apply(LoggerConfig::new(&folder));
    config.folder = folder;

    if let Some(raw) = env::level() {
        config.level = raw.parse().context("invalid ROTLOG_LEVEL")?;
    }

    if let Some(name) = &cli.name {
        config.base_file_name = name.clone();
    }
    if let Some(bytes) = cli.max_bytes {
        config = config.with_max_file_bytes(bytes);
    }
    if let Some(files) = cli.max_files {
        config = config.with_max_files(files);
    }
    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(ms) = cli.grace_ms {
        config.grace_period = Duration::from_millis(ms);
    }
    Ok(config)
}

/// Format an anyhow error, deduplicating the chain.
///
/// thiserror variants often embed their source in the top-level message;
/// the chain is only rendered when it adds something.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for cause in err.chain().skip(1) {
        buf.push_str(&format!(": {}", cause));
    }
    buf
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
