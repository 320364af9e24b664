// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors surfaced while opening a logger.
//!
//! Once a logger is running nothing is surfaced to callers; write and
//! rotation failures are reported through `tracing` instead.

use std::io;
use std::path::PathBuf;

use rotlog_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to create log folder {path}: {source}")]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to start log writer thread: {0}")]
    Spawn(#[source] io::Error),
}
