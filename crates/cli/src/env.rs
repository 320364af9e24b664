// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

/// Log folder override: ROTLOG_DIR
pub fn log_dir() -> Option<PathBuf> {
    std::env::var_os("ROTLOG_DIR")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Minimum severity override, unparsed: ROTLOG_LEVEL
pub fn level() -> Option<String> {
    std::env::var("ROTLOG_LEVEL").ok().filter(|s| !s.is_empty())
}

/// Config file location override: ROTLOG_CONFIG
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os("ROTLOG_CONFIG")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Default log folder: <local data dir>/rotlog, or ./logs when unknown
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("rotlog"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
