// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger configuration: defaults, clamping and TOML loading.

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::Severity;

/// Base file name used when none is configured.
pub const DEFAULT_BASE_FILE_NAME: &str = "rotlog.log";

/// Default size at which the current file is rotated (10 MiB).
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Floor for `max_file_bytes`; smaller values would rotate on nearly every line.
pub const MIN_FILE_BYTES: u64 = 64;

/// Default number of retained files, current file included.
pub const DEFAULT_MAX_FILES: usize = 5;

/// How long shutdown waits for the writer to drain before abandoning it.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_millis(2000);

/// Upper bound on how long `flush()` blocks its caller.
pub const DEFAULT_FLUSH_TIMEOUT: Duration = Duration::from_millis(5000);

/// Errors detected before a logger starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("log folder must not be empty")]
    EmptyFolder,
    #[error("invalid base file name {0:?}: must be a plain, non-empty file name")]
    InvalidBaseName(String),
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Construction parameters for a rotating logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Directory holding the current file and its backups (created if missing)
    pub folder: PathBuf,
    /// Name of the current file; backups append `.1`, `.2`, ...
    pub base_file_name: String,
    /// Rotation threshold in bytes, never below [`MIN_FILE_BYTES`]
    pub max_file_bytes: u64,
    /// Total files kept (current + backups), never below 1
    pub max_files: usize,
    /// Minimum severity that is written
    pub level: Severity,
    /// Shutdown grace period for draining queued lines
    pub grace_period: Duration,
    /// Maximum time a `flush()` caller is blocked
    pub flush_timeout: Duration,
}

impl LoggerConfig {
    /// Configuration with defaults for everything but the folder.
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            base_file_name: DEFAULT_BASE_FILE_NAME.to_string(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_files: DEFAULT_MAX_FILES,
            level: Severity::default(),
            grace_period: DEFAULT_GRACE_PERIOD,
            flush_timeout: DEFAULT_FLUSH_TIMEOUT,
        }
    }

    pub fn with_base_file_name(mut self, name: impl Into<String>) -> Self {
        self.base_file_name = name.into();
        self
    }

    /// Set the rotation threshold; values below [`MIN_FILE_BYTES`] are raised to it.
    pub fn with_max_file_bytes(mut self, bytes: u64) -> Self {
        self.max_file_bytes = clamp_max_file_bytes(bytes);
        self
    }

    /// Set the number of retained files; zero is raised to one.
    pub fn with_max_files(mut self, files: usize) -> Self {
        self.max_files = clamp_max_files(files);
        self
    }

    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn with_grace_period(mut self, grace: Duration) -> Self {
        self.grace_period = grace;
        self
    }

    pub fn with_flush_timeout(mut self, timeout: Duration) -> Self {
        self.flush_timeout = timeout;
        self
    }

    /// Apply the size and count floors to fields that were set directly.
    pub fn clamped(mut self) -> Self {
        self.max_file_bytes = clamp_max_file_bytes(self.max_file_bytes);
        self.max_files = clamp_max_files(self.max_files);
        self
    }

    /// Reject settings that cannot produce a usable file path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.folder.as_os_str().is_empty() {
            return Err(ConfigError::EmptyFolder);
        }
        let name = Path::new(&self.base_file_name);
        let plain = name.file_name().is_some_and(|f| f == name.as_os_str());
        if self.base_file_name.is_empty() || !plain {
            return Err(ConfigError::InvalidBaseName(self.base_file_name.clone()));
        }
        Ok(())
    }
}

/// Partial configuration as it appears in a TOML file.
///
/// Every key is optional so a file can be layered under command-line
/// flags and environment overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub folder: Option<PathBuf>,
    pub base_file_name: Option<String>,
    pub max_file_bytes: Option<u64>,
    pub max_files: Option<usize>,
    pub level: Option<Severity>,
    pub grace_period_ms: Option<u64>,
    pub flush_timeout_ms: Option<u64>,
}

impl ConfigFile {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = read_config(path)?;
        Self::parse(&contents)
    }

    /// Overlay the keys present in this file onto `config`.
    ///
    /// `folder` is applied as well; callers that resolve the folder from a
    /// higher-precedence source should set it afterwards.
    pub fn apply(&self, mut config: LoggerConfig) -> LoggerConfig {
        if let Some(folder) = &self.folder {
            config.folder = folder.clone();
        }
        if let Some(name) = &self.base_file_name {
            config.base_file_name = name.clone();
        }
        if let Some(bytes) = self.max_file_bytes {
            config = config.with_max_file_bytes(bytes);
        }
        if let Some(files) = self.max_files {
            config = config.with_max_files(files);
        }
        if let Some(level) = self.level {
            config.level = level;
        }
        if let Some(ms) = self.grace_period_ms {
            config.grace_period = Duration::from_millis(ms);
        }
        if let Some(ms) = self.flush_timeout_ms {
            config.flush_timeout = Duration::from_millis(ms);
        }
        config
    }
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn clamp_max_file_bytes(bytes: u64) -> u64 {
    bytes.max(MIN_FILE_BYTES)
}

pub fn clamp_max_files(files: usize) -> usize {
    files.max(1)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
