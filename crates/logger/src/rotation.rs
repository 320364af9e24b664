// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Size-based rotation of the current log file into numbered backups.
//!
//! ```text
//! before:  app.log   app.log.1   app.log.2        (max_files = 3)
//! after:   app.log   app.log.1   app.log.2
//!          (empty)   (old app.log) (old app.log.1)   old app.log.2 is gone
//! ```

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use rotlog_core::config::{clamp_max_file_bytes, clamp_max_files};
use rotlog_core::LoggerConfig;

/// File naming and thresholds for one base file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    folder: PathBuf,
    base_file_name: String,
    max_file_bytes: u64,
    max_files: usize,
}

impl RotationPolicy {
    pub fn new(
        folder: impl Into<PathBuf>,
        base_file_name: impl Into<String>,
        max_file_bytes: u64,
        max_files: usize,
    ) -> Self {
        Self {
            folder: folder.into(),
            base_file_name: base_file_name.into(),
            max_file_bytes: clamp_max_file_bytes(max_file_bytes),
            max_files: clamp_max_files(max_files),
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(
            &config.folder,
            &config.base_file_name,
            config.max_file_bytes,
            config.max_files,
        )
    }

    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_bytes
    }

    pub fn max_files(&self) -> usize {
        self.max_files
    }

    /// `<folder>/<base>`
    pub fn current_path(&self) -> PathBuf {
        self.folder.join(&self.base_file_name)
    }

    /// `<folder>/<base>.<n>`; slot 0 is the current file.
    pub fn backup_path(&self, n: usize) -> PathBuf {
        if n == 0 {
            return self.current_path();
        }
        self.folder.join(format!("{}.{}", self.base_file_name, n))
    }

    /// Whether a file holding `bytes` has reached the rotation threshold.
    pub fn should_rotate(&self, bytes: u64) -> bool {
        bytes >= self.max_file_bytes
    }

    /// Shift backups up by one slot and open a fresh, truncated current file.
    ///
    /// The caller must have flushed and dropped its handle to the current
    /// file. Failures while shifting are logged and skipped; only failing to
    /// open the new current file is returned.
    pub fn rotate(&self) -> io::Result<File> {
        self.shift_backups();
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.current_path())
    }

    fn shift_backups(&self) {
        for slot in (1..self.max_files).rev() {
            let src = self.backup_path(slot - 1);
            if !src.exists() {
                continue;
            }
            let dst = self.backup_path(slot);
            if let Err(e) = replace(&src, &dst) {
                tracing::warn!(
                    src = %src.display(),
                    dst = %dst.display(),
                    error = %e,
                    "failed to shift log backup"
                );
            }
        }
    }
}

/// Move `src` onto `dst`, deleting whatever occupies `dst` first.
fn replace(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::remove_file(dst) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    fs::rename(src, dst)
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;
