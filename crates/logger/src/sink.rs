// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The current log file and its byte count.
//!
//! Owned exclusively by the writer thread after construction, so none of
//! this is synchronized.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};

use rotlog_core::encoded_len;

use crate::rotation::RotationPolicy;

pub struct SinkState {
    policy: RotationPolicy,
    file: Option<BufWriter<File>>,
    bytes: u64,
}

impl SinkState {
    /// Run a forced rotation and open a clean current file.
    pub fn open(policy: RotationPolicy) -> io::Result<Self> {
        let file = policy.rotate()?;
        Ok(Self {
            policy,
            file: Some(BufWriter::new(file)),
            bytes: 0,
        })
    }

    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Append `line` plus a terminator and count its encoded length.
    ///
    /// Reopens the current file in append mode first if an earlier
    /// rotation left no file open.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.file.is_none() {
            self.reopen()?;
        }
        let Some(file) = self.file.as_mut() else {
            return Err(io::Error::other("log file is not open"));
        };
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        self.bytes += encoded_len(line);
        Ok(())
    }

    pub fn needs_rotation(&self) -> bool {
        self.policy.should_rotate(self.bytes)
    }

    /// Close the current file, shift backups and open a fresh file.
    ///
    /// On failure no file is left open; the next write retries.
    pub fn rotate(&mut self) -> io::Result<()> {
        self.close();
        self.bytes = 0;
        let file = self.policy.rotate()?;
        self.file = Some(BufWriter::new(file));
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }

    /// Flush and drop the file handle.
    pub fn close(&mut self) {
        if let Some(mut file) = self.file.take() {
            if let Err(e) = file.flush() {
                tracing::warn!(
                    path = %self.policy.current_path().display(),
                    error = %e,
                    "failed to flush log file on close"
                );
            }
        }
    }

    fn reopen(&mut self) -> io::Result<()> {
        let path = self.policy.current_path();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        self.bytes = file.metadata()?.len();
        self.file = Some(BufWriter::new(file));
        Ok(())
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
