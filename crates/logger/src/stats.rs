// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Counters published by the writer thread.

use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time copy of [`SinkStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Lines handed to the file since the logger opened; a line still in the
    /// write buffer counts even if a later flush fails
    pub lines_written: u64,
    /// Bytes in the current file, as tracked by the writer
    pub current_file_bytes: u64,
    /// Completed rotations, including the forced one at open
    pub rotations: u64,
    /// Failed line writes plus failed flushes of the file buffer
    pub failed_writes: u64,
    /// Failed or panicking writes to the mirror sink
    pub mirror_failures: u64,
}

/// Counters written only by the writer thread and readable from anywhere.
#[derive(Debug, Default)]
pub struct SinkStats {
    lines_written: AtomicU64,
    current_file_bytes: AtomicU64,
    rotations: AtomicU64,
    failed_writes: AtomicU64,
    mirror_failures: AtomicU64,
}

impl SinkStats {
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            lines_written: self.lines_written.load(Ordering::Relaxed),
            current_file_bytes: self.current_file_bytes.load(Ordering::Relaxed),
            rotations: self.rotations.load(Ordering::Relaxed),
            failed_writes: self.failed_writes.load(Ordering::Relaxed),
            mirror_failures: self.mirror_failures.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn record_line(&self, current_file_bytes: u64) {
        self.lines_written.fetch_add(1, Ordering::Relaxed);
        self.current_file_bytes
            .store(current_file_bytes, Ordering::Relaxed);
    }

    pub(crate) fn record_rotation(&self, current_file_bytes: u64) {
        self.rotations.fetch_add(1, Ordering::Relaxed);
        self.current_file_bytes
            .store(current_file_bytes, Ordering::Relaxed);
    }

    pub(crate) fn record_failed_write(&self) {
        self.failed_writes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_mirror_failure(&self) {
        self.mirror_failures.fetch_add(1, Ordering::Relaxed);
    }
}
