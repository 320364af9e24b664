// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle of a rotating logger: open, log, flush, dispose.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::JoinHandle;

use parking_lot::Mutex;
use rotlog_core::{Clock, LoggerConfig, Severity, SystemClock};

use crate::error::OpenError;
use crate::gate::Gate;
use crate::queue::Queue;
use crate::rotation::RotationPolicy;
use crate::run_state::{AtomicRunState, RunState};
use crate::sink::SinkState;
use crate::stats::{SinkStats, StatsSnapshot};
use crate::worker::{Entry, MirrorSink, Worker};

struct WriterHandle {
    handle: JoinHandle<()>,
    done: mpsc::Receiver<()>,
}

/// Asynchronous, size-rotating line logger.
///
/// Every method is safe to call from any thread at any time and never
/// returns an error: callers are never interrupted by disk trouble. Lines
/// are formatted on the calling thread and written by a single background
/// thread in the order the queue accepted them.
///
/// Durability is best effort. Lines still queued when the process dies,
/// or when [`dispose`](Self::dispose) gives up on a stalled writer after
/// the grace period, are lost.
pub struct RotatingLogger {
    config: LoggerConfig,
    state: AtomicRunState,
    gate: Gate,
    queue: Queue<Entry>,
    stats: Arc<SinkStats>,
    writer: Mutex<Option<WriterHandle>>,
}

impl RotatingLogger {
    /// Open a logger using the system clock.
    ///
    /// Creates the folder if needed, rotates any file left at the current
    /// path into the backups, and starts the writer thread.
    pub fn open(config: LoggerConfig, mirror: Option<MirrorSink>) -> Result<Self, OpenError> {
        Self::open_with_clock(config, mirror, Arc::new(SystemClock))
    }

    /// Open a logger whose timestamps come from `clock`.
    pub fn open_with_clock(
        config: LoggerConfig,
        mirror: Option<MirrorSink>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, OpenError> {
        config.validate()?;
        let config = config.clamped();

        std::fs::create_dir_all(&config.folder).map_err(|source| OpenError::CreateFolder {
            path: config.folder.clone(),
            source,
        })?;

        let policy = RotationPolicy::from_config(&config);
        let path = policy.current_path();
        let sink =
            SinkState::open(policy).map_err(|source| OpenError::OpenFile { path, source })?;

        let stats = Arc::new(SinkStats::default());
        stats.record_rotation(0);

        let queue = Queue::new();
        let (done_tx, done_rx) = mpsc::channel();
        let handle = Worker::new(queue.clone(), sink, mirror, Arc::clone(&stats))
            .spawn(done_tx)
            .map_err(OpenError::Spawn)?;

        tracing::debug!(
            folder = %config.folder.display(),
            file = %config.base_file_name,
            max_file_bytes = config.max_file_bytes,
            max_files = config.max_files,
            "log writer started"
        );

        Ok(Self {
            gate: Gate::new(config.level, clock),
            config,
            state: AtomicRunState::new(),
            queue,
            stats,
            writer: Mutex::new(Some(WriterHandle {
                handle,
                done: done_rx,
            })),
        })
    }

    /// Queue `message` at `level` if the logger is running and the level
    /// passes the gate. Never blocks on I/O.
    pub fn log(&self, level: Severity, message: &str) {
        if !self.state.is_running() {
            return;
        }
        let Some(line) = self.gate.render(level, message) else {
            return;
        };
        // A concurrent dispose may have closed the queue; the line is dropped.
        let _ = self.queue.push(Entry::Line(line));
    }

    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    /// Minimum severity currently written.
    pub fn level(&self) -> Severity {
        self.gate.min_level()
    }

    /// Change the minimum severity for subsequent calls.
    pub fn set_level(&self, level: Severity) {
        self.gate.set_min_level(level);
    }

    /// Block until every line queued before this call is written and the
    /// file flushed, or until the configured flush timeout elapses.
    ///
    /// The writer keeps running; this is a checkpoint, not a shutdown.
    pub fn flush(&self) {
        if !self.state.is_running() {
            return;
        }
        let (ack_tx, ack_rx) = mpsc::channel();
        if self.queue.push(Entry::Flush(ack_tx)).is_err() {
            return;
        }
        if let Err(RecvTimeoutError::Timeout) = ack_rx.recv_timeout(self.config.flush_timeout) {
            tracing::warn!(
                pending = self.queue.len(),
                timeout_ms = self.config.flush_timeout.as_millis() as u64,
                "log flush timed out"
            );
        }
    }

    /// Stop accepting lines, let the writer drain the queue, and wait for
    /// it up to the grace period.
    ///
    /// A writer that misses the grace period is abandoned, not killed:
    /// lines it has not written yet may never reach the file. Calling
    /// `dispose` again, or from another thread, is a no-op.
    pub fn dispose(&self) {
        if !self.state.begin_closing() {
            return;
        }
        self.queue.close();

        if let Some(writer) = self.writer.lock().take() {
            match writer.done.recv_timeout(self.config.grace_period) {
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    if writer.handle.join().is_err() {
                        tracing::error!("log writer thread panicked");
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(
                        pending = self.queue.len(),
                        grace_ms = self.config.grace_period.as_millis() as u64,
                        "log writer did not finish within grace period, abandoning it"
                    );
                }
            }
        }

        self.state.mark_closed();
    }

    pub fn run_state(&self) -> RunState {
        self.state.load()
    }

    /// Effective configuration, with size and count floors applied.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Counters published by the writer thread.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Lines accepted but not yet taken by the writer.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Drop for RotatingLogger {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
