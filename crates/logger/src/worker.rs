// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Background writer draining the queue into the current file.
//!
//! ```text
//! Callers (any thread)          Writer thread
//! ──────────────────────        ─────────────────────────────
//! log() ─ render ─ push ──────→ pop
//!                                 mirror.write (optional)
//!                                 file.write + count bytes
//!                                 rotate if over the limit
//! flush() ─ push marker ──────→ flush file + mirror
//!   ←───────────────────────────── ack
//! dispose() ─ close queue ────→ drain, close file, exit
//!   ←───────────────────────────── done (or grace period expires)
//! ```

use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::queue::Queue;
use crate::sink::SinkState;
use crate::stats::SinkStats;

/// Name given to the writer thread.
pub const WRITER_THREAD_NAME: &str = "rotlog-writer";

/// Secondary destination receiving the same lines as the file.
pub type MirrorSink = Box<dyn Write + Send>;

/// Item carried by the ingestion queue.
pub enum Entry {
    /// Fully rendered line, without terminator
    Line(String),
    /// Checkpoint: flush everything written so far, then acknowledge
    Flush(mpsc::Sender<()>),
}

pub struct Worker {
    queue: Queue<Entry>,
    sink: SinkState,
    mirror: Option<MirrorSink>,
    stats: Arc<SinkStats>,
}

impl Worker {
    pub fn new(
        queue: Queue<Entry>,
        sink: SinkState,
        mirror: Option<MirrorSink>,
        stats: Arc<SinkStats>,
    ) -> Self {
        Self {
            queue,
            sink,
            mirror,
            stats,
        }
    }

    /// Start the writer thread. `done` receives a message once the queue is
    /// drained and the file closed.
    pub fn spawn(self, done: mpsc::Sender<()>) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name(WRITER_THREAD_NAME.to_string())
            .spawn(move || {
                let _closer = CloseOnExit(self.queue.clone());
                self.run();
                let _ = done.send(());
            })
    }

    /// Process entries until the queue is closed and drained.
    pub fn run(mut self) {
        while let Some(entry) = self.queue.pop() {
            match entry {
                Entry::Line(line) => self.write_line(&line),
                Entry::Flush(ack) => {
                    self.flush();
                    let _ = ack.send(());
                }
            }
            // Keep the file current whenever the writer catches up.
            if self.queue.is_empty() {
                self.flush();
            }
        }
        self.flush();
        self.sink.close();
        tracing::debug!(
            path = %self.sink.policy().current_path().display(),
            "log writer stopped"
        );
    }

    fn write_line(&mut self, line: &str) {
        self.write_mirror(line);

        match self.sink.write_line(line) {
            Ok(()) => self.stats.record_line(self.sink.bytes()),
            Err(e) => {
                self.stats.record_failed_write();
                tracing::warn!(
                    path = %self.sink.policy().current_path().display(),
                    error = %e,
                    "failed to write log line"
                );
                return;
            }
        }

        if self.sink.needs_rotation() {
            self.rotate();
        }
    }

    /// A mirror that panics is detached; the file keeps receiving lines.
    fn write_mirror(&mut self, line: &str) {
        let Some(mirror) = self.mirror.as_mut() else {
            return;
        };
        let result = panic::catch_unwind(AssertUnwindSafe(|| writeln!(mirror, "{}", line)));
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                self.stats.record_mirror_failure();
                tracing::warn!(error = %e, "failed to write log mirror");
            }
            Err(_) => {
                self.stats.record_mirror_failure();
                self.mirror = None;
                tracing::error!("log mirror panicked, detaching it");
            }
        }
    }

    fn rotate(&mut self) {
        match self.sink.rotate() {
            Ok(()) => self.stats.record_rotation(self.sink.bytes()),
            Err(e) => tracing::warn!(
                path = %self.sink.policy().current_path().display(),
                error = %e,
                "failed to open log file after rotation"
            ),
        }
    }

    /// Buffered lines usually fail here rather than in `write_line`, so a
    /// failed flush counts as a failed write.
    fn flush(&mut self) {
        if let Err(e) = self.sink.flush() {
            self.stats.record_failed_write();
            tracing::warn!(error = %e, "failed to flush log file");
        }
        let Some(mirror) = self.mirror.as_mut() else {
            return;
        };
        let result = panic::catch_unwind(AssertUnwindSafe(|| mirror.flush()));
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "failed to flush log mirror"),
            Err(_) => {
                self.stats.record_mirror_failure();
                self.mirror = None;
                tracing::error!("log mirror panicked on flush, detaching it");
            }
        }
    }
}

/// Closes the queue when the writer thread ends, including by unwinding.
struct CloseOnExit(Queue<Entry>);

impl Drop for CloseOnExit {
    fn drop(&mut self) {
        self.0.close();
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
