// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Forward-only lifecycle state shared by producers and shutdown.

use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle of a logger instance: `Running -> Closing -> Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RunState {
    /// Accepting new lines
    Running = 0,
    /// Refusing new lines, queued lines still draining
    Closing = 1,
    /// Shutdown finished; every call is a no-op
    Closed = 2,
}

impl RunState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => RunState::Running,
            1 => RunState::Closing,
            _ => RunState::Closed,
        }
    }
}

/// Atomically observed [`RunState`] that never moves backwards.
#[derive(Debug)]
pub struct AtomicRunState(AtomicU8);

impl Default for AtomicRunState {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomicRunState {
    pub fn new() -> Self {
        Self(AtomicU8::new(RunState::Running as u8))
    }

    pub fn load(&self) -> RunState {
        RunState::from_u8(self.0.load(Ordering::Acquire))
    }

    pub fn is_running(&self) -> bool {
        self.load() == RunState::Running
    }

    /// Move `Running -> Closing`. Returns true only for the caller that
    /// performed the transition.
    pub fn begin_closing(&self) -> bool {
        self.0
            .compare_exchange(
                RunState::Running as u8,
                RunState::Closing as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Move to `Closed` from any state.
    pub fn mark_closed(&self) {
        self.0.fetch_max(RunState::Closed as u8, Ordering::AcqRel);
    }
}

#[cfg(test)]
#[path = "run_state_tests.rs"]
mod tests;
