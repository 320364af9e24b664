// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Severity gate and line formatter applied on the caller's thread.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use rotlog_core::{format_line, Clock, Severity};

/// Drops lines below the minimum severity and renders the rest.
///
/// Rendering happens at enqueue time so the timestamp reflects when the
/// caller logged, not when the writer got to it.
pub struct Gate {
    min_level: AtomicU8,
    clock: Arc<dyn Clock>,
}

impl Gate {
    pub fn new(min_level: Severity, clock: Arc<dyn Clock>) -> Self {
        Self {
            min_level: AtomicU8::new(min_level as u8),
            clock,
        }
    }

    pub fn min_level(&self) -> Severity {
        Severity::from_u8(self.min_level.load(Ordering::Relaxed))
    }

    pub fn set_min_level(&self, level: Severity) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    pub fn admits(&self, level: Severity) -> bool {
        level >= self.min_level()
    }

    /// Render `message`, or `None` when `level` is gated out.
    pub fn render(&self, level: Severity, message: &str) -> Option<String> {
        if !self.admits(level) {
            return None;
        }
        Some(format_line(self.clock.now(), level, message))
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
