// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction for line timestamps.

use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;
use std::sync::Arc;

/// Source of local wall-clock time used when rendering log lines.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// Production clock backed by the system's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually advanced clock for deterministic tests.
///
/// Clones share the same underlying time.
#[derive(Debug, Clone)]
pub struct FakeClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl FakeClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for FakeClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
