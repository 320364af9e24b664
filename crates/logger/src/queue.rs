// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unbounded multi-producer, single-consumer FIFO with a close signal.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};
use thiserror::Error;

/// Returned by [`Queue::push`] once the queue has been closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("queue is closed")]
pub struct Closed;

struct State<T> {
    items: VecDeque<T>,
    closed: bool,
}

struct Shared<T> {
    state: Mutex<State<T>>,
    available: Condvar,
}

/// Ordered queue shared by producers and the writer thread.
///
/// Cloning yields another handle to the same queue. `push` never blocks on
/// capacity; `pop` blocks until an item arrives or the queue is closed and
/// drained.
pub struct Queue<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    items: VecDeque::new(),
                    closed: false,
                }),
                available: Condvar::new(),
            }),
        }
    }

    /// Append an item, or hand it back inside `Err` if the queue is closed.
    pub fn push(&self, item: T) -> Result<(), (Closed, T)> {
        let mut state = self.shared.state.lock();
        if state.closed {
            return Err((Closed, item));
        }
        state.items.push_back(item);
        drop(state);
        self.shared.available.notify_one();
        Ok(())
    }

    /// Block until the next item is available.
    ///
    /// Returns `None` only once the queue is closed and empty.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.shared.state.lock();
        loop {
            if let Some(item) = state.items.pop_front() {
                return Some(item);
            }
            if state.closed {
                return None;
            }
            self.shared.available.wait(&mut state);
        }
    }

    /// Stop accepting items. Already queued items remain poppable.
    pub fn close(&self) {
        self.shared.state.lock().closed = true;
        self.shared.available.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().closed
    }

    pub fn len(&self) -> usize {
        self.shared.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
