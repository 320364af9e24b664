// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rotlog: asynchronous, size-rotating line logger.
//!
//! Callers format and enqueue lines; a single writer thread appends them to
//! `<folder>/<base>` and rolls the file into `<base>.1`, `<base>.2`, ... once
//! it reaches the configured size. Logging never returns errors and never
//! blocks on disk I/O.
//!
//! ```no_run
//! use rotlog::{LoggerConfig, RotatingLogger};
//!
//! let config = LoggerConfig::new("logs").with_base_file_name("export.log");
//! let logger = RotatingLogger::open(config, Some(Box::new(std::io::stdout())))?;
//! logger.info("export started");
//! logger.dispose();
//! # Ok::<(), rotlog::OpenError>(())
//! ```

mod error;
mod gate;
mod logger;
mod queue;
mod rotation;
mod run_state;
mod sink;
mod stats;
mod worker;


pub use error::OpenError;
pub use logger::RotatingLogger;
pub use queue::{Closed, Queue};
pub use rotation::RotationPolicy;
pub use run_state::RunState;
pub use stats::StatsSnapshot;
pub use worker::{MirrorSink, WRITER_THREAD_NAME};

pub use rotlog_core::{ConfigError, LoggerConfig, Severity};
