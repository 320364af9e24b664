// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rotlog-core: severity, line format and configuration shared by the
//! rotating logger and its CLI.

pub mod clock;
pub mod config;
pub mod line;
pub mod severity;

pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{
    ConfigError, ConfigFile, LoggerConfig, DEFAULT_BASE_FILE_NAME, DEFAULT_FLUSH_TIMEOUT,
    DEFAULT_GRACE_PERIOD, DEFAULT_MAX_FILES, DEFAULT_MAX_FILE_BYTES, MIN_FILE_BYTES,
};
pub use line::{encoded_len, format_line};
pub use severity::{ParseSeverityError, Severity};
