// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of a single log line.
//!
//! Format: `yyyy-MM-dd HH:mm:ss.fff [LEVEL] message`

use chrono::NaiveDateTime;

use crate::Severity;

/// strftime pattern for the timestamp prefix (millisecond precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Width of the rendered timestamp, e.g. `2026-01-30 08:14:09.123`.
pub const TIMESTAMP_LEN: usize = 23;

/// Render a log line without its terminator.
///
/// The message is written verbatim, including an empty message.
pub fn format_line(timestamp: NaiveDateTime, level: Severity, message: &str) -> String {
    format!(
        "{} [{}] {}",
        timestamp.format(TIMESTAMP_FORMAT),
        level.as_str(),
        message
    )
}

/// Bytes a line occupies on disk once its `\n` terminator is appended.
pub fn encoded_len(line: &str) -> u64 {
    line.len() as u64 + 1
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
