// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered severity levels used to tag and gate log lines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log line, ordered `Debug < Info < Warn < Error`.
///
/// The minimum severity configured on a logger gates emission: anything
/// strictly below it is dropped before formatting.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
}

/// Error returned when text does not name a severity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity {0:?} (expected debug, info, warn or error)")]
pub struct ParseSeverityError(pub String);

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Tag rendered between brackets in a log line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Inverse of `as u8`. Out-of-range values saturate to `Error`.
    pub fn from_u8(value: u8) -> Self {
        Self::ALL
            .get(value as usize)
            .copied()
            .unwrap_or(Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: String) -> Result<Self, ParseSeverityError> {
        value.parse()
    }
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;
