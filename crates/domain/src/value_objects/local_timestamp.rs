//! Provider-local timestamp value object
//!
//! The weather provider resolves timestamps into the queried location's
//! timezone and sends them without an offset (`2024-05-01T14:00`). The raw
//! string is kept as received; parsing is lazy and may fail.

use chrono::{DateTime, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// A date-time string in the location's local timezone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalTimestamp(String);

impl LocalTimestamp {
    /// Wrap a raw timestamp string
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The string as received
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into a wall-clock date-time
    ///
    /// RFC 3339 input with an offset keeps its own wall-clock time.
    #[must_use]
    pub fn parse(&self) -> Option<NaiveDateTime> {
        let raw = self.0.trim();
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.naive_local())
            })
    }

    /// Local hour of day (0-23), if the timestamp parses
    #[must_use]
    pub fn hour(&self) -> Option<u32> {
        self.parse().map(|dt| dt.hour())
    }
}

impl From<&str> for LocalTimestamp {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for LocalTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
