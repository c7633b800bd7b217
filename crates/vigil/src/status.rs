//! Plugin statuses and threshold classification.

use std::fmt;

use serde::{Deserialize, Serialize};
use vigil_core::Range;

/// A monitoring supervisor's interpretation of a plugin exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// The check passed.
    #[default]
    Ok,
    /// The warning threshold was breached.
    Warning,
    /// The critical threshold was breached.
    Critical,
    /// The check could not produce a usable result.
    Unknown,
}

impl Status {
    /// The exit code understood by the supervisor.
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    /// Map a numeric exit code to a status. Unrecognized codes are
    /// [`Status::Unknown`].
    #[must_use]
    pub fn from_exit_code(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::Warning,
            2 => Self::Critical,
            _ => Self::Unknown,
        }
    }

    /// Classify a measured value against warning/critical thresholds.
    ///
    /// A threshold alerts when the value falls outside its range; a
    /// complemented range (`@...`) inverts that through its own
    /// membership rule. Critical takes precedence over warning; with no
    /// thresholds the value is always OK.
    #[must_use]
    pub fn classify(value: f64, warn: Option<&Range>, crit: Option<&Range>) -> Self {
        if crit.is_some_and(|range| !range.in_range(value)) {
            return Self::Critical;
        }
        if warn.is_some_and(|range| !range.in_range(value)) {
            return Self::Warning;
        }
        Self::Ok
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}
