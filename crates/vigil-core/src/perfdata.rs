//! Performance-data records and the run-wide output buffer.
//!
//! Each record serializes to one token of the form
//! `label=value[unit];warn;crit;min;max` with trailing empty fields
//! trimmed; tokens accumulate in a [`PerfDataBuffer`] that the report
//! path appends after the status message.

use std::fmt;

use thiserror::Error;

use crate::range::Range;
use crate::unit::Unit;

/// Errors from validating a performance-data record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PerfDataError {
    /// The label was empty.
    #[error("label must not be empty")]
    EmptyLabel,
    /// The label contained a newline, which would corrupt the
    /// single-line output format.
    #[error("label contains invalid characters")]
    InvalidLabel,
    /// More extrema than the format supports (min and max).
    #[error("too many extrema values: {0}")]
    TooManyExtrema(usize),
}

/// One measurement to be graphed by third-party tooling.
///
/// ```
/// use vigil_core::PerfData;
///
/// let load = PerfData::new("load", 1.5)
///     .with_warn("5".parse()?)
///     .with_crit("10".parse()?)
///     .with_min(0.0);
/// assert_eq!(load.to_string(), "load=1.5;5;10;0");
/// # Ok::<(), vigil_core::RangeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PerfData {
    label: String,
    value: f64,
    unit: Unit,
    warn: Option<Range>,
    crit: Option<Range>,
    min: Option<f64>,
    max: Option<f64>,
}

impl PerfData {
    /// Create a record with no unit, thresholds, or extrema.
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            unit: Unit::None,
            warn: None,
            crit: None,
            min: None,
            max: None,
        }
    }

    /// Set the unit of measure.
    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the warning range.
    #[must_use]
    pub fn with_warn(mut self, warn: Range) -> Self {
        self.warn = Some(warn);
        self
    }

    /// Set the critical range.
    #[must_use]
    pub fn with_crit(mut self, crit: Range) -> Self {
        self.crit = Some(crit);
        self
    }

    /// Set the minimum possible value, for graph scaling.
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum possible value, for graph scaling.
    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set min and max from a slice of up to two values.
    ///
    /// An empty slice clears both, one value sets the minimum, two set
    /// minimum and maximum; more than two is a usage error.
    pub fn with_extrema(mut self, extrema: &[f64]) -> Result<Self, PerfDataError> {
        if extrema.len() > 2 {
            return Err(PerfDataError::TooManyExtrema(extrema.len()));
        }
        self.min = extrema.first().copied();
        self.max = extrema.get(1).copied();
        Ok(self)
    }

    /// The record's label, unescaped.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The measured value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The warning range, if any.
    #[must_use]
    pub fn warn(&self) -> Option<&Range> {
        self.warn.as_ref()
    }

    /// The critical range, if any.
    #[must_use]
    pub fn crit(&self) -> Option<&Range> {
        self.crit.as_ref()
    }
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut token = format!(
            "{}={}{};",
            escape_label(&self.label),
            self.value,
            self.unit
        );

        if let Some(warn) = &self.warn {
            token.push_str(&warn.to_string());
        }
        token.push(';');
        if let Some(crit) = &self.crit {
            token.push_str(&crit.to_string());
        }

        // Min and max are meaningless for percentages.
        if self.unit != Unit::Percent {
            token.push(';');
            if let Some(min) = self.min {
                token.push_str(&min.to_string());
            }
            token.push(';');
            if let Some(max) = self.max {
                token.push_str(&max.to_string());
            }
        }

        f.write_str(token.trim_end_matches(';'))
    }
}

/// Makes a label safe for use in a perfdata token: labels containing a
/// space, single quote, or equals sign are wrapped in single quotes
/// with internal single quotes doubled.
fn escape_label(label: &str) -> String {
    if label.contains([' ', '\'', '=']) {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.to_string()
    }
}

/// Accumulates serialized perfdata tokens over one plugin run.
///
/// The buffer is an explicit value owned by the caller: construct it at
/// plugin start, append each measurement, and hand it to the report
/// path once at exit. Appends are atomic: a record that fails
/// validation leaves the buffer unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerfDataBuffer {
    buffer: String,
}

impl PerfDataBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `data` and append its serialized token.
    ///
    /// The first appended token is prefixed with the `|` delimiter that
    /// starts the performance-data section; later tokens are separated
    /// by a single space.
    pub fn add(&mut self, data: &PerfData) -> Result<(), PerfDataError> {
        if data.label.is_empty() {
            return Err(PerfDataError::EmptyLabel);
        }
        if data.label.contains('\n') {
            return Err(PerfDataError::InvalidLabel);
        }

        if self.buffer.is_empty() {
            self.buffer.push('|');
        } else {
            self.buffer.push(' ');
        }
        self.buffer.push_str(&data.to_string());
        Ok(())
    }

    /// Whether anything has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The accumulated output, `|`-prefixed, or empty if nothing was
    /// appended.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl fmt::Display for PerfDataBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
