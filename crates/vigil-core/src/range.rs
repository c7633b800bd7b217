//! Threshold ranges in the conventional check-plugin format.
//!
//! The textual form is `[@]start:end`, where:
//! 1. `start` must not exceed `end`
//! 2. `start:` may be omitted if `start` is 0
//! 3. an empty `end` means positive infinity
//! 4. `~` as `start` means negative infinity
//! 5. a leading `@` complements the range: membership means being
//!    *outside* `[start, end]`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a textual range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The input was empty (or a bare `@`).
    #[error("empty range")]
    Empty,
    /// A bound was not a decimal number.
    #[error("invalid number in range: {0}")]
    InvalidNumber(String),
    /// A bound parsed to NaN.
    #[error("NaN not allowed in ranges")]
    NanBound,
    /// The lower bound exceeded the upper bound.
    #[error("start greater than end")]
    StartGreaterThanEnd,
}

/// An inclusive numeric interval, optionally complemented, used to
/// classify a measured value.
///
/// Construct a `Range` by parsing its textual form:
///
/// ```
/// use vigil_core::Range;
///
/// let range: Range = "10:20".parse()?;
/// assert!(range.in_range(15.0));
/// assert!(!range.in_range(25.0));
/// # Ok::<(), vigil_core::RangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Range {
    start: f64,
    end: f64,
    complement: bool,
}

impl Range {
    /// Lower bound (inclusive). May be negative infinity.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound (inclusive). May be positive infinity.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Whether membership means being outside `[start, end]`.
    #[must_use]
    pub fn is_complement(&self) -> bool {
        self.complement
    }

    /// Check whether `value` is in the range.
    #[must_use]
    pub fn in_range(&self, value: f64) -> bool {
        if self.complement {
            value < self.start || self.end < value
        } else {
            self.start <= value && value <= self.end
        }
    }

    /// Replace this range with the one described by `spec`.
    ///
    /// All-or-nothing: on a parse error the previous bounds and
    /// complement flag are left untouched.
    pub fn set(&mut self, spec: &str) -> Result<(), RangeError> {
        *self = spec.parse()?;
        Ok(())
    }
}

impl FromStr for Range {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "@" {
            return Err(RangeError::Empty);
        }

        let (complement, rest) = match s.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        // Without a colon the whole text is the upper bound and the
        // lower bound defaults to zero.
        let (lower, upper) = match rest.split_once(':') {
            Some((lower, upper)) => (lower, upper),
            None => ("0", rest),
        };

        let start = if lower == "~" {
            f64::NEG_INFINITY
        } else {
            parse_bound(lower)?
        };

        let end = if upper.is_empty() {
            f64::INFINITY
        } else {
            parse_bound(upper)?
        };

        if start > end {
            return Err(RangeError::StartGreaterThanEnd);
        }

        Ok(Self {
            start,
            end,
            complement,
        })
    }
}

fn parse_bound(s: &str) -> Result<f64, RangeError> {
    let value: f64 = s
        .parse()
        .map_err(|_| RangeError::InvalidNumber(s.to_string()))?;
    if value.is_nan() {
        return Err(RangeError::NanBound);
    }
    Ok(value)
}

impl fmt::Display for Range {
    /// Formats the range so that re-parsing it yields the same bounds
    /// and complement flag.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();

        if self.complement {
            s.push('@');
        }

        // Print the start value unless it's zero; ranges like `@20` are
        // ambiguous to a reader, so make the zero explicit in that case.
        if self.start == f64::NEG_INFINITY {
            s.push_str("~:");
        } else if self.start != 0.0 {
            s.push_str(&format!("{}:", self.start));
        } else if self.complement {
            s.push_str("0:");
        }

        // Print the end value unless it's infinite, making sure we never
        // produce an empty token.
        if self.end != f64::INFINITY {
            s.push_str(&format!("{}", self.end));
        } else if s.is_empty() {
            s.push_str("0:");
        }

        f.write_str(&s)
    }
}

impl From<Range> for String {
    fn from(range: Range) -> Self {
        range.to_string()
    }
}

impl TryFrom<String> for Range {
    type Error = RangeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
