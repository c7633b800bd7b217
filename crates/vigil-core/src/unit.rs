//! Units of measure for performance data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for an unrecognized unit-of-measure token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid unit of measure {token}")]
pub struct UnitError {
    token: String,
}

impl UnitError {
    /// The token that failed to parse.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Unit of measure attached to a performance-data value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    /// Dimensionless value.
    #[default]
    None,
    /// Seconds.
    Seconds,
    /// Microseconds.
    Microseconds,
    /// Milliseconds.
    Milliseconds,
    /// Percentage.
    Percent,
    /// Bytes.
    Bytes,
    /// Kilobytes.
    Kilobytes,
    /// Megabytes.
    Megabytes,
    /// Gigabytes.
    Gigabytes,
    /// Terabytes.
    Terabytes,
    /// Continuous counter.
    Counter,
}

impl Unit {
    /// The canonical token emitted in perfdata output.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Seconds => "s",
            Self::Microseconds => "us",
            Self::Milliseconds => "ms",
            Self::Percent => "%",
            Self::Bytes => "B",
            Self::Kilobytes => "kB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
            Self::Terabytes => "TB",
            Self::Counter => "c",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    /// Parses a unit token, ignoring case. The counter unit is the
    /// exception: it must be a lowercase `c`, since uppercase `C` reads
    /// as Celsius, which is not a recognized unit of measure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "c" {
            return Ok(Self::Counter);
        }
        match s.to_ascii_lowercase().as_str() {
            "" => Ok(Self::None),
            "s" => Ok(Self::Seconds),
            "us" => Ok(Self::Microseconds),
            "ms" => Ok(Self::Milliseconds),
            "%" => Ok(Self::Percent),
            "b" => Ok(Self::Bytes),
            "kb" => Ok(Self::Kilobytes),
            "mb" => Ok(Self::Megabytes),
            "gb" => Ok(Self::Gigabytes),
            "tb" => Ok(Self::Terabytes),
            _ => Err(UnitError {
                token: s.to_string(),
            }),
        }
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.token().to_string()
    }
}

impl TryFrom<String> for Unit {
    type Error = UnitError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Unit; 11] = [
        Unit::None,
        Unit::Seconds,
        Unit::Microseconds,
        Unit::Milliseconds,
        Unit::Percent,
        Unit::Bytes,
        Unit::Kilobytes,
        Unit::Megabytes,
        Unit::Gigabytes,
        Unit::Terabytes,
        Unit::Counter,
    ];

    #[test]
    fn test_canonical_tokens_round_trip() {
        for unit in ALL {
            assert_eq!(unit.token().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("KB".parse::<Unit>().unwrap(), Unit::Kilobytes);
        assert_eq!("Kb".parse::<Unit>().unwrap(), Unit::Kilobytes);
        assert_eq!("MB".parse::<Unit>().unwrap(), Unit::Megabytes);
        assert_eq!("tb".parse::<Unit>().unwrap(), Unit::Terabytes);
        assert_eq!("US".parse::<Unit>().unwrap(), Unit::Microseconds);
        assert_eq!("b".parse::<Unit>().unwrap(), Unit::Bytes);
        assert_eq!("S".parse::<Unit>().unwrap(), Unit::Seconds);
    }

    #[test]
    fn test_uppercase_c_is_not_a_counter() {
        let err = "C".parse::<Unit>().unwrap_err();
        assert_eq!(err.token(), "C");
        assert_eq!("c".parse::<Unit>().unwrap(), Unit::Counter);
    }

    #[test]
    fn test_unknown_token_names_offender() {
        let err = "lightyears".parse::<Unit>().unwrap_err();
        assert_eq!(err.to_string(), "invalid unit of measure lightyears");
    }

    #[test]
    fn test_display_preserves_canonical_case() {
        assert_eq!(Unit::Kilobytes.to_string(), "kB");
        assert_eq!(Unit::Percent.to_string(), "%");
        assert_eq!(Unit::None.to_string(), "");
    }
}
