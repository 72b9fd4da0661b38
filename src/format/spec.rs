use std::{fmt, str::FromStr};

use crate::error::Error;

/// How a scaled quantity is rendered to text.
///
/// Parses from printf-style directives (`%.2f`, `%f`, `%v`) or a bare digit
/// count, and renders with Rust's native float formatting.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FormatSpec {
    precision: Option<usize>,
}

impl FormatSpec {
    pub const DEFAULT_PRECISION: usize = 2;
    /// Digits used by a bare `%f`.
    pub const PRINTF_PRECISION: usize = 6;

    /// Exactly `digits` fractional digits.
    pub const fn precision(digits: usize) -> Self {
        Self {
            precision: Some(digits),
        }
    }

    /// Shortest text that reads back as the same `f64`.
    pub const fn shortest() -> Self {
        Self { precision: None }
    }

    pub fn render(&self, v: f64) -> String {
        match self.precision {
            Some(digits) => format!("{v:.digits$}"),
            None => format!("{v}"),
        }
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::precision(Self::DEFAULT_PRECISION)
    }
}

impl FromStr for FormatSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidFormatSpec { spec: s.to_owned() };

        if s.is_empty() {
            return Ok(Self::default());
        }
        if s == "%v" {
            return Ok(Self::shortest());
        }
        if let Ok(digits) = s.parse::<usize>() {
            return Ok(Self::precision(digits));
        }

        let body = s
            .strip_prefix('%')
            .and_then(|rest| rest.strip_suffix('f'))
            .ok_or_else(invalid)?;
        match body.strip_prefix('.') {
            None if body.is_empty() => Ok(Self::precision(Self::PRINTF_PRECISION)),
            None => Err(invalid()),
            Some("") => Ok(Self::precision(0)),
            Some(digits) if digits.bytes().all(|b| b.is_ascii_digit()) => digits
                .parse()
                .map(Self::precision)
                .map_err(|_| invalid()),
            Some(_) => Err(invalid()),
        }
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            Some(digits) => write!(f, "%.{digits}f"),
            None => f.write_str("%v"),
        }
    }
}
