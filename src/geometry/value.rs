use std::{fmt, str::FromStr};

use crate::foundation::error::{SegmentError, SegmentResult};

/// A `begin`/`end` value as supplied by a caller: a length or a percentage expression.
///
/// Deserializes from either a JSON number or a JSON string.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    /// Absolute position in path-length units.
    Length(f64),
    /// Expression such as `"50%"`, `"50%+10"` or `"-25%-4"`, or a numeric string.
    Expr(String),
}

impl Endpoint {
    /// Resolve against a path of `total_length`. See [`resolve_value`].
    pub fn resolve(&self, total_length: f64) -> SegmentResult<f64> {
        resolve_value(self, total_length)
    }
}

impl From<f64> for Endpoint {
    fn from(v: f64) -> Self {
        Self::Length(v)
    }
}

impl From<f32> for Endpoint {
    fn from(v: f32) -> Self {
        Self::Length(f64::from(v))
    }
}

impl From<i32> for Endpoint {
    fn from(v: i32) -> Self {
        Self::Length(f64::from(v))
    }
}

impl From<&str> for Endpoint {
    fn from(v: &str) -> Self {
        Self::Expr(v.to_owned())
    }
}

impl From<String> for Endpoint {
    fn from(v: String) -> Self {
        Self::Expr(v)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(v) => write!(f, "{v}"),
            Self::Expr(s) => f.write_str(s),
        }
    }
}

/// Parsed endpoint expression, independent of any path length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LengthExpr {
    /// A plain number.
    Absolute(f64),
    /// `percent`% of the total length plus `offset`.
    Percent {
        /// Signed percentage of the total length.
        percent: f64,
        /// Signed fixed offset added after scaling.
        offset: f64,
    },
}

impl LengthExpr {
    /// Parse a numeric string or one of the percentage shapes `P%`, `-P%`, `P%+D`, `P%-D`,
    /// `-P%+D` and `-P%-D`. Whitespace around the whole input and around the operator is ignored.
    pub fn parse(input: &str) -> SegmentResult<Self> {
        let s = input.trim();
        let Some(pct_at) = s.find('%') else {
            return parse_number(s, input).map(Self::Absolute);
        };

        let tail = &s[pct_at + 1..];
        if tail.contains('%') {
            return Err(SegmentError::invalid_value(format!(
                "'{input}': more than one '%'"
            )));
        }

        let percent = parse_number(s[..pct_at].trim_end(), input)?;
        let tail = tail.trim();
        let offset = if tail.is_empty() {
            0.0
        } else {
            let (sign, rest) = if let Some(rest) = tail.strip_prefix('+') {
                (1.0, rest.trim_start())
            } else if let Some(rest) = tail.strip_prefix('-') {
                (-1.0, rest.trim_start())
            } else {
                return Err(SegmentError::invalid_value(format!(
                    "'{input}': expected '+' or '-' after '%'"
                )));
            };
            if !rest.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                return Err(SegmentError::invalid_value(format!(
                    "'{input}': offset must be an unsigned number"
                )));
            }
            sign * parse_number(rest, input)?
        };

        Ok(Self::Percent { percent, offset })
    }

    /// Evaluate against a path of `total_length`.
    pub fn resolve(self, total_length: f64) -> f64 {
        match self {
            Self::Absolute(v) => v,
            Self::Percent { percent, offset } => percent * total_length / 100.0 + offset,
        }
    }
}

impl FromStr for LengthExpr {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LengthExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Absolute(v) => write!(f, "{v}"),
            Self::Percent { percent, offset } if offset == 0.0 => write!(f, "{percent}%"),
            Self::Percent { percent, offset } if offset < 0.0 => {
                write!(f, "{percent}%-{}", -offset)
            }
            Self::Percent { percent, offset } => write!(f, "{percent}%+{offset}"),
        }
    }
}

fn parse_number(s: &str, input: &str) -> SegmentResult<f64> {
    // `f64::from_str` also takes "inf"/"NaN"; endpoint syntax only allows digits and exponents.
    let lexical = !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    let v = if lexical { s.parse::<f64>().ok() } else { None };
    match v {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(SegmentError::invalid_value(format!(
            "'{input}': '{s}' is not a number"
        ))),
    }
}

/// Resolve an endpoint into path-length units.
///
/// Numbers pass through; strings are parsed with [`LengthExpr::parse`] and scaled by
/// `total_length`. Non-finite results and unrecognized shapes are
/// [`SegmentError::InvalidValue`].
pub fn resolve_value(input: &Endpoint, total_length: f64) -> SegmentResult<f64> {
    let v = match input {
        Endpoint::Length(v) => *v,
        Endpoint::Expr(s) => LengthExpr::parse(s)?.resolve(total_length),
    };
    if !v.is_finite() {
        return Err(SegmentError::invalid_value(format!(
            "endpoint '{input}' does not resolve to a finite length"
        )));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/value.rs"]
mod tests;
