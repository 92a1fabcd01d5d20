use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Decimal exponents outside `MIN_PLAIN_EXPONENT..MAX_PLAIN_EXPONENT` render in
/// exponent form, e.g. `1e-05` and `1e+16`.
const MIN_PLAIN_EXPONENT: i32 = -4;
const MAX_PLAIN_EXPONENT: i32 = 16;

/// A numeric result produced by the calculator.
///
/// Integers stay integers for as long as the arithmetic allows; anything that
/// touches a float, or overflows `i64`, becomes a `Float`. Comparison is
/// numeric across variants, so `Integer(4) == Float(4.0)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
}

impl Number {
    /// Numeric value as `f64`. Large integers lose precision.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Integer value, if this is an `Integer`.
    pub fn as_integer(self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(i),
            Number::Float(_) => None,
        }
    }

    /// True for `0`, `0.0` and `-0.0`.
    pub fn is_zero(self) -> bool {
        match self {
            Number::Integer(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    /// True for negative values. `-0.0` is not negative.
    pub fn is_negative(self) -> bool {
        match self {
            Number::Integer(i) => i < 0,
            Number::Float(f) => f < 0.0,
        }
    }

    /// True for the `Float` variant.
    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a.partial_cmp(b),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::Float(fl) => f.write_str(&format_float(*fl)),
        }
    }
}

/// Renders a float in its shortest round-trip form. Integral values keep a
/// trailing `.0`, which keeps `2.0` distinguishable from the integer `2` in
/// operation descriptions; very large or small magnitudes use a signed,
/// two-digit exponent (`1e+20`, `2.5e-07`).
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    let scientific = format!("{value:e}");
    let exponent = scientific
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)))
        .filter(|(_, exp)| !(MIN_PLAIN_EXPONENT..MAX_PLAIN_EXPONENT).contains(exp));
    if let Some((mantissa, exp)) = exponent {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
    }

    let plain = format!("{value}");
    if plain.contains('.') { plain } else { format!("{plain}.0") }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
