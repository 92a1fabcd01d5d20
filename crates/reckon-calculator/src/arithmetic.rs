//! Numeric kernels behind the calculator operations.
//!
//! These work on already-validated [`Number`]s. Integer arithmetic is checked:
//! when an `i64` result would overflow, the result is computed in `f64`
//! instead.

use crate::error::{CalcError, CalcResult};
use reckon_types::Number;

pub fn add(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => x
            .checked_add(y)
            .map_or_else(|| Number::Float(x as f64 + y as f64), Number::Integer),
        _ => Number::Float(a.as_f64() + b.as_f64()),
    }
}

pub fn subtract(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => x
            .checked_sub(y)
            .map_or_else(|| Number::Float(x as f64 - y as f64), Number::Integer),
        _ => Number::Float(a.as_f64() - b.as_f64()),
    }
}

pub fn multiply(a: Number, b: Number) -> Number {
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => x
            .checked_mul(y)
            .map_or_else(|| Number::Float(x as f64 * y as f64), Number::Integer),
        _ => Number::Float(a.as_f64() * b.as_f64()),
    }
}

/// True division. The divisor must already be known to be non-zero.
pub fn divide(a: Number, b: Number) -> Number {
    Number::Float(a.as_f64() / b.as_f64())
}

/// Exponentiation.
///
/// Integer bases with non-negative integer exponents stay integral. Zero
/// raised to a negative power, non-real results, and finite inputs that
/// overflow to infinity are value errors.
pub fn power(base: Number, exponent: Number) -> CalcResult<Number> {
    if base.is_zero() && exponent.is_negative() {
        return Err(CalcError::domain("power", "zero cannot be raised to a negative power"));
    }

    let result = match (base, exponent) {
        (Number::Integer(b @ -1..=1), Number::Integer(e)) => {
            let value = unit_power(b, e);
            if e >= 0 { Number::Integer(value) } else { Number::Float(value as f64) }
        }
        (Number::Integer(b), Number::Integer(e)) if e >= 0 => u32::try_from(e)
            .ok()
            .and_then(|e| b.checked_pow(e))
            .map_or_else(|| Number::Float((b as f64).powf(e as f64)), Number::Integer),
        _ => Number::Float(base.as_f64().powf(exponent.as_f64())),
    };

    if let Number::Float(value) = result {
        let (b, e) = (base.as_f64(), exponent.as_f64());
        if value.is_nan() && !b.is_nan() && !e.is_nan() {
            return Err(CalcError::domain(
                "power",
                "negative number cannot be raised to a fractional power",
            ));
        }
        if value.is_infinite() && b.is_finite() && e.is_finite() {
            return Err(CalcError::domain("power", "result out of range"));
        }
    }
    Ok(result)
}

/// `b^e` for `b` in `-1..=1`, exact for every `i64` exponent. Parity is taken
/// from the integer since odd exponents above 2^53 round to even in `f64`.
fn unit_power(b: i64, e: i64) -> i64 {
    match b {
        0 if e == 0 => 1,
        0 => 0,
        -1 if e % 2 != 0 => -1,
        _ => 1,
    }
}

pub fn sqrt(x: Number) -> CalcResult<Number> {
    let value = x.as_f64();
    if value < 0.0 {
        return Err(CalcError::domain("sqrt", "math domain error: negative input"));
    }
    Ok(Number::Float(value.sqrt()))
}

pub fn log10(x: Number) -> CalcResult<Number> {
    let value = x.as_f64();
    if value <= 0.0 {
        return Err(CalcError::domain("log10", "math domain error: input must be positive"));
    }
    Ok(Number::Float(value.log10()))
}
