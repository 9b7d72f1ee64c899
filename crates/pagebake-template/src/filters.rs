//! Numeric filters for page templates
//!
//! These filters extend minijinja with the arithmetic page data needs.

use crate::coerce::{self, CoercionError};
use minijinja::value::Value;
use minijinja::{Error, ErrorKind};

fn filter_error(filter: &str, err: CoercionError) -> Error {
    Error::new(ErrorKind::InvalidOperation, format!("{} filter", filter)).with_source(err)
}

/// Divide a number by the bound divisor
///
/// Follows IEEE-754: dividing by zero yields infinity (or NaN for `0 / 0`).
/// Without a divisor the input is returned as a float.
pub fn divided_by(value: Value, divisor: Option<Value>) -> Result<f64, Error> {
    let dividend = coerce::to_f64(&value).map_err(|e| filter_error("divided_by", e))?;
    let divisor = match divisor {
        Some(d) => coerce::to_f64(&d).map_err(|e| filter_error("divided_by", e))?,
        None => 1.0,
    };

    Ok(dividend / divisor)
}

/// Format a number in fixed-point notation with the bound decimal count
///
/// The result is text. Ties round half-to-even on the exact binary value,
/// so `2.5 | round` gives `2` while `3.5 | round` gives `4`.
pub fn round(value: Value, decimals: Option<Value>) -> Result<String, Error> {
    let number = coerce::to_f64(&value).map_err(|e| filter_error("round", e))?;
    let decimals = match decimals {
        Some(d) => coerce::to_decimals(&d).map_err(|e| filter_error("round", e))?,
        None => 0,
    };

    Ok(format!("{:.*}", decimals, number))
}
