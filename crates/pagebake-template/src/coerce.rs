//! Numeric coercion for filter inputs and parameters
//!
//! Page data is loosely typed: a price may arrive as `1999`, `19.99` or
//! `"19.99"`. Filters funnel every operand through these helpers so that
//! numbers and numeric text are accepted and everything else is rejected
//! with a [`CoercionError`] instead of silently becoming zero.

use minijinja::value::{Value, ValueKind};
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Errors raised when a value cannot be used as a number
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
    /// The value is neither a number nor text
    #[error("expected a number or numeric string, got {kind}")]
    NotNumeric { kind: String },

    /// Text that is not a float literal
    #[error("cannot parse '{text}' as a number: {source}")]
    InvalidFloat {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    /// Text that is not an integer literal
    #[error("cannot parse '{text}' as an integer: {source}")]
    InvalidInteger {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// A decimal count below zero
    #[error("decimal count must not be negative, got {0}")]
    NegativeDecimals(i64),
}

/// Coerce a float, integer or numeric string to `f64`
pub fn to_f64(value: &Value) -> Result<f64, CoercionError> {
    match value.kind() {
        ValueKind::Number => number_to_f64(value).ok_or_else(|| not_numeric(value)),
        ValueKind::String => {
            let text = value.as_str().unwrap_or_default();
            text.parse::<f64>()
                .map_err(|source| CoercionError::InvalidFloat {
                    text: text.to_string(),
                    source,
                })
        }
        _ => Err(not_numeric(value)),
    }
}

/// Coerce a decimal-place count
///
/// Integers pass through, floats truncate toward zero and text must be a
/// base-10 integer literal.
pub fn to_decimals(value: &Value) -> Result<usize, CoercionError> {
    let count = match value.kind() {
        ValueKind::Number => match value.as_i64() {
            Some(i) => i,
            None => number_to_f64(value).ok_or_else(|| not_numeric(value))?.trunc() as i64,
        },
        ValueKind::String => {
            let text = value.as_str().unwrap_or_default();
            text.parse::<i64>()
                .map_err(|source| CoercionError::InvalidInteger {
                    text: text.to_string(),
                    source,
                })?
        }
        _ => return Err(not_numeric(value)),
    };

    usize::try_from(count).map_err(|_| CoercionError::NegativeDecimals(count))
}

fn number_to_f64(value: &Value) -> Option<f64> {
    f64::try_from(value.clone())
        .ok()
        .or_else(|| value.as_i64().map(|i| i as f64))
}

fn not_numeric(value: &Value) -> CoercionError {
    CoercionError::NotNumeric {
        kind: value.kind().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_unchanged() {
        assert_eq!(to_f64(&Value::from(3.25)).unwrap(), 3.25);
    }

    #[test]
    fn test_integer_widened() {
        assert_eq!(to_f64(&Value::from(42)).unwrap(), 42.0);
        assert_eq!(to_f64(&Value::from(-7_i64)).unwrap(), -7.0);
    }

    #[test]
    fn test_numeric_text_parsed() {
        assert_eq!(to_f64(&Value::from("10")).unwrap(), 10.0);
        assert_eq!(to_f64(&Value::from("-0.5")).unwrap(), -0.5);
        assert_eq!(to_f64(&Value::from("1e3")).unwrap(), 1000.0);
    }

    #[test]
    fn test_invalid_text_rejected() {
        let err = to_f64(&Value::from("ten")).unwrap_err();
        assert!(matches!(err, CoercionError::InvalidFloat { ref text, .. } if text == "ten"));
    }

    #[test]
    fn test_text_is_not_trimmed() {
        assert!(to_f64(&Value::from(" 10")).is_err());
    }

    #[test]
    fn test_non_numeric_kinds_rejected() {
        for value in [
            Value::from(true),
            Value::from(()),
            Value::UNDEFINED,
            Value::from(vec![1, 2]),
        ] {
            assert!(
                matches!(to_f64(&value), Err(CoercionError::NotNumeric { .. })),
                "{:?} should not coerce",
                value
            );
        }
    }

    #[test]
    fn test_decimals_from_integer() {
        assert_eq!(to_decimals(&Value::from(3)).unwrap(), 3);
    }

    #[test]
    fn test_decimals_from_float_truncates() {
        assert_eq!(to_decimals(&Value::from(2.9)).unwrap(), 2);
        assert_eq!(to_decimals(&Value::from(1.0)).unwrap(), 1);
    }

    #[test]
    fn test_decimals_from_text() {
        assert_eq!(to_decimals(&Value::from("4")).unwrap(), 4);
        assert!(matches!(
            to_decimals(&Value::from("2.5")),
            Err(CoercionError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_negative_decimals_rejected() {
        assert_eq!(
            to_decimals(&Value::from(-1)).unwrap_err(),
            CoercionError::NegativeDecimals(-1)
        );
    }

    #[test]
    fn test_decimals_rejects_bool() {
        assert!(matches!(
            to_decimals(&Value::from(false)),
            Err(CoercionError::NotNumeric { .. })
        ));
    }
}
