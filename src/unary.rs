//! Unary operator functions.

use crate::CalcError;

pub fn negate(a: f64) -> f64 {
    -a
}

/// Square roots are only defined for non-negative operands.
pub fn validate_root(a: f64) -> Option<CalcError> {
    if a >= 0.0 {
        None
    } else {
        Some(CalcError::NegativeRoot)
    }
}
