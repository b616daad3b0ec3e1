//! Binary operator functions.
//!
//! Every function receives `(top, next)`: `top` is the operand evaluated first, i.e. the
//! one pushed last. For `3 4 −` that is `top = 4, next = 3`, so subtraction computes
//! `next - top` and reads the same as the printed `3−4`.

use crate::CalcError;

pub fn multiply(top: f64, next: f64) -> f64 {
    next * top
}
pub fn divide(top: f64, next: f64) -> f64 {
    next / top
}
pub fn add(top: f64, next: f64) -> f64 {
    next + top
}
pub fn subtract(top: f64, next: f64) -> f64 {
    next - top
}

/// The divisor is the topmost operand.
pub fn validate_divisor(top: f64, _next: f64) -> Option<CalcError> {
    if top != 0.0 {
        None
    } else {
        Some(CalcError::DivisionByZero)
    }
}
