use log::trace;
use std::collections::HashMap;

use crate::ops::Operation;
use crate::{CalcError, Result, StackEntry};

/// Evaluates one expression off the tail of `ops`.
///
/// Returns the value together with the prefix of `ops` that the expression did not consume.
/// Binary operators evaluate their topmost operand first and hand the pair to `apply` in
/// that order.
pub(crate) fn evaluate<'a>(
    ops: &'a [StackEntry],
    variables: &HashMap<String, f64>,
) -> Result<(f64, &'a [StackEntry])> {
    let (op, remaining) = ops.split_last().ok_or(CalcError::MissingArgument)?;
    trace!("evaluating {op} with {} entries below", remaining.len());

    match op {
        StackEntry::Operand(value) => Ok((*value, remaining)),
        StackEntry::Variable(name) => variables
            .get(name)
            .map(|value| (*value, remaining))
            .ok_or_else(|| CalcError::UnknownVariable(name.clone())),
        StackEntry::Operation(Operation::Constant { value, .. }) => Ok((*value, remaining)),
        StackEntry::Operation(Operation::Unary {
            apply, validate, ..
        }) => {
            let (operand, rest) = evaluate(remaining, variables)?;
            if let Some(error) = validate.and_then(|check| check(operand)) {
                return Err(error);
            }
            Ok((apply(operand), rest))
        }
        StackEntry::Operation(Operation::Binary {
            apply, validate, ..
        }) => {
            let (operand1, rest1) = evaluate(remaining, variables)?;
            let (operand2, rest2) = evaluate(rest1, variables)?;
            if let Some(error) = validate.and_then(|check| check(operand1, operand2)) {
                return Err(error);
            }
            Ok((apply(operand1, operand2), rest2))
        }
    }
}
