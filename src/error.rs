//! Errors raised by the calculator brain.

use thiserror::Error;

/// Everything that can go wrong while pushing onto or evaluating a brain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("variable '{0}' has no value")]
    UnknownVariable(String),

    #[error("missing argument")]
    MissingArgument,

    #[error("division by zero")]
    DivisionByZero,

    #[error("square root of a negative number")]
    NegativeRoot,
}

pub type Result<T> = std::result::Result<T, CalcError>;
