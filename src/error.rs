use thiserror::Error;

use crate::radical::Radical;

/// Failure kinds shared by every operation of the crate.
///
/// No operation produces a partial result: inputs are validated eagerly and the
/// first violated condition is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("at least {expected} operands are required, got {actual}")]
    InvalidArity { expected: usize, actual: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("operand shape mismatch: expected at most {expected} elements, got {actual}")]
    MismatchedDimensions { expected: usize, actual: usize },

    #[error("radicals {lhs} and {rhs} are not compatible for this operation")]
    IncompatibleRadicals { lhs: Radical, rhs: Radical },

    #[error("integer overflow")]
    Overflow,

    #[error("value out of range: {0}")]
    InvalidRange(&'static str),

    #[error("{dividend} is not divisible by {divisor}")]
    NotDivisible { dividend: i64, divisor: i64 },
}

pub type Result<T> = std::result::Result<T, ArithmeticError>;

/// Check the number of supplied operands against a lower bound.
#[inline]
pub(crate) fn at_least(expected: usize, actual: usize) -> Result<()> {
    if actual < expected {
        Err(ArithmeticError::InvalidArity { expected, actual })
    } else {
        Ok(())
    }
}
