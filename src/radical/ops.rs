use super::Radical;
use crate::error::{ArithmeticError, Result};

#[inline]
fn incompatible(lhs: Radical, rhs: Radical) -> ArithmeticError {
    ArithmeticError::IncompatibleRadicals { lhs, rhs }
}

/// Quotient of `dividend / divisor` when it is an integer.
fn exact_quotient(dividend: i64, divisor: i64) -> Result<i64> {
    match dividend.checked_rem(divisor) {
        Some(0) => dividend.checked_div(divisor).ok_or(ArithmeticError::Overflow),
        Some(_) => Err(ArithmeticError::NotDivisible { dividend, divisor }),
        None if divisor == 0 => Err(ArithmeticError::DivisionByZero),
        None => Err(ArithmeticError::Overflow),
    }
}

macro_rules! like_terms_impl {
    ($(#[$doc:meta])* $method:ident, $checked:ident) => {
        $(#[$doc])*
        pub fn $method(lhs: Radical, rhs: Radical) -> Result<Radical> {
            lhs.validate()?;
            rhs.validate()?;
            if lhs.degree != rhs.degree || lhs.radicand != rhs.radicand {
                return Err(incompatible(lhs, rhs));
            }

            let coeff = lhs.coeff.$checked(rhs.coeff).ok_or(ArithmeticError::Overflow)?;
            Ok(Radical::new_raw(coeff, lhs.degree, lhs.radicand))
        }
    };
}

like_terms_impl!(
    /// `a × ⁿ√b + c × ⁿ√b = (a + c) × ⁿ√b`
    ///
    /// Both degree and radicand must be equal, otherwise this fails with
    /// [ArithmeticError::IncompatibleRadicals]. The operands are not
    /// simplified first, see [combine_sum_any_degree](super::combine_sum_any_degree).
    add,
    checked_add
);
like_terms_impl!(
    /// `a × ⁿ√b - c × ⁿ√b = (a - c) × ⁿ√b`
    subtract,
    checked_sub
);

/// `a × ⁿ√b × c × ⁿ√d = (a × c) × ⁿ√(b × d)`
///
/// Only the degrees must agree.
pub fn multiply(lhs: Radical, rhs: Radical) -> Result<Radical> {
    lhs.validate()?;
    rhs.validate()?;
    if lhs.degree != rhs.degree {
        return Err(incompatible(lhs, rhs));
    }

    match (lhs.coeff.checked_mul(rhs.coeff), lhs.radicand.checked_mul(rhs.radicand)) {
        (Some(coeff), Some(radicand)) => Ok(Radical::new_raw(coeff, lhs.degree, radicand)),
        _ => Err(ArithmeticError::Overflow),
    }
}

/// `(a × ⁿ√b) / (c × ⁿ√d) = (a / c) × ⁿ√(b / d)`
///
/// Only the degrees must agree. A zero divisor fails with
/// [ArithmeticError::DivisionByZero], and quotients that are not integers
/// fail with [ArithmeticError::NotDivisible];
/// [divide_any_degree](super::divide_any_degree) handles those exactly.
pub fn divide(lhs: Radical, rhs: Radical) -> Result<Radical> {
    lhs.validate()?;
    rhs.validate()?;
    if lhs.degree != rhs.degree {
        return Err(incompatible(lhs, rhs));
    }
    if rhs.coeff == 0 || rhs.radicand == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }

    let coeff = exact_quotient(lhs.coeff, rhs.coeff)?;
    let radicand = exact_quotient(lhs.radicand, rhs.radicand)?;
    Ok(Radical::new_raw(coeff, lhs.degree, radicand))
}
