use num_integer::Integer;
use tracing::trace;

use super::{checked_power, validate_root, Radical};
use crate::error::{ArithmeticError, Result};
use crate::number_theory::prime_factor_exponents;

/// Split `radicand` into `(outside, inside)` for a root of `degree`, such that
/// `outside^degree × inside == radicand` and `inside` has no factor that is a
/// perfect `degree`-th power.
///
/// Each prime `p^e` of the radicand contributes `p^(e / degree)` outside and
/// `p^(e % degree)` inside. A zero radicand gives `(0, 0)`.
pub fn extract_root_groups(degree: i64, radicand: i64) -> Result<(i64, i64)> {
    validate_root(degree, radicand)?;
    if radicand == 0 {
        return Ok((0, 0));
    }

    let exponents = prime_factor_exponents(radicand);
    trace!(degree, radicand, ?exponents, "extracting root groups");

    let mut outside = 1i64;
    let mut inside = 1i64;
    for (prime, exponent) in exponents {
        let (out_exp, in_exp) = i64::from(exponent).div_rem(&degree);
        outside = outside
            .checked_mul(checked_power(prime, out_exp)?)
            .ok_or(ArithmeticError::Overflow)?;
        inside = inside
            .checked_mul(checked_power(prime, in_exp)?)
            .ok_or(ArithmeticError::Overflow)?;
    }
    Ok((outside, inside))
}

/// Move every perfect `degree`-th power out of the radicand into the
/// coefficient.
///
/// `simplify(simplify(r)) == simplify(r)` for every valid radical. A zero
/// radicand simplifies to `0 × ⁿ√0`.
pub fn simplify(radical: Radical) -> Result<Radical> {
    let (coeff, degree, radicand) = radical.parts();
    let (outside, inside) = extract_root_groups(degree, radicand)?;
    let coeff = coeff.checked_mul(outside).ok_or(ArithmeticError::Overflow)?;
    Ok(Radical::new_raw(coeff, degree, inside))
}
