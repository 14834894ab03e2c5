use tracing::debug;

use super::{checked_power, simplify, RationalRadical, Radical};
use crate::error::{ArithmeticError, Result};
use crate::fraction::Fraction;
use crate::lcm::lcm_via_prime_powers;

/// Simplify `a × ⁿ√b` and `c × ᵐ√d` independently for a sum.
///
/// Radicals of different degree or radicand cannot be combined further; once
/// simplified, the pair is like terms exactly when degree and radicand
/// coincide, and [add](super::add) then applies.
pub fn combine_sum_any_degree(lhs: Radical, rhs: Radical) -> Result<(Radical, Radical)> {
    Ok((simplify(lhs)?, simplify(rhs)?))
}

/// Common degree `k = lcm(n, m)` for two radicals.
#[inline]
fn common_degree(lhs: &Radical, rhs: &Radical) -> Result<i64> {
    lhs.validate()?;
    rhs.validate()?;
    lcm_via_prime_powers(&[lhs.degree, rhs.degree])
}

/// `bˢ × dᵗ`
#[inline]
fn rescaled_product(b: i64, s: i64, d: i64, t: i64) -> Result<i64> {
    checked_power(b, s)?
        .checked_mul(checked_power(d, t)?)
        .ok_or(ArithmeticError::Overflow)
}

/// a × ⁿ√b × c × ᵐ√d = (a × c) × ᵏ√(bˢ × dᵗ)
/// where
/// - k = lcm(n, m)
/// - s = k / n
/// - t = k / m
///
/// The result is simplified at degree `k`.
pub fn multiply_any_degree(lhs: Radical, rhs: Radical) -> Result<Radical> {
    let k = common_degree(&lhs, &rhs)?;
    let s = k / lhs.degree;
    let t = k / rhs.degree;
    debug!(k, s, t, "multiplying radicals at a common degree");

    let radicand = rescaled_product(lhs.radicand, s, rhs.radicand, t)?;
    let coeff = lhs.coeff.checked_mul(rhs.coeff).ok_or(ArithmeticError::Overflow)?;
    simplify(Radical::new_raw(coeff, k, radicand))
}

/// (a × ⁿ√b) / (c × ᵐ√d) = (a / (c × d)) × ᵏ√(bˢ × dᵗ)
/// where
/// - k = lcm(n, m)
/// - s = k / n
/// - t = k × (m - 1) / m
///
/// The divisor root is rationalized, `1 / ᵐ√d = ᵐ√(dᵐ⁻¹) / d`, which is where
/// the `m - 1` in `t` and the extra `d` in the coefficient come from. The
/// result is not simplified.
pub fn divide_any_degree(lhs: Radical, rhs: Radical) -> Result<RationalRadical> {
    let k = common_degree(&lhs, &rhs)?;
    if rhs.coeff == 0 || rhs.radicand == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }

    let s = k / lhs.degree;
    let t = (k / rhs.degree)
        .checked_mul(rhs.degree - 1)
        .ok_or(ArithmeticError::Overflow)?;
    debug!(k, s, t, "dividing radicals at a common degree");

    let radicand = rescaled_product(lhs.radicand, s, rhs.radicand, t)?;
    let denom = rhs.coeff.checked_mul(rhs.radicand).ok_or(ArithmeticError::Overflow)?;
    // keep the sign on the numerator
    let (numer, denom) = if denom < 0 {
        match (lhs.coeff.checked_neg(), denom.checked_neg()) {
            (Some(n), Some(d)) => (n, d),
            _ => return Err(ArithmeticError::Overflow),
        }
    } else {
        (lhs.coeff, denom)
    };
    Ok(RationalRadical::new_raw(Fraction::new(numer, denom)?, k, radicand))
}
