//! Least common multiple, by prime-power reconstruction and by its relation to
//! the greatest common divisor.

use core::convert::TryFrom;
use std::collections::BTreeMap;

use crate::error::{at_least, ArithmeticError, Result};
use crate::fraction::Fraction;
use crate::number_theory::{gcd_common_factors, gcd_euclidean, prime_factor_exponents};

/// 1. Factorize every value into prime powers.
/// 2. Keep the highest power of each prime.
/// 3. Multiply these powers together.
///
/// Any zero operand makes the result zero. Fails with
/// [ArithmeticError::InvalidArity] for fewer than two values.
pub fn lcm_via_prime_powers(values: &[i64]) -> Result<i64> {
    at_least(2, values.len())?;
    if values.contains(&0) {
        return Ok(0);
    }

    let mut powers: BTreeMap<i64, u32> = BTreeMap::new();
    for value in values {
        let magnitude = value.checked_abs().ok_or(ArithmeticError::Overflow)?;
        for (prime, exponent) in prime_factor_exponents(magnitude) {
            let max = powers.entry(prime).or_insert(0);
            *max = (*max).max(exponent);
        }
    }

    powers.into_iter().try_fold(1i64, |lcm, (prime, exponent)| {
        prime
            .checked_pow(exponent)
            .and_then(|power| lcm.checked_mul(power))
            .ok_or(ArithmeticError::Overflow)
    })
}

/// `lcm(a, b) = |a·b| / gcd(a, b)`
pub fn lcm_via_gcf(a: i64, b: i64) -> Result<i64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let gcd = gcd_euclidean(a, b);
    (a.unsigned_abs() / gcd)
        .checked_mul(b.unsigned_abs())
        .and_then(|lcm| i64::try_from(lcm).ok())
        .ok_or(ArithmeticError::Overflow)
}

/// Left fold of [lcm_via_gcf] across two or more values.
pub fn lcm_via_gcf_of(values: &[i64]) -> Result<i64> {
    at_least(2, values.len())?;
    values[1..]
        .iter()
        .try_fold(values[0], |acc, &v| lcm_via_gcf(acc, v))
}

/// Common denominator used to align two fractions.
#[inline]
pub fn lcm_of_fraction_denominators(d1: i64, d2: i64) -> Result<i64> {
    lcm_via_prime_powers(&[d1, d2])
}

/// The least common multiple of two fractions,
/// `lcm(numerators) / gcd(denominators)` in reduced form.
pub fn lcm_of_fractions(f1: Fraction, f2: Fraction) -> Result<Fraction> {
    let (n1, d1) = f1.reduced()?.parts();
    let (n2, d2) = f2.reduced()?.parts();
    let numer = lcm_via_prime_powers(&[n1, n2])?;
    // both denominators are positive, so their gcd fits
    let denom = i64::try_from(gcd_common_factors(d1, d2)).map_err(|_| ArithmeticError::Overflow)?;
    Fraction::new(numer, denom)
}
