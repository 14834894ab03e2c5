use core::convert::TryFrom;
use num_traits::{PrimInt, Unsigned};

use super::factor::common_divisors;
use crate::error::{at_least, ArithmeticError, Result};
use crate::lcm::lcm_via_prime_powers;

/// Algorithm used when folding a greatest common divisor across several values.
///
/// All strategies compute the same value whenever it is representable:
/// [GcdStrategy::LeastCommonMultiple] fails with [ArithmeticError::Overflow]
/// once an intermediate least common multiple leaves `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GcdStrategy {
    /// Repeated remainder, see [gcd_euclidean]
    Euclidean,
    /// Stein's algorithm, see [gcd_binary]
    Binary,
    /// Largest common divisor, see [gcd_common_factors]
    CommonFactors,
    /// `|a·b| / lcm(a, b)`, see [gcd_via_lcm]
    LeastCommonMultiple,
}

impl Default for GcdStrategy {
    #[inline]
    fn default() -> Self {
        GcdStrategy::Euclidean
    }
}

/// The [Euclidean GCD] algorithm.
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Euclidean_algorithm
fn euclidean<N: Unsigned + PrimInt>(mut u: N, mut v: N) -> N {
    let mut t;
    while !v.is_zero() {
        t = v;
        v = u % v;
        u = t;
    }
    u
}

/// The [Binary GCD] algorithm, or Stein's algorithm.
///
/// [Binary GCD]: https://en.wikipedia.org/wiki/Binary_GCD_algorithm
fn binary<N: Unsigned + PrimInt>(mut u: N, mut v: N) -> N {
    if u.is_zero() {
        return v;
    }
    if v.is_zero() {
        return u;
    }

    // common power of two, re-applied at the end
    let shift_back = (u | v).trailing_zeros() as usize;
    u = u >> u.trailing_zeros() as usize;
    loop {
        v = v >> v.trailing_zeros() as usize;
        if u > v {
            core::mem::swap(&mut u, &mut v);
        }
        v = v - u;
        if v.is_zero() {
            break;
        }
    }
    u << shift_back
}

/// Greatest common divisor by repeated remainder (`a, b := b, a mod b`).
///
/// Operates on absolute values, so `gcd(a, 0) == |a|` and `gcd(0, 0) == 0`.
/// The result is a magnitude, which is why `u64` is returned: `|i64::MIN|`
/// does not fit into `i64`.
#[inline]
pub fn gcd_euclidean(a: i64, b: i64) -> u64 {
    euclidean(a.unsigned_abs(), b.unsigned_abs())
}

/// Greatest common divisor by Stein's algorithm.
///
/// Always equal to [gcd_euclidean].
#[inline]
pub fn gcd_binary(a: i64, b: i64) -> u64 {
    binary(a.unsigned_abs(), b.unsigned_abs())
}

/// Greatest common divisor as the largest element of [common_factors](super::common_factors).
#[inline]
pub fn gcd_common_factors(a: i64, b: i64) -> u64 {
    largest_common_divisor(a.unsigned_abs(), b.unsigned_abs())
}

/// Greatest common divisor through the relation `gcd(a, b) = |a·b| / lcm(a, b)`.
///
/// Fails with [ArithmeticError::Overflow] when the least common multiple is
/// not representable.
pub fn gcd_via_lcm(a: i64, b: i64) -> Result<u64> {
    if a == 0 || b == 0 {
        // lcm is zero, fall back to the identity gcd(a, 0) = |a|
        return Ok(gcd_euclidean(a, b));
    }
    let lcm = lcm_via_prime_powers(&[a, b])?;
    let product = u128::from(a.unsigned_abs()) * u128::from(b.unsigned_abs());
    u64::try_from(product / lcm.unsigned_abs() as u128).map_err(|_| ArithmeticError::Overflow)
}

#[inline]
fn largest_common_divisor(a: u64, b: u64) -> u64 {
    common_divisors(a, b).last().copied().unwrap_or(0)
}

fn step(strategy: GcdStrategy, acc: u64, value: i64) -> Result<u64> {
    let value = value.unsigned_abs();
    Ok(match strategy {
        GcdStrategy::Euclidean => euclidean(acc, value),
        GcdStrategy::Binary => binary(acc, value),
        GcdStrategy::CommonFactors => largest_common_divisor(acc, value),
        GcdStrategy::LeastCommonMultiple if acc == 0 || value == 0 => euclidean(acc, value),
        GcdStrategy::LeastCommonMultiple => {
            let acc = i64::try_from(acc).map_err(|_| ArithmeticError::Overflow)?;
            let value = i64::try_from(value).map_err(|_| ArithmeticError::Overflow)?;
            gcd_via_lcm(acc, value)?
        }
    })
}

/// Greatest common divisor of two or more values with the default strategy.
///
/// Fails with [ArithmeticError::InvalidArity] for fewer than two values.
#[inline]
pub fn gcd_of(values: &[i64]) -> Result<u64> {
    gcd_of_with(values, GcdStrategy::default())
}

/// Greatest common divisor of two or more values, as a left fold of `strategy`.
pub fn gcd_of_with(values: &[i64], strategy: GcdStrategy) -> Result<u64> {
    at_least(2, values.len())?;
    values[1..]
        .iter()
        .try_fold(values[0].unsigned_abs(), |acc, &v| step(strategy, acc, v))
}
