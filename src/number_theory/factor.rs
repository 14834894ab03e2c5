use std::collections::BTreeMap;

use num_integer::Roots;
use tracing::trace;

use super::gcd::gcd_euclidean;

/// All positive divisors of `n`, ascending. Empty for zero.
pub(crate) fn divisors_of(n: u64) -> Vec<u64> {
    if n == 0 {
        return Vec::new();
    }

    let mut small = Vec::new();
    let mut large = Vec::new();
    for i in 1..=n.sqrt() {
        if n % i == 0 {
            small.push(i);
            if i != n / i {
                large.push(n / i);
            }
        }
    }
    small.extend(large.into_iter().rev());
    small
}

/// Divisors shared by `a` and `b`, ascending.
///
/// Every integer divides zero, so the common divisors with zero are the
/// divisors of the other operand.
pub(crate) fn common_divisors(a: u64, b: u64) -> Vec<u64> {
    match (a, b) {
        (0, n) | (n, 0) => divisors_of(n),
        _ => {
            let rhs = divisors_of(b);
            divisors_of(a)
                .into_iter()
                .filter(|f| rhs.binary_search(f).is_ok())
                .collect()
        }
    }
}

/// All positive divisors of `|n|`, ascending. Empty for zero.
#[inline]
pub fn divisors(n: i64) -> Vec<u64> {
    divisors_of(n.unsigned_abs())
}

/// Positive divisors shared by `a` and `b`, ascending.
///
/// The last element is always the greatest common divisor, which makes this an
/// independent path to it.
#[inline]
pub fn common_factors(a: i64, b: i64) -> Vec<u64> {
    common_divisors(a.unsigned_abs(), b.unsigned_abs())
}

/// Prime factors of `n` with repetition, ascending.
///
/// Trial division up to `floor(sqrt(remaining))`, then any leftover factor
/// greater than one. Empty for `n < 2`.
pub fn prime_factorization(n: i64) -> Vec<i64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut rest = n;
    let mut i = 2;
    while i <= rest / i {
        while rest % i == 0 {
            factors.push(i);
            rest /= i;
        }
        i += 1;
    }
    if rest > 1 {
        factors.push(rest);
    }
    trace!(n, ?factors, "prime factorization");
    factors
}

/// Prime factors of `n` aggregated as `prime -> exponent`, ordered by prime.
pub fn prime_factor_exponents(n: i64) -> BTreeMap<i64, u32> {
    let mut exponents = BTreeMap::new();
    for p in prime_factorization(n) {
        *exponents.entry(p).or_insert(0) += 1;
    }
    exponents
}

/// A natural number greater than one whose only divisors are one and itself.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// A number with more than one prime factor (counted with repetition).
#[inline]
pub fn is_composite(n: i64) -> bool {
    prime_factorization(n).len() > 1
}

/// Whether `a` and `b` share no prime factor.
pub fn is_coprime(a: i64, b: i64) -> bool {
    match (a.checked_abs(), b.checked_abs()) {
        (Some(a), Some(b)) if a != 0 && b != 0 => {
            let rhs = prime_factorization(b);
            prime_factorization(a)
                .iter()
                .all(|p| rhs.binary_search(p).is_err())
        }
        _ => gcd_euclidean(a, b) == 1,
    }
}
