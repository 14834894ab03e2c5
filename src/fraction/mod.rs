//! Exact fraction arithmetic on machine integers.
//!
//! Arithmetic is carried out on the improper form [Fraction]; [MixedNumber] is the
//! alternate surface form used for presentation and input. Every operation
//! rejects a zero or negative denominator before doing any arithmetic, and
//! every arithmetic result is returned reduced.

mod decimal;
mod mixed;

pub use decimal::*;
pub use mixed::*;

use core::convert::TryFrom;
use std::fmt;

use num_rational::Ratio;
use num_traits::ToPrimitive;
use tracing::debug;

use crate::error::{ArithmeticError, Result};
use crate::lcm::lcm_of_fraction_denominators;
use crate::number_theory::{gcd_common_factors, gcd_euclidean};
use crate::traits::Canonical;

/// A fraction `numer / denom`.
///
/// Values built with [Fraction::new_raw] are taken as-is; [reduce] turns them
/// into the canonical form where `denom > 0` and `gcd(|numer|, denom) == 1`
/// (zero is `0/1`).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fraction {
    numer: i64,
    denom: i64,
}

impl Fraction {
    #[inline]
    pub const fn new_raw(numer: i64, denom: i64) -> Self {
        Fraction { numer, denom }
    }

    /// Create a reduced fraction
    #[inline]
    pub fn new(numer: i64, denom: i64) -> Result<Self> {
        reduce(Fraction::new_raw(numer, denom))
    }

    #[inline]
    pub const fn numer(&self) -> i64 {
        self.numer
    }

    #[inline]
    pub const fn denom(&self) -> i64 {
        self.denom
    }

    /// Get the components `(numer, denom)`
    #[inline]
    pub const fn parts(&self) -> (i64, i64) {
        (self.numer, self.denom)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer == 0 && self.denom != 0
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.numer.checked_rem(self.denom) == Some(0)
    }

    #[inline]
    pub fn reduced(self) -> Result<Self> {
        reduce(self)
    }

    #[inline]
    pub fn recip(self) -> Result<Self> {
        reciprocal(self)
    }

    #[inline]
    pub fn to_mixed(self) -> Result<MixedNumber> {
        to_mixed(self)
    }

    #[inline]
    pub fn to_decimal(self) -> Result<f64> {
        fraction_to_decimal(self)
    }
}

#[inline]
pub(crate) fn check_denominator(denom: i64) -> Result<()> {
    if denom <= 0 {
        Err(ArithmeticError::DivisionByZero)
    } else {
        Ok(())
    }
}

/// Divide numerator and denominator by their greatest common factor.
///
/// The denominator is checked before reduction: zero or negative denominators
/// fail with [ArithmeticError::DivisionByZero].
pub fn reduce(fraction: Fraction) -> Result<Fraction> {
    check_denominator(fraction.denom)?;

    // bounded by the positive denominator
    let factor = gcd_common_factors(fraction.numer, fraction.denom) as i64;
    Ok(Fraction::new_raw(fraction.numer / factor, fraction.denom / factor))
}

/// Swap numerator and denominator, keeping the sign on the numerator.
pub fn reciprocal(fraction: Fraction) -> Result<Fraction> {
    check_denominator(fraction.denom)?;
    let (numer, denom) = match fraction.numer {
        0 => return Err(ArithmeticError::DivisionByZero),
        n if n < 0 => (-fraction.denom, n.checked_neg().ok_or(ArithmeticError::Overflow)?),
        n => (fraction.denom, n),
    };
    Ok(Fraction::new_raw(numer, denom))
}

macro_rules! fraction_sum_impl {
    ($(#[$doc:meta])* $method:ident, $checked:ident) => {
        $(#[$doc])*
        pub fn $method(lhs: Fraction, rhs: Fraction) -> Result<Fraction> {
            check_denominator(lhs.denom)?;
            check_denominator(rhs.denom)?;

            let (numer, denom) = if lhs.denom == rhs.denom {
                let numer = lhs.numer.$checked(rhs.numer).ok_or(ArithmeticError::Overflow)?;
                (numer, lhs.denom)
            } else {
                // a/b `op` c/d = (a*lcm/b `op` c*lcm/d)/lcm where lcm = lcm(b,d)
                let lcm = lcm_of_fraction_denominators(lhs.denom, rhs.denom)?;
                debug!(lcm, lhs = %lhs, rhs = %rhs, "aligning fractions to a common denominator");
                let l = (lcm / lhs.denom).checked_mul(lhs.numer);
                let r = (lcm / rhs.denom).checked_mul(rhs.numer);
                let numer = l
                    .zip(r)
                    .and_then(|(l, r)| l.$checked(r))
                    .ok_or(ArithmeticError::Overflow)?;
                (numer, lcm)
            };
            reduce(Fraction::new_raw(numer, denom))
        }
    };
}

fraction_sum_impl!(
    /// `n₁/d₁ + n₂/d₂`, reduced
    add,
    checked_add
);
fraction_sum_impl!(
    /// `n₁/d₁ - n₂/d₂`, reduced
    subtract,
    checked_sub
);

/// `n₁/d₁ × n₂/d₂`, reduced.
///
/// Common factors across the operands are cancelled before multiplying, so
/// the product only overflows when the reduced result does not fit.
pub fn multiply(lhs: Fraction, rhs: Fraction) -> Result<Fraction> {
    check_denominator(lhs.denom)?;
    check_denominator(rhs.denom)?;

    // gcd between lhs numerator and rhs denominator, and the other way around
    let g_lr = gcd_euclidean(lhs.numer, rhs.denom).max(1) as i64;
    let g_rl = gcd_euclidean(rhs.numer, lhs.denom).max(1) as i64;

    let numer = (lhs.numer / g_lr).checked_mul(rhs.numer / g_rl);
    let denom = (lhs.denom / g_rl).checked_mul(rhs.denom / g_lr);
    match (numer, denom) {
        (Some(n), Some(d)) => reduce(Fraction::new_raw(n, d)),
        _ => Err(ArithmeticError::Overflow),
    }
}

/// `n₁/d₁ ÷ n₂/d₂`, i.e. the product with the reciprocal of `rhs`.
///
/// Fails with [ArithmeticError::DivisionByZero] when `rhs` is zero.
pub fn divide(lhs: Fraction, rhs: Fraction) -> Result<Fraction> {
    check_denominator(lhs.denom)?;
    multiply(lhs, reciprocal(rhs)?)
}

impl Canonical for Fraction {
    #[inline]
    fn canonical(&self) -> Result<Self> {
        reduce(*self)
    }
}

impl From<i64> for Fraction {
    #[inline]
    fn from(t: i64) -> Self {
        Fraction::new_raw(t, 1)
    }
}

impl From<Ratio<i64>> for Fraction {
    #[inline]
    fn from(t: Ratio<i64>) -> Self {
        let (numer, denom) = t.into();
        Fraction::new_raw(numer, denom)
    }
}

impl TryFrom<Fraction> for Ratio<i64> {
    type Error = ArithmeticError;

    fn try_from(f: Fraction) -> Result<Self> {
        check_denominator(f.denom)?;
        Ok(Ratio::new(f.numer, f.denom))
    }
}

/// Accepts the positional encodings `[numer, denom]` and `[whole, numer, denom]`.
impl TryFrom<&[i64]> for Fraction {
    type Error = ArithmeticError;

    fn try_from(encoded: &[i64]) -> Result<Self> {
        match *encoded {
            [numer, denom] => Ok(Fraction::new_raw(numer, denom)),
            [whole, numer, denom] => MixedNumber::new(whole, numer, denom)?.to_improper(),
            _ if encoded.len() < 2 => Err(ArithmeticError::InvalidArity {
                expected: 2,
                actual: encoded.len(),
            }),
            _ => Err(ArithmeticError::MismatchedDimensions {
                expected: 3,
                actual: encoded.len(),
            }),
        }
    }
}

impl ToPrimitive for Fraction {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.numer.checked_div(self.denom)
        } else {
            None
        }
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_i64()?.to_u64()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        fraction_to_decimal(*self).ok()
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}
