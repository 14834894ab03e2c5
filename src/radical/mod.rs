//! Data structures and algorithms related to `n`-th root radicals
//! `a × ⁿ√b` with integer coefficient and radicand.
//!
//! There are two representations
//! 1. [Radical] with an integer coefficient, closed under simplification,
//!    same-degree arithmetic and cross-degree multiplication.
//! 2. [RationalRadical] with a [Fraction] coefficient, produced by the
//!    cross-degree quotient.

mod cross_degree;
mod ops;
mod simplify;

pub use cross_degree::*;
pub use ops::*;
pub use simplify::*;

use core::convert::TryFrom;
use std::fmt;

use num_traits::ToPrimitive;

use crate::error::{ArithmeticError, Result};
use crate::fraction::{fraction_to_decimal, Fraction};
use crate::traits::{Approximation, Canonical, FromRoot};

/// A radical `coeff × degree-th root of radicand`.
///
/// A valid radical has `degree >= 2` and `radicand >= 0`. Values built with
/// [Radical::new_raw] are not checked until an operation consumes them.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Radical {
    coeff: i64,
    degree: i64,
    radicand: i64,
}

impl Radical {
    #[inline]
    pub const fn new_raw(coeff: i64, degree: i64, radicand: i64) -> Self {
        Radical { coeff, degree, radicand }
    }

    /// Create a validated radical
    #[inline]
    pub fn new(coeff: i64, degree: i64, radicand: i64) -> Result<Self> {
        let r = Radical::new_raw(coeff, degree, radicand);
        r.validate()?;
        Ok(r)
    }

    #[inline]
    pub const fn coeff(&self) -> i64 {
        self.coeff
    }

    #[inline]
    pub const fn degree(&self) -> i64 {
        self.degree
    }

    #[inline]
    pub const fn radicand(&self) -> i64 {
        self.radicand
    }

    /// Get the components `(coeff, degree, radicand)`
    #[inline]
    pub const fn parts(&self) -> (i64, i64, i64) {
        (self.coeff, self.degree, self.radicand)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_root(self.degree, self.radicand)
    }

    /// Returns the simplified radical, see [simplify]
    #[inline]
    pub fn simplified(self) -> Result<Self> {
        simplify(self)
    }

    /// Converts to an integer, rounding the root towards zero when the
    /// radical is irrational
    pub fn to_integer(&self) -> Approximation<i64> {
        match self.simplified() {
            Ok(s) if s.radicand == 0 => Approximation::Exact(0),
            Ok(s) if s.radicand == 1 => Approximation::Exact(s.coeff),
            _ => Approximation::Approximated(self.to_f64().map_or(0, |v| v.trunc() as i64)),
        }
    }
}

#[inline]
pub(crate) fn validate_root(degree: i64, radicand: i64) -> Result<()> {
    if degree < 2 {
        return Err(ArithmeticError::InvalidRange("radical degree must be at least 2"));
    }
    if radicand < 0 {
        return Err(ArithmeticError::InvalidRange("radicand must not be negative"));
    }
    Ok(())
}

/// `base^exp` with an `i64` exponent, failing on overflow.
#[inline]
pub(crate) fn checked_power(base: i64, exp: i64) -> Result<i64> {
    u32::try_from(exp)
        .ok()
        .and_then(|e| base.checked_pow(e))
        .ok_or(ArithmeticError::Overflow)
}

#[inline]
fn root_to_f64(degree: i64, radicand: i64) -> Option<f64> {
    if validate_root(degree, radicand).is_err() {
        return None;
    }
    Some((radicand as f64).powf(1. / degree as f64))
}

/// Expand the positional encodings `[degree, radicand]` and
/// `[coeff, degree, radicand]` into a validated [Radical].
#[inline]
pub fn normalize(encoded: &[i64]) -> Result<Radical> {
    Radical::try_from(encoded)
}

impl TryFrom<&[i64]> for Radical {
    type Error = ArithmeticError;

    fn try_from(encoded: &[i64]) -> Result<Self> {
        match *encoded {
            [degree, radicand] => Radical::from_root(degree, radicand),
            [coeff, degree, radicand] => Radical::new(coeff, degree, radicand),
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

impl FromRoot<i64> for Radical {
    type Error = ArithmeticError;

    #[inline]
    fn from_root(degree: i64, radicand: i64) -> Result<Self> {
        Radical::new(1, degree, radicand)
    }
}

impl Canonical for Radical {
    #[inline]
    fn canonical(&self) -> Result<Self> {
        simplify(*self)
    }
}

impl From<i64> for Radical {
    /// An integer as a square root radical with radicand one.
    #[inline]
    fn from(t: i64) -> Self {
        Radical::new_raw(t, 2, 1)
    }
}

impl ToPrimitive for Radical {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        match self.to_integer() {
            Approximation::Exact(v) => Some(v),
            Approximation::Approximated(_) => None,
        }
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_i64()?.to_u64()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(self.coeff as f64 * root_to_f64(self.degree, self.radicand)?)
    }
}

fn fmt_root(f: &mut fmt::Formatter<'_>, degree: i64, radicand: i64) -> fmt::Result {
    const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    if degree != 2 {
        for digit in degree.to_string().chars() {
            let sup = digit
                .to_digit(10)
                .map_or(digit, |d| SUPERSCRIPTS[d as usize]);
            write!(f, "{}", sup)?;
        }
    }
    write!(f, "√{}", radicand)
}

impl fmt::Display for Radical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coeff)?;
        fmt_root(f, self.degree, self.radicand)
    }
}

/// A radical `coeff × degree-th root of radicand` with a rational coefficient.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RationalRadical {
    coeff: Fraction,
    degree: i64,
    radicand: i64,
}

impl RationalRadical {
    #[inline]
    pub const fn new_raw(coeff: Fraction, degree: i64, radicand: i64) -> Self {
        RationalRadical { coeff, degree, radicand }
    }

    #[inline]
    pub const fn coeff(&self) -> Fraction {
        self.coeff
    }

    #[inline]
    pub const fn degree(&self) -> i64 {
        self.degree
    }

    #[inline]
    pub const fn radicand(&self) -> i64 {
        self.radicand
    }

    /// Get the components `(coeff, degree, radicand)`
    #[inline]
    pub const fn parts(&self) -> (Fraction, i64, i64) {
        (self.coeff, self.degree, self.radicand)
    }
}

impl From<Radical> for RationalRadical {
    #[inline]
    fn from(r: Radical) -> Self {
        RationalRadical::new_raw(Fraction::from(r.coeff), r.degree, r.radicand)
    }
}

impl ToPrimitive for RationalRadical {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        match self.radicand {
            0 => Some(0),
            1 => self.coeff.to_i64(),
            _ => None,
        }
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_i64()?.to_u64()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(fraction_to_decimal(self.coeff).ok()? * root_to_f64(self.degree, self.radicand)?)
    }
}

impl fmt::Display for RationalRadical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.coeff)?;
        fmt_root(f, self.degree, self.radicand)
    }
}
