use core::convert::TryFrom;
use std::fmt;

use num_integer::Integer;

use super::{check_denominator, fraction_to_decimal, Fraction};
use crate::error::{ArithmeticError, Result};

/// A mixed number `whole + numer/denom`.
///
/// In a valid mixed number `denom > 0`, `|numer| < denom` and a non-zero
/// `numer` has the same sign as a non-zero `whole`. Negative values are
/// written with the sign on both parts, e.g. `-7/2` is `(-3, -1, 2)`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixedNumber {
    whole: i64,
    numer: i64,
    denom: i64,
}

impl MixedNumber {
    #[inline]
    pub const fn new_raw(whole: i64, numer: i64, denom: i64) -> Self {
        MixedNumber { whole, numer, denom }
    }

    /// Create a validated mixed number
    pub fn new(whole: i64, numer: i64, denom: i64) -> Result<Self> {
        check_denominator(denom)?;
        if numer.unsigned_abs() >= denom.unsigned_abs() {
            return Err(ArithmeticError::InvalidRange(
                "mixed number numerator must be smaller than its denominator",
            ));
        }
        if whole != 0 && numer != 0 && whole.signum() != numer.signum() {
            return Err(ArithmeticError::InvalidRange(
                "mixed number parts must have the same sign",
            ));
        }
        Ok(MixedNumber::new_raw(whole, numer, denom))
    }

    #[inline]
    pub const fn whole(&self) -> i64 {
        self.whole
    }

    #[inline]
    pub const fn numer(&self) -> i64 {
        self.numer
    }

    #[inline]
    pub const fn denom(&self) -> i64 {
        self.denom
    }

    /// Get the components `(whole, numer, denom)`
    #[inline]
    pub const fn parts(&self) -> (i64, i64, i64) {
        (self.whole, self.numer, self.denom)
    }

    /// Determine if there is no whole part
    #[inline]
    pub fn is_proper_fraction(&self) -> bool {
        self.whole == 0
    }

    /// Determine if there is no fractional part
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.numer == 0
    }

    #[inline]
    pub fn to_improper(self) -> Result<Fraction> {
        to_improper(self)
    }

    #[inline]
    pub fn to_decimal(self) -> Result<f64> {
        fraction_to_decimal(to_improper(self)?)
    }
}

/// `whole + numer/denom` as `(whole·denom + numer) / denom`.
pub fn to_improper(mixed: MixedNumber) -> Result<Fraction> {
    check_denominator(mixed.denom)?;
    mixed
        .whole
        .checked_mul(mixed.denom)
        .and_then(|n| n.checked_add(mixed.numer))
        .map(|numer| Fraction::new_raw(numer, mixed.denom))
        .ok_or(ArithmeticError::Overflow)
}

/// Split a fraction into its truncated whole part and the remainder.
///
/// The fraction is not reduced. A fraction with `|numer| < denom` yields a
/// zero whole part, and an exact division yields a zero remainder.
pub fn to_mixed(fraction: Fraction) -> Result<MixedNumber> {
    let (numer, denom) = fraction.parts();
    check_denominator(denom)?;
    let (whole, rem) = numer.div_rem(&denom);
    Ok(MixedNumber::new_raw(whole, rem, denom))
}

impl TryFrom<MixedNumber> for Fraction {
    type Error = ArithmeticError;

    #[inline]
    fn try_from(mixed: MixedNumber) -> Result<Self> {
        to_improper(mixed)
    }
}

impl fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.whole, self.numer) {
            (w, 0) => write!(f, "{}", w),
            (0, n) => write!(f, "{}/{}", n, self.denom),
            (w, n) => write!(f, "{} {}/{}", w, n.unsigned_abs(), self.denom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_test() {
        assert_eq!(MixedNumber::new(1, 1, 2), Ok(MixedNumber::new_raw(1, 1, 2)));
        assert_eq!(MixedNumber::new(-3, -1, 2), Ok(MixedNumber::new_raw(-3, -1, 2)));
        assert_eq!(MixedNumber::new(0, -1, 2), Ok(MixedNumber::new_raw(0, -1, 2)));
        assert_eq!(MixedNumber::new(1, 1, 0), Err(ArithmeticError::DivisionByZero));
        assert!(matches!(MixedNumber::new(1, 3, 2), Err(ArithmeticError::InvalidRange(_))));
        assert!(matches!(MixedNumber::new(1, -1, 2), Err(ArithmeticError::InvalidRange(_))));
    }

    #[test]
    fn to_improper_test() {
        assert_eq!(to_improper(MixedNumber::new_raw(1, 1, 2)), Ok(Fraction::new_raw(3, 2)));
        assert_eq!(to_improper(MixedNumber::new_raw(-3, -1, 2)), Ok(Fraction::new_raw(-7, 2)));
        assert_eq!(to_improper(MixedNumber::new_raw(2, 0, 4)), Ok(Fraction::new_raw(8, 4)));
        assert_eq!(to_improper(MixedNumber::new_raw(i64::MAX, 1, 2)), Err(ArithmeticError::Overflow));
        assert_eq!(Fraction::try_from(MixedNumber::new_raw(0, 1, 3)), Ok(Fraction::new_raw(1, 3)));
    }

    #[test]
    fn to_mixed_test() {
        assert_eq!(to_mixed(Fraction::new_raw(7, 2)), Ok(MixedNumber::new_raw(3, 1, 2)));
        assert_eq!(to_mixed(Fraction::new_raw(-7, 2)), Ok(MixedNumber::new_raw(-3, -1, 2)));
        // pure fraction and pure whole forms
        let third = to_mixed(Fraction::new_raw(1, 3)).unwrap();
        assert_eq!(third, MixedNumber::new_raw(0, 1, 3));
        assert!(third.is_proper_fraction() && !third.is_whole());
        let two = to_mixed(Fraction::new_raw(8, 4)).unwrap();
        assert_eq!(two, MixedNumber::new_raw(2, 0, 4));
        assert!(two.is_whole() && !two.is_proper_fraction());
        let three_halves = to_mixed(Fraction::new_raw(3, 2)).unwrap();
        assert!(!three_halves.is_whole() && !three_halves.is_proper_fraction());
        assert_eq!(to_mixed(Fraction::new_raw(8, 0)), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn round_trip() {
        for denom in 1i64..=12 {
            for whole in -5i64..=5 {
                for numer in -(denom - 1)..denom {
                    if let Ok(mixed) = MixedNumber::new(whole, numer, denom) {
                        assert_eq!(to_mixed(to_improper(mixed).unwrap()), Ok(mixed));
                    }
                }
            }
        }
    }

    #[test]
    fn decimal_test() {
        assert!(matches!(MixedNumber::new_raw(1, 1, 4).to_decimal(), Ok(v) if (v - 1.25).abs() < 1e-12));
        assert!(matches!(MixedNumber::new_raw(-2, -1, 2).to_decimal(), Ok(v) if (v + 2.5).abs() < 1e-12));
    }

    #[test]
    fn display_test() {
        assert_eq!(MixedNumber::new_raw(1, 1, 2).to_string(), "1 1/2");
        assert_eq!(MixedNumber::new_raw(-3, -1, 2).to_string(), "-3 1/2");
        assert_eq!(MixedNumber::new_raw(0, -1, 2).to_string(), "-1/2");
        assert_eq!(MixedNumber::new_raw(4, 0, 3).to_string(), "4");
    }
}
