use core::convert::TryFrom;

use num_traits::ToPrimitive;
use tracing::trace;

use super::{check_denominator, reduce, Fraction};
use crate::error::{ArithmeticError, Result};

/// Convert a decimal number to a reduced fraction.
///
/// The decimal places are counted on the shortest text form of `x` that
/// round-trips, so `0.1` becomes `1/10` rather than the exact binary value.
/// Values without a fractional part convert to `x/1`.
pub fn decimal_to_fraction(x: f64) -> Result<Fraction> {
    if !x.is_finite() {
        return Err(ArithmeticError::InvalidRange("decimal must be finite"));
    }

    let text = x.to_string();
    let places = match text.find('.') {
        Some(i) => text.len() - i - 1,
        None => return x.to_i64().map(Fraction::from).ok_or(ArithmeticError::Overflow),
    };
    trace!(%text, places, "counted decimal places");

    let denom = u32::try_from(places)
        .ok()
        .and_then(|p| 10i64.checked_pow(p))
        .ok_or(ArithmeticError::Overflow)?;
    let numer = (x * denom as f64)
        .round()
        .to_i64()
        .ok_or(ArithmeticError::Overflow)?;
    reduce(Fraction::new_raw(numer, denom))
}

/// `numer / denom` as a float, failing on a zero or negative denominator.
pub fn fraction_to_decimal(fraction: Fraction) -> Result<f64> {
    let (numer, denom) = fraction.parts();
    check_denominator(denom)?;
    Ok(numer as f64 / denom as f64)
}
