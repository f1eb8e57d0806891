//! Integer arithmetic helpers for scaled amounts

use crate::constants::{BASIS_POINTS_DIVISOR, PRECISION};
use crate::convert::{Numberish, try_bignumberify};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Ceiling division for non-negative operands.
///
/// # Panics
///
/// Panics if `b` is zero.
#[must_use]
pub fn round_up_division(a: &BigInt, b: &BigInt) -> BigInt {
    (a + b - BigInt::one()) / b
}

/// Division rounding the magnitude up, whatever the sign of `a`.
///
/// `7 / 2` gives `4` and `-7 / 2` gives `-4`.
///
/// # Panics
///
/// Panics if `b` is zero.
#[must_use]
pub fn round_up_magnitude_division(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_negative() {
        (a - b + BigInt::one()) / b
    } else {
        round_up_division(a, b)
    }
}

/// Multiply by a factor expressed in [`PRECISION`] units.
#[must_use]
pub fn apply_factor(value: &BigInt, factor: &BigInt) -> BigInt {
    value * factor / &*PRECISION
}

/// `numerator / denominator` in basis points.
///
/// The quotient is truncated toward zero unless `round_up` is set, in which
/// case any remainder moves it one basis point away from zero.
///
/// # Panics
///
/// Panics if `denominator` is zero.
#[must_use]
pub fn get_basis_points(numerator: &BigInt, denominator: &BigInt, round_up: bool) -> BigInt {
    let scaled = numerator * BigInt::from(BASIS_POINTS_DIVISOR);
    let result = &scaled / denominator;

    if round_up && !(&scaled % denominator).is_zero() {
        let negative = scaled.is_negative() != denominator.is_negative();
        return if negative {
            result - BigInt::one()
        } else {
            result + BigInt::one()
        };
    }

    result
}

/// Convert basis points into a [`PRECISION`]-scaled fraction.
#[must_use]
pub fn basis_points_to_float(basis_points: &BigInt) -> BigInt {
    basis_points * &*PRECISION / BigInt::from(BASIS_POINTS_DIVISOR)
}

/// Sum every value that parses as an integer, skipping the rest.
pub fn sum_amounts<I>(values: I) -> BigInt
where
    I: IntoIterator,
    I::Item: Into<Numberish>,
{
    values
        .into_iter()
        .filter_map(|value| try_bignumberify(value.into()).ok())
        .sum()
}

/// Round to two decimal places, halves toward positive infinity.
#[must_use]
pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
