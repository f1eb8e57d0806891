//! Magnitude clamping against display thresholds
//!
//! Values too large or too small to be worth showing verbatim are replaced by
//! the threshold they crossed, together with a directional marker. Only the
//! magnitude is clamped; formatters decide how to render the sign.

use crate::constants::{TRIGGER_PREFIX_ABOVE, TRIGGER_PREFIX_BELOW};
use crate::convert::expand_decimals;
use crate::error::{NumberError, Result};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::fmt;

/// Which threshold, if any, a magnitude was clamped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Marker {
    /// Rendered as is
    #[default]
    None,
    /// Larger than the maximum threshold
    AboveMax,
    /// Smaller than the minimum threshold
    BelowMin,
}

impl Marker {
    /// Marker symbol, empty for [`Marker::None`]
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::None => "",
            Self::AboveMax => TRIGGER_PREFIX_ABOVE,
            Self::BelowMin => TRIGGER_PREFIX_BELOW,
        }
    }

    /// Marker followed by a space, ready to prefix a rendered value
    #[must_use]
    pub fn prefix(self) -> String {
        match self {
            Self::None => String::new(),
            marker => format!("{} ", marker.symbol()),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Magnitude to render and the marker to show with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClampResult {
    /// Marker to prefix
    pub marker: Marker,
    /// Non-negative scaled value to render
    pub value: BigInt,
}

/// Clamp `|amount|` into `[min_threshold, max_threshold]`.
///
/// Thresholds are decimal text in display units, scaled by `decimals` with
/// excess fractional digits truncated. Comparisons are strict, so a magnitude
/// equal to either bound is not marked. Zero is never marked.
///
/// # Errors
///
/// [`NumberError::InvalidThreshold`] when a threshold is not numeric text.
pub fn clamp(
    amount: &BigInt,
    decimals: u32,
    min_threshold: &str,
    max_threshold: &str,
) -> Result<ClampResult> {
    let scaled = |threshold: &str| {
        expand_decimals(threshold, decimals)
            .map_err(|err| NumberError::invalid_threshold(threshold, err))
    };
    let max = scaled(max_threshold)?;
    let min = scaled(min_threshold)?;
    let abs = amount.abs();

    let (marker, value) = if abs.is_zero() {
        (Marker::None, abs)
    } else if abs > max {
        (Marker::AboveMax, max)
    } else if abs < min {
        (Marker::BelowMin, min)
    } else {
        (Marker::None, abs)
    };

    Ok(ClampResult { marker, value })
}
