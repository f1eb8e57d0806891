//! Constants shared by the converters and formatters
//!
//! COMPLIANCE: Single source of truth for all magic numbers

use num_bigint::BigInt;
use std::sync::LazyLock;

// Fixed-point arithmetic constants
/// Decimal places of the fixed-point precision scale
pub const PRECISION_DECIMALS: u32 = 30;
/// Fixed-point precision scale (10^30) used by factor arithmetic
pub static PRECISION: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(10u8).pow(PRECISION_DECIMALS));
/// Decimal places of USD-denominated amounts
pub const USD_DECIMALS: u32 = 30;

// Percentage/basis points constants
/// Basis points in one whole (100%)
pub const BASIS_POINTS_DIVISOR: u32 = 10_000;
/// Scale of percentage amounts (`1234` renders as `12.34%`)
pub const PERCENTAGE_DECIMALS: u32 = 2;

// Threshold markers
/// Marker shown when a magnitude was clamped down to the maximum threshold
pub const TRIGGER_PREFIX_ABOVE: &str = ">";
/// Marker shown when a magnitude was clamped up to the minimum threshold
pub const TRIGGER_PREFIX_BELOW: &str = "<";

// Display thresholds
/// Default upper display threshold
pub const MAX_EXCEEDING_THRESHOLD: &str = "1000000000";
/// Default lower display threshold for USD values
pub const MIN_EXCEEDING_THRESHOLD: &str = "0.01";
/// Default lower display threshold for token amounts (disables the lower clamp)
pub const TOKEN_MIN_THRESHOLD: &str = "0";

// Display defaults
/// Text rendered in place of a missing amount
pub const PLACEHOLDER: &str = "...";
/// Fractional digits shown for token amounts
pub const DEFAULT_TOKEN_DISPLAY_DECIMALS: u32 = 4;
/// Fractional digits shown for USD amounts and percentages
pub const DEFAULT_USD_DISPLAY_DECIMALS: u32 = 2;
/// Zeros appended by `pad_decimals` to an integral string when no minimum is given
pub const FALLBACK_PAD_DECIMALS: usize = 4;
