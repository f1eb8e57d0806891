//! Fixed-point amount formatting for on-chain token quantities and USD values
//!
//! Amounts are carried as scaled integers (`value * 10^decimals`) and only
//! ever turned into text at the edges. Every conversion here is exact:
//! fractional digits beyond the requested display precision are truncated,
//! never rounded.

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod convert;
pub mod decimal_str;
pub mod error;
pub mod format;
pub mod math;
pub mod options;
pub mod parse;
pub mod threshold;

pub use constants::*;
pub use convert::{Numberish, bignumberify, expand_decimals, parse_units, to_decimal_string};
pub use decimal_str::{
    limit_decimals, number_with_commas, pad_decimals, remove_trailing_zeros, trim_zero_decimals,
};
pub use error::{NumberError, Result};
pub use format::{
    format_amount, format_amount_free, format_amount_str, format_array_amount, format_delta_usd,
    format_key_amount, format_percentage, format_token_amount, format_token_amount_with_usd,
    format_usd,
};
pub use math::{
    apply_factor, basis_points_to_float, get_basis_points, round_to_two_decimals,
    round_up_division, round_up_magnitude_division, sum_amounts,
};
pub use options::{
    AmountFormat, DeltaUsdOptions, PercentageOptions, TokenAmountOptions, TokenWithUsdOptions,
    UsdOptions,
};
pub use parse::parse_value;
pub use threshold::{ClampResult, Marker, clamp};

pub use num_bigint::BigInt;
