//! Conversion between scaled integers and decimal text
//!
//! A scaled amount is an integer equal to `value * 10^decimals`. The scale is
//! never stored alongside the integer; every function takes it explicitly.

use crate::error::{NumberError, Result};
use num_bigint::{BigInt, Sign};
use num_traits::{Num, Signed, Zero};
use tracing::error;

/// Input accepted wherever a raw integer amount is expected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Numberish {
    /// Already an integer
    Int(BigInt),
    /// Text to be parsed (decimal digits or a `0x` hex literal)
    Text(String),
}

impl From<BigInt> for Numberish {
    fn from(value: BigInt) -> Self {
        Self::Int(value)
    }
}

impl From<&BigInt> for Numberish {
    fn from(value: &BigInt) -> Self {
        Self::Int(value.clone())
    }
}

impl From<&str> for Numberish {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Numberish {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Numberish {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

macro_rules! numberish_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Numberish {
                fn from(value: $t) -> Self {
                    Self::Int(BigInt::from(value))
                }
            }
        )*
    };
}

numberish_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Decimal text split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DecimalParts<'a> {
    pub negative: bool,
    pub whole: &'a str,
    pub fraction: &'a str,
}

/// Split `-123.456` style text into sign, whole and fractional digits.
///
/// Either side of the separator may be empty (`".5"`, `"5."`) but at least one
/// digit must be present.
pub(crate) fn split_decimal(text: &str) -> Result<DecimalParts<'_>> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(NumberError::invalid_number(text));
    }

    Ok(DecimalParts {
        negative,
        whole,
        fraction,
    })
}

/// Parse integer text: optional `-`, then decimal digits or a `0x` literal.
fn parse_integer(text: &str) -> Result<BigInt> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let magnitude = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(NumberError::invalid_number(text));
        }
        BigInt::from_str_radix(hex, 16).map_err(|_| NumberError::invalid_number(text))?
    } else {
        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumberError::invalid_number(text));
        }
        BigInt::from_str_radix(unsigned, 10).map_err(|_| NumberError::invalid_number(text))?
    };

    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse integer input, reporting the failure instead of logging it
pub(crate) fn try_bignumberify(value: Numberish) -> Result<BigInt> {
    match value {
        Numberish::Int(int) => Ok(int),
        Numberish::Text(text) => parse_integer(&text),
    }
}

/// Turn integer-like input into a [`BigInt`].
///
/// Returns `None` (and logs the failure) when text is not an integer.
///
/// # Examples
///
/// ```
/// use numbers::{BigInt, bignumberify};
///
/// assert_eq!(bignumberify("123"), Some(BigInt::from(123)));
/// assert_eq!(bignumberify("0xff"), Some(BigInt::from(255)));
/// assert_eq!(bignumberify("abc"), None);
/// ```
pub fn bignumberify(value: impl Into<Numberish>) -> Option<BigInt> {
    match try_bignumberify(value.into()) {
        Ok(int) => Some(int),
        Err(err) => {
            error!(error = %err, "bignumberify error");
            None
        }
    }
}

/// `10^decimals`
pub(crate) fn pow10(decimals: u32) -> BigInt {
    BigInt::from(10u8).pow(decimals)
}

/// Multiply a value by `10^decimals`.
///
/// Integer input is scaled directly. Decimal text is accepted too, with
/// fractional digits beyond `decimals` truncated toward zero.
///
/// # Errors
///
/// Returns [`NumberError::InvalidNumber`] when text is neither an integer nor
/// a decimal number.
pub fn expand_decimals(value: impl Into<Numberish>, decimals: u32) -> Result<BigInt> {
    match value.into() {
        Numberish::Int(int) => Ok(int * pow10(decimals)),
        Numberish::Text(text) if text.contains('.') => {
            let parts = split_decimal(&text)?;
            let keep = parts.fraction.len().min(decimals as usize);
            Ok(compose(parts.negative, parts.whole, &parts.fraction[..keep], decimals))
        }
        Numberish::Text(text) => Ok(parse_integer(&text)? * pow10(decimals)),
    }
}

/// Parse decimal text into an amount scaled by `10^decimals`.
///
/// Trailing fractional zeros are ignored; any other fractional digit beyond
/// `decimals` is an error.
///
/// # Errors
///
/// [`NumberError::InvalidNumber`] for malformed text,
/// [`NumberError::FractionTooLong`] when precision would be lost.
pub fn parse_units(text: &str, decimals: u32) -> Result<BigInt> {
    let parts = split_decimal(text)?;
    let fraction = parts.fraction.trim_end_matches('0');
    if fraction.len() > decimals as usize {
        return Err(NumberError::FractionTooLong {
            value: text.to_string(),
            decimals,
        });
    }
    Ok(compose(parts.negative, parts.whole, fraction, decimals))
}

/// Build the scaled integer from digit strings already known to be valid.
fn compose(negative: bool, whole: &str, fraction: &str, decimals: u32) -> BigInt {
    let digits = format!("{whole}{fraction:0<width$}", width = decimals as usize);
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).unwrap_or_else(BigInt::zero);
    if negative { -magnitude } else { magnitude }
}

/// Render a scaled amount with exactly `decimals` fractional digits.
///
/// This only moves the decimal point; nothing is rounded or dropped.
///
/// ```
/// use numbers::{BigInt, to_decimal_string};
///
/// assert_eq!(to_decimal_string(&BigInt::from(123_456_789), 6), "123.456789");
/// assert_eq!(to_decimal_string(&BigInt::from(-5), 3), "-0.005");
/// ```
pub fn to_decimal_string(amount: &BigInt, decimals: u32) -> String {
    let sign = if amount.sign() == Sign::Minus { "-" } else { "" };
    let digits = amount.abs().to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return format!("{sign}{digits}");
    }

    let padded = format!("{digits:0>width$}", width = decimals + 1);
    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    format!("{sign}{whole}.{fraction}")
}
