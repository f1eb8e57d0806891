//! Parsing of user-entered decimal text into scaled amounts

use crate::convert::parse_units;
use crate::decimal_str::limit_decimals;
use num_bigint::BigInt;
use tracing::debug;

/// Parse decimal text such as `"9880.5"` into an amount scaled by
/// `10^decimals`.
///
/// Fractional digits beyond `decimals` are truncated. Empty or non-numeric
/// text yields `None`; surrounding whitespace is ignored.
///
/// ```
/// use numbers::{BigInt, parse_value};
///
/// assert_eq!(parse_value("1.239", 2), Some(BigInt::from(123)));
/// assert_eq!(parse_value("", 18), None);
/// ```
pub fn parse_value(value: &str, decimals: u32) -> Option<BigInt> {
    let limited = limit_decimals(value.trim(), decimals as usize);
    match parse_units(&limited, decimals) {
        Ok(amount) => Some(amount),
        Err(err) => {
            debug!(input = value, error = %err, "Rejected amount input");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("9880.5", 18, Some("9880500000000000000000") ; "token amount")]
    #[test_case("100000000.23", 18, Some("100000000230000000000000000") ; "large amount")]
    #[test_case("1.999", 2, Some("199") ; "excess precision truncated")]
    #[test_case("1.999", 0, Some("1") ; "zero scale")]
    #[test_case(" 42 ", 1, Some("420") ; "surrounding whitespace")]
    #[test_case("-0.5", 1, Some("-5") ; "negative")]
    #[test_case("", 18, None ; "empty")]
    #[test_case("abc", 18, None ; "letters")]
    #[test_case("1.2.3", 18, None ; "two separators")]
    #[test_case("1e5", 18, None ; "exponent notation")]
    fn test_parse_value(input: &str, decimals: u32, expected: Option<&str>) {
        assert_eq!(
            parse_value(input, decimals).map(|v| v.to_string()).as_deref(),
            expected
        );
    }
}
