//! String-level decimal manipulation
//!
//! These helpers operate on already rendered decimal text and never parse it
//! into a number, so they cannot lose precision.

use crate::constants::{FALLBACK_PAD_DECIMALS, PLACEHOLDER};
use crate::convert::split_decimal;
use num_bigint::BigInt;

/// Truncate the fractional part to at most `max_decimals` digits.
///
/// `max_decimals == 0` drops the separator as well. Digits are cut, never
/// rounded.
///
/// ```
/// use numbers::limit_decimals;
///
/// assert_eq!(limit_decimals("123.456", 2), "123.45");
/// assert_eq!(limit_decimals("123.456", 0), "123");
/// ```
pub fn limit_decimals(amount: &str, max_decimals: usize) -> String {
    match amount.split_once('.') {
        None => amount.to_string(),
        Some((whole, _)) if max_decimals == 0 => whole.to_string(),
        Some((whole, fraction)) => {
            let kept: String = fraction.chars().take(max_decimals).collect();
            format!("{whole}.{kept}")
        }
    }
}

/// Right-pad the fractional part with zeros up to `min_decimals` digits.
///
/// Text without a separator gains one followed by `min_decimals` zeros, or
/// by four zeros when no minimum is given. Existing digits are never removed.
pub fn pad_decimals(amount: &str, min_decimals: Option<usize>) -> String {
    match amount.split_once('.') {
        Some((_, fraction)) => {
            let current = fraction.chars().count();
            match min_decimals {
                Some(min) if current < min => {
                    format!("{amount}{}", "0".repeat(min - current))
                }
                _ => amount.to_string(),
            }
        }
        None => match min_decimals.unwrap_or(FALLBACK_PAD_DECIMALS) {
            0 => amount.to_string(),
            pad => format!("{amount}.{}", "0".repeat(pad)),
        },
    }
}

/// Return the integer form of text whose value is integral.
///
/// `"123.00"` becomes `"123"`; `"123.45"` and non-numeric text are returned
/// unchanged.
pub fn trim_zero_decimals(amount: &str) -> String {
    let Ok(parts) = split_decimal(amount) else {
        return amount.to_string();
    };
    if parts.fraction.bytes().any(|b| b != b'0') {
        return amount.to_string();
    }

    let whole = BigInt::parse_bytes(parts.whole.as_bytes(), 10).unwrap_or_default();
    if parts.negative { (-whole).to_string() } else { whole.to_string() }
}

/// Drop trailing fractional zeros and a separator left with no digits.
///
/// Zero and non-numeric text are returned unchanged.
pub fn remove_trailing_zeros(amount: &str) -> String {
    match split_decimal(amount) {
        Ok(parts) if parts.whole.bytes().chain(parts.fraction.bytes()).any(|b| b != b'0') => {
            strip_fraction_zeros(amount)
        }
        _ => amount.to_string(),
    }
}

pub(crate) fn strip_fraction_zeros(amount: &str) -> String {
    match amount.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{whole}.{fraction}")
            }
        }
        None => amount.to_string(),
    }
}

/// Group the integer part into thousands with `,`.
///
/// Only digits left of the first `.` are grouped. Empty input renders the
/// placeholder.
///
/// ```
/// use numbers::number_with_commas;
///
/// assert_eq!(number_with_commas("1000.998"), "1,000.998");
/// assert_eq!(number_with_commas(""), "...");
/// ```
pub fn number_with_commas(amount: &str) -> String {
    if amount.is_empty() {
        return PLACEHOLDER.to_string();
    }

    let (whole, rest) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (amount, None),
    };

    let mut grouped = String::with_capacity(amount.len() + whole.len() / 3);
    let mut run = String::new();
    for ch in whole.chars() {
        if ch.is_ascii_digit() {
            run.push(ch);
        } else {
            grouped.push_str(&group_thousands(&run));
            run.clear();
            grouped.push(ch);
        }
    }
    grouped.push_str(&group_thousands(&run));

    match rest {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}

/// Insert `,` every three digits counting from the right of a digit run.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("123.456", 2, "123.45" ; "truncates")]
    #[test_case("123.456", 0, "123" ; "drops separator")]
    #[test_case("123", 2, "123" ; "integral untouched")]
    #[test_case("123.4", 4, "123.4" ; "short fraction untouched")]
    #[test_case("-0.999", 1, "-0.9" ; "negative never rounds")]
    fn test_limit_decimals(input: &str, max: usize, expected: &str) {
        assert_eq!(limit_decimals(input, max), expected);
    }

    #[test_case("123", Some(2), "123.00" ; "integral gains separator")]
    #[test_case("123.4", Some(2), "123.40" ; "short fraction padded")]
    #[test_case("123.456", Some(2), "123.456" ; "never truncates")]
    #[test_case("123.", Some(2), "123.00" ; "bare separator padded")]
    #[test_case("123", Some(0), "123" ; "zero minimum")]
    #[test_case("123.4", None, "123.4" ; "no minimum")]
    fn test_pad_decimals(input: &str, min: Option<usize>, expected: &str) {
        assert_eq!(pad_decimals(input, min), expected);
    }

    #[test]
    fn test_pad_decimals_without_minimum_uses_four_zeros() {
        // Integral text with no minimum always receives four zeros.
        assert_eq!(pad_decimals("7", None), "7.0000");
    }

    #[test_case("123.00", "123" ; "zero fraction")]
    #[test_case("123.45", "123.45" ; "non integral")]
    #[test_case("123", "123" ; "already integral")]
    #[test_case("007.0", "7" ; "leading zeros")]
    #[test_case("-0.000", "0" ; "negative zero")]
    #[test_case("-12.0", "-12" ; "negative integral")]
    #[test_case("abc", "abc" ; "not a number")]
    fn test_trim_zero_decimals(input: &str, expected: &str) {
        assert_eq!(trim_zero_decimals(input), expected);
    }

    #[test_case("1.500", "1.5" ; "partial zeros")]
    #[test_case("2.000", "2" ; "all zeros")]
    #[test_case("0.000", "0.000" ; "zero unchanged")]
    #[test_case("12", "12" ; "integer unchanged")]
    #[test_case("n/a", "n/a" ; "text unchanged")]
    fn test_remove_trailing_zeros(input: &str, expected: &str) {
        assert_eq!(remove_trailing_zeros(input), expected);
    }

    #[test_case("1000.998", "1,000.998" ; "fraction untouched")]
    #[test_case("100000.229", "100,000.229" ; "six digit whole")]
    #[test_case("100000", "100,000" ; "integral")]
    #[test_case("999", "999" ; "single group")]
    #[test_case("-1234567.1234", "-1,234,567.1234" ; "negative")]
    #[test_case("0.0001234", "0.0001234" ; "small fraction")]
    #[test_case("", "..." ; "empty placeholder")]
    fn test_number_with_commas(input: &str, expected: &str) {
        assert_eq!(number_with_commas(input), expected);
    }
}
