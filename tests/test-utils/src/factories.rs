//! Factories and strategies for generating test amounts

use num_bigint::BigInt;
use numbers::{USD_DECIMALS, parse_units};
use proptest::prelude::*;

/// Factory for scaled amounts at a fixed number of decimals
#[derive(Debug, Clone, Copy)]
pub struct AmountFactory {
    decimals: u32,
}

impl AmountFactory {
    /// Factory for amounts scaled by `10^decimals`
    pub const fn new(decimals: u32) -> Self {
        Self { decimals }
    }

    /// Factory for USD amounts
    pub const fn usd() -> Self {
        Self::new(USD_DECIMALS)
    }

    /// Scale of the amounts built by this factory
    pub const fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Scaled amount for decimal text, e.g. `units("1.5")` at 18 decimals
    pub fn units(&self, value: &str) -> BigInt {
        parse_units(value, self.decimals)
            .unwrap_or_else(|err| panic!("bad test amount {value:?}: {err}"))
    }

    /// Raw scaled integer, already multiplied out
    pub fn raw(&self, value: &str) -> BigInt {
        value
            .parse()
            .unwrap_or_else(|err| panic!("bad raw amount {value:?}: {err}"))
    }
}

/// Scaled USD amount for decimal text
pub fn usd(value: &str) -> BigInt {
    AmountFactory::usd().units(value)
}

/// Non-negative decimal text with up to `max_whole` integer digits and up to
/// `max_fraction` fractional digits.
pub fn decimal_text(max_whole: usize, max_fraction: usize) -> impl Strategy<Value = String> {
    let whole = proptest::string::string_regex(&format!("[1-9][0-9]{{0,{}}}|0", max_whole.saturating_sub(1)))
        .expect("valid whole-part regex");
    let fraction = proptest::string::string_regex(&format!("[0-9]{{0,{max_fraction}}}"))
        .expect("valid fraction regex");
    (whole, fraction).prop_map(|(whole, fraction)| {
        if fraction.is_empty() {
            whole
        } else {
            format!("{whole}.{fraction}")
        }
    })
}

/// Non-negative scaled amounts spanning many orders of magnitude
pub fn scaled_amount() -> impl Strategy<Value = BigInt> {
    prop_oneof![
        (0u64..1_000).prop_map(BigInt::from),
        any::<u64>().prop_map(BigInt::from),
        (any::<u128>(), 0u32..20).prop_map(|(v, shift)| BigInt::from(v) * BigInt::from(10u8).pow(shift)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_amount_factory() {
        let eth = AmountFactory::new(18);
        assert_eq!(eth.units("1.5").to_string(), "1500000000000000000");
        assert_eq!(eth.raw("42"), BigInt::from(42));
        assert_eq!(AmountFactory::usd().decimals(), 30);
    }
}
