//! Test fixtures for common tokens

use crate::factories::AmountFactory;
use rstest::*;

/// Token metadata used by formatter tests
#[derive(Debug, Clone)]
pub struct TokenFixture {
    pub symbol: &'static str,
    pub decimals: u32,
    pub amounts: AmountFactory,
}

impl TokenFixture {
    fn new(symbol: &'static str, decimals: u32) -> Self {
        Self {
            symbol,
            decimals,
            amounts: AmountFactory::new(decimals),
        }
    }
}

/// 18-decimal token
#[fixture]
pub fn eth() -> TokenFixture {
    TokenFixture::new("eth", 18)
}

/// 6-decimal stablecoin
#[fixture]
pub fn usdc() -> TokenFixture {
    TokenFixture::new("USDC", 6)
}

/// 8-decimal wrapped bitcoin
#[fixture]
pub fn wbtc() -> TokenFixture {
    TokenFixture::new("WBTC", 8)
}
