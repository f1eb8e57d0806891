//! Display options for the formatters
//!
//! One record per formatter. Every field has a documented default and all
//! records deserialize with missing fields filled from [`Default`], so display
//! presets can live in configuration files.

use crate::constants::{
    DEFAULT_TOKEN_DISPLAY_DECIMALS, DEFAULT_USD_DISPLAY_DECIMALS, MAX_EXCEEDING_THRESHOLD,
    MIN_EXCEEDING_THRESHOLD, PLACEHOLDER, TOKEN_MIN_THRESHOLD,
};
use serde::{Deserialize, Serialize};

/// Options for [`format_amount`](crate::format_amount)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountFormat {
    /// Fractional digits to show (default 4)
    pub display_decimals: u32,
    /// Group the integer part into thousands (default false)
    pub use_commas: bool,
    /// Text rendered for a missing amount (default `"..."`)
    pub default_value: String,
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self {
            display_decimals: DEFAULT_TOKEN_DISPLAY_DECIMALS,
            use_commas: false,
            default_value: PLACEHOLDER.to_string(),
        }
    }
}

impl AmountFormat {
    /// Format with the given number of fractional digits
    #[must_use]
    pub fn with_decimals(display_decimals: u32) -> Self {
        Self {
            display_decimals,
            ..Self::default()
        }
    }

    /// Enable or disable thousands grouping
    #[must_use]
    pub const fn commas(mut self, use_commas: bool) -> Self {
        self.use_commas = use_commas;
        self
    }

    /// Replace the placeholder for missing amounts
    #[must_use]
    pub fn placeholder(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }
}

/// Options for [`format_usd`](crate::format_usd)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsdOptions {
    /// Render zero instead of `None` for a missing value
    pub fallback_to_zero: bool,
    /// Fractional digits to show (default 2)
    pub display_decimals: u32,
    /// Smallest magnitude shown verbatim (default `"0.01"`)
    pub min_threshold: String,
    /// Largest magnitude shown verbatim (default `"1000000000"`)
    pub max_threshold: String,
}

impl Default for UsdOptions {
    fn default() -> Self {
        Self {
            fallback_to_zero: false,
            display_decimals: DEFAULT_USD_DISPLAY_DECIMALS,
            min_threshold: MIN_EXCEEDING_THRESHOLD.to_string(),
            max_threshold: MAX_EXCEEDING_THRESHOLD.to_string(),
        }
    }
}

/// Options for [`format_delta_usd`](crate::format_delta_usd)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaUsdOptions {
    /// Render a zero delta instead of `None` for a missing value
    pub fallback_to_zero: bool,
    /// Prefix a zero delta with `+`
    pub show_plus_for_zero: bool,
}

/// Options for [`format_percentage`](crate::format_percentage)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PercentageOptions {
    /// Render `0.00%` instead of `None` for a missing value
    pub fallback_to_zero: bool,
    /// Prefix non-zero values with `+` or `-`
    pub signed: bool,
}

/// Options for [`format_token_amount`](crate::format_token_amount)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenAmountOptions {
    /// Show every significant digit instead of clamping and truncating
    pub show_all_significant: bool,
    /// Fractional digits to show (default 4)
    pub display_decimals: u32,
    /// Render zero instead of `None` for a missing value
    pub fallback_to_zero: bool,
    /// Group the integer part into thousands
    pub use_commas: bool,
    /// Smallest magnitude shown verbatim (default `"0"`, no lower clamp)
    pub min_threshold: String,
    /// Largest magnitude shown verbatim (default `"1000000000"`)
    pub max_threshold: String,
}

impl Default for TokenAmountOptions {
    fn default() -> Self {
        Self {
            show_all_significant: false,
            display_decimals: DEFAULT_TOKEN_DISPLAY_DECIMALS,
            fallback_to_zero: false,
            use_commas: false,
            min_threshold: TOKEN_MIN_THRESHOLD.to_string(),
            max_threshold: MAX_EXCEEDING_THRESHOLD.to_string(),
        }
    }
}

/// Options for [`format_token_amount_with_usd`](crate::format_token_amount_with_usd)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenWithUsdOptions {
    /// Render zeros instead of `None` when any input is missing
    pub fallback_to_zero: bool,
    /// Fractional digits of the token part (default 4)
    pub display_decimals: u32,
}

impl Default for TokenWithUsdOptions {
    fn default() -> Self {
        Self {
            fallback_to_zero: false,
            display_decimals: DEFAULT_TOKEN_DISPLAY_DECIMALS,
        }
    }
}
