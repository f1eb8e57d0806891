//! Error types for amount conversion

use thiserror::Error;

/// Result type alias for number operations
pub type Result<T> = std::result::Result<T, NumberError>;

/// Number conversion error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    /// Text that is not an integer or decimal number
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    /// Decimal text carrying more fractional digits than the target scale
    #[error("Fractional component of '{value}' exceeds {decimals} decimals")]
    FractionTooLong {
        /// Offending input
        value: String,
        /// Target scale
        decimals: u32,
    },

    /// Display threshold that is not a decimal number
    #[error("Invalid threshold '{threshold}': {source}")]
    InvalidThreshold {
        /// Offending threshold option
        threshold: String,
        /// Underlying parse failure
        #[source]
        source: Box<NumberError>,
    },
}

impl NumberError {
    /// Create an invalid number error
    pub fn invalid_number(value: impl Into<String>) -> Self {
        Self::InvalidNumber(value.into())
    }

    /// Wrap a parse failure of a threshold option
    pub fn invalid_threshold(threshold: impl Into<String>, source: Self) -> Self {
        Self::InvalidThreshold {
            threshold: threshold.into(),
            source: Box::new(source),
        }
    }
}
