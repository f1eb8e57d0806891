//! Display formatters for token amounts, USD values and percentages
//!
//! All formatters take an optional amount. A missing amount renders either
//! the caller's placeholder, a zero value when `fallback_to_zero` is set, or
//! `None`. Missing and zero are never treated alike.

use crate::constants::{PERCENTAGE_DECIMALS, PLACEHOLDER, USD_DECIMALS};
use crate::convert::{bignumberify, to_decimal_string};
use crate::decimal_str::{
    limit_decimals, number_with_commas, pad_decimals, strip_fraction_zeros, trim_zero_decimals,
};
use crate::options::{
    AmountFormat, DeltaUsdOptions, PercentageOptions, TokenAmountOptions, TokenWithUsdOptions,
    UsdOptions,
};
use crate::threshold::{ClampResult, clamp};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use tracing::warn;

/// Truncate, pad and optionally group a scaled amount.
fn render_amount(amount: &BigInt, decimals: u32, display_decimals: u32, use_commas: bool) -> String {
    let display_decimals = display_decimals as usize;
    let mut text = limit_decimals(&to_decimal_string(amount, decimals), display_decimals);
    if display_decimals != 0 {
        text = pad_decimals(&text, Some(display_decimals));
    }
    if use_commas { number_with_commas(&text) } else { text }
}

/// Clamp for display, logging misconfigured thresholds.
fn clamp_for_display(
    amount: &BigInt,
    decimals: u32,
    min_threshold: &str,
    max_threshold: &str,
) -> Option<ClampResult> {
    clamp(amount, decimals, min_threshold, max_threshold)
        .map_err(|err| warn!(error = %err, "Skipping display of amount"))
        .ok()
}

fn sign_of(amount: &BigInt) -> &'static str {
    if amount.is_negative() { "-" } else { "" }
}

fn placeholder(format: &AmountFormat) -> String {
    if format.default_value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        format.default_value.clone()
    }
}

/// Render a scaled amount with a fixed number of fractional digits.
///
/// Digits beyond `display_decimals` are truncated, never rounded.
///
/// ```
/// use numbers::{AmountFormat, BigInt, format_amount};
///
/// let amount = BigInt::from(123_456_789);
/// assert_eq!(format_amount(Some(&amount), 6, &AmountFormat::with_decimals(2)), "123.45");
/// assert_eq!(format_amount(None, 6, &AmountFormat::default()), "...");
/// ```
pub fn format_amount(amount: Option<&BigInt>, decimals: u32, format: &AmountFormat) -> String {
    match amount {
        Some(amount) => render_amount(amount, decimals, format.display_decimals, format.use_commas),
        None => placeholder(format),
    }
}

/// [`format_amount`] for a raw integer string.
///
/// Empty or unparsable text renders the placeholder.
pub fn format_amount_str(amount: &str, decimals: u32, format: &AmountFormat) -> String {
    if amount.is_empty() {
        return placeholder(format);
    }
    format_amount(bignumberify(amount).as_ref(), decimals, format)
}

/// Look up `key` in `map` and format the amount found there.
///
/// A missing key renders the placeholder.
pub fn format_key_amount<K, Q, S>(
    map: &HashMap<K, BigInt, S>,
    key: &Q,
    decimals: u32,
    format: &AmountFormat,
) -> String
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    format_amount(map.get(key), decimals, format)
}

/// Format the amount at `index`, rendering the placeholder when out of bounds.
pub fn format_array_amount(
    amounts: &[BigInt],
    index: usize,
    decimals: u32,
    format: &AmountFormat,
) -> String {
    format_amount(amounts.get(index), decimals, format)
}

/// Render an amount without padding or trailing fractional zeros.
///
/// When `display_decimals` is given the fraction is truncated to that many
/// digits first.
///
/// ```
/// use numbers::{BigInt, format_amount_free};
///
/// assert_eq!(format_amount_free(&BigInt::from(1_500_000), 6, None), "1.5");
/// assert_eq!(format_amount_free(&BigInt::from(2_000_000), 6, None), "2");
/// ```
pub fn format_amount_free(amount: &BigInt, decimals: u32, display_decimals: Option<u32>) -> String {
    let mut text = to_decimal_string(amount, decimals);
    if let Some(display_decimals) = display_decimals {
        text = limit_decimals(&text, display_decimals as usize);
    }
    trim_zero_decimals(&strip_fraction_zeros(&text))
}

/// Render a USD value (scaled by 10^30) as `$1,234.56`.
///
/// Magnitudes outside the thresholds are clamped and marked
/// (`> $1,000,000,000.00`, `< $0.01`); the sign always comes from the
/// input value.
pub fn format_usd(usd: Option<&BigInt>, opts: &UsdOptions) -> Option<String> {
    let zero = BigInt::zero();
    let usd = match usd {
        Some(usd) => usd,
        None if opts.fallback_to_zero => &zero,
        None => return None,
    };

    let clamped = clamp_for_display(usd, USD_DECIMALS, &opts.min_threshold, &opts.max_threshold)?;
    let display = render_amount(&clamped.value, USD_DECIMALS, opts.display_decimals, true);
    Some(format!("{}{}${display}", clamped.marker.prefix(), sign_of(usd)))
}

/// Render a signed USD change, optionally followed by the percentage change.
///
/// Positive deltas get `+`, negative ones `-`, zero none unless
/// `show_plus_for_zero`. The percentage (scaled by 100) is shown on its
/// magnitude with the delta's sign: `+$12.00 (+3.50%)`.
pub fn format_delta_usd(
    delta_usd: Option<&BigInt>,
    percentage: Option<&BigInt>,
    opts: &DeltaUsdOptions,
) -> Option<String> {
    let Some(delta_usd) = delta_usd else {
        if !opts.fallback_to_zero {
            return None;
        }
        let zero = BigInt::zero();
        let usd = format_usd(Some(&zero), &UsdOptions::default())?;
        let percent = render_amount(&zero, PERCENTAGE_DECIMALS, PERCENTAGE_DECIMALS, false);
        return Some(format!("{usd} ({percent}%)"));
    };

    let sign = if !delta_usd.is_zero() {
        if delta_usd.is_positive() { "+" } else { "-" }
    } else if opts.show_plus_for_zero {
        "+"
    } else {
        ""
    };

    let defaults = UsdOptions::default();
    let clamped = clamp_for_display(
        delta_usd,
        USD_DECIMALS,
        &defaults.min_threshold,
        &defaults.max_threshold,
    )?;
    let value = render_amount(&clamped.value, USD_DECIMALS, defaults.display_decimals, true);
    let percent = percentage
        .and_then(|p| format_percentage(Some(&p.abs()), &PercentageOptions::default()))
        .map(|p| format!(" ({sign}{p})"))
        .unwrap_or_default();

    Some(format!("{}{sign}${value}{percent}", clamped.marker.prefix()))
}

/// Render a percentage scaled by 100 (`1234` is `12.34%`).
pub fn format_percentage(percentage: Option<&BigInt>, opts: &PercentageOptions) -> Option<String> {
    let zero = BigInt::zero();
    let percentage = match percentage {
        Some(percentage) => percentage,
        None if opts.fallback_to_zero => &zero,
        None => return None,
    };

    let sign = if !opts.signed || percentage.is_zero() {
        ""
    } else if percentage.is_positive() {
        "+"
    } else {
        "-"
    };
    let value = render_amount(&percentage.abs(), PERCENTAGE_DECIMALS, PERCENTAGE_DECIMALS, false);
    Some(format!("{sign}{value}%"))
}

/// Render a token amount, optionally followed by its symbol.
///
/// By default the magnitude is clamped to the configured thresholds and
/// truncated to `display_decimals`, without a sign. `show_all_significant`
/// renders every significant digit of the signed amount instead. A missing amount or scale yields `None`, or a
/// zero rendered at `display_decimals` when `fallback_to_zero` is set.
///
/// ```
/// use numbers::{TokenAmountOptions, format_token_amount, parse_units};
///
/// let amount = parse_units("10000.123456", 18).unwrap();
/// let opts = TokenAmountOptions {
///     display_decimals: 2,
///     use_commas: true,
///     max_threshold: "1000".into(),
///     ..TokenAmountOptions::default()
/// };
/// assert_eq!(
///     format_token_amount(Some(&amount), Some(18), Some("eth"), &opts).as_deref(),
///     Some("> 1,000.00 eth")
/// );
/// ```
pub fn format_token_amount(
    amount: Option<&BigInt>,
    decimals: Option<u32>,
    symbol: Option<&str>,
    opts: &TokenAmountOptions,
) -> Option<String> {
    let zero = BigInt::zero();
    let (amount, decimals) = match (amount, decimals) {
        (Some(amount), Some(decimals)) => (amount, decimals),
        _ if opts.fallback_to_zero => (&zero, opts.display_decimals),
        _ => return None,
    };

    let amount_str = if opts.show_all_significant {
        format_amount_free(amount, decimals, Some(decimals))
    } else {
        let clamped =
            clamp_for_display(amount, decimals, &opts.min_threshold, &opts.max_threshold)?;
        format!(
            "{}{}",
            clamped.marker.prefix(),
            render_amount(&clamped.value, decimals, opts.display_decimals, opts.use_commas)
        )
    };

    match symbol.filter(|s| !s.is_empty()) {
        Some(symbol) => Some(format!("{amount_str} {symbol}")),
        None => Some(amount_str),
    }
}

/// Render `"{token} ({usd})"`, e.g. `1,000.0000 ETH ($2,500,000.00)`.
///
/// All four inputs are required unless `fallback_to_zero` is set, in which
/// case missing parts render as zero.
pub fn format_token_amount_with_usd(
    token_amount: Option<&BigInt>,
    usd_amount: Option<&BigInt>,
    token_symbol: Option<&str>,
    token_decimals: Option<u32>,
    opts: &TokenWithUsdOptions,
) -> Option<String> {
    let complete = token_amount.is_some()
        && usd_amount.is_some()
        && token_symbol.is_some_and(|s| !s.is_empty())
        && token_decimals.is_some();
    if !complete && !opts.fallback_to_zero {
        return None;
    }

    let token_opts = TokenAmountOptions {
        display_decimals: opts.display_decimals,
        fallback_to_zero: opts.fallback_to_zero,
        use_commas: true,
        ..TokenAmountOptions::default()
    };
    let token_str = format_token_amount(token_amount, token_decimals, token_symbol, &token_opts)?;

    let usd_opts = UsdOptions {
        fallback_to_zero: opts.fallback_to_zero,
        ..UsdOptions::default()
    };
    let usd_str = format_usd(usd_amount, &usd_opts)?;

    Some(format!("{token_str} ({usd_str})"))
}
