//! Monetary parsing, rounding and formatting.
//!
//! Amounts arrive as strings and must match a deliberately narrow grammar:
//! plain digits with an optional fraction of 1 to 4 digits. Scientific
//! notation, signs, thousands separators and empty strings are rejected,
//! never coerced. All rounding is half-up at 2 decimal places.

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use std::sync::LazyLock;

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{1,4})?$").expect("valid amount regex"));

/// Parses a decimal amount with at most 4 fractional digits.
///
/// Returns `None` for anything outside the grammar, including the empty
/// string; the caller decides whether that means "missing" or "invalid".
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if !AMOUNT_RE.is_match(s) {
        return None;
    }
    Decimal::from_str(s).ok()
}

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value with exactly 2 decimal places for API responses.
pub fn format_2dp(value: Decimal) -> String {
    format!("{:.2}", value)
}
