//! Conversion between display text and decimal values.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;
use std::str::FromStr;

/// Default cap on fractional digits in a formatted result.
pub const DEFAULT_FRACTION_DIGITS: u32 = 10;

/// Largest scale `rust_decimal` can represent.
pub const MAX_FRACTION_DIGITS: u32 = 28;

/// Most digits a typed number may hold. Any 28-digit literal fits the
/// 96-bit mantissa exactly, so typed input always parses to what is shown.
pub const MAX_INPUT_DIGITS: usize = 28;

/// Format a value for the display.
///
/// Rounds half-to-even to at most `fraction_digits` fractional digits and
/// trims trailing zeros. No thousands separators, no leading `+`, and a zero
/// result is always `"0"` regardless of sign.
pub fn format_decimal(value: Decimal, fraction_digits: u32) -> String {
    let digits = fraction_digits.min(MAX_FRACTION_DIGITS);
    let rounded = value
        .round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven)
        .normalize();

    let mut out = String::new();
    if write!(out, "{}", rounded).is_err() || out.is_empty() {
        return "0".to_string();
    }
    out
}

/// Parse display text back into a value.
///
/// Commas are accepted as decimal points and a trailing point is ignored,
/// so in-progress input like `"12."` reads as 12. Anything unparseable is zero.
pub fn parse_display(text: &str) -> Decimal {
    let sanitized = text.trim().replace(',', ".");
    let sanitized = sanitized.strip_suffix('.').unwrap_or(&sanitized);

    if sanitized.is_empty() || sanitized == "-" {
        return Decimal::ZERO;
    }

    Decimal::from_str(sanitized).unwrap_or(Decimal::ZERO)
}
