use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::PERCENT_SUFFIX;

/// Formats a percentage value as `"<value>%"` with exactly `decimal_places`
/// fractional digits.
///
/// Finite values are rounded half-away-from-zero through `Decimal`. Values
/// that `Decimal` cannot represent (NaN, infinities, magnitudes beyond its
/// range) fall back to the plain `f64` formatting, e.g. `"NaN%"` or `"inf%"`.
pub fn format_percentage(value: f64, decimal_places: u32) -> String {
    let precision = decimal_places as usize;
    match round_percentage(value, decimal_places) {
        Some(rounded) => format!("{:.*}{}", precision, rounded, PERCENT_SUFFIX),
        None => format!("{:.*}{}", precision, value, PERCENT_SUFFIX),
    }
}

/// Rounds a percentage half-away-from-zero to `decimal_places`.
/// The exact binary value is rounded, so 0.145 (stored just below the tie)
/// rounds down. Returns `None` when the value has no `Decimal` representation.
pub fn round_percentage(value: f64, decimal_places: u32) -> Option<Decimal> {
    Decimal::from_f64_retain(value).map(|decimal| {
        decimal.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
    })
}

/// Share of `value` in `total`, expressed in percent.
///
/// Division by a zero total is not guarded and follows IEEE-754 semantics.
#[inline]
pub fn percentage_of(value: f64, total: f64) -> f64 {
    (value / total) * 100.0
}
