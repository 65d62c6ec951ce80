use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to `dp` decimals the way a display formatter does: the exact binary
/// value is rounded, ties away from zero. `2.8 + 0.15` (stored as
/// 2.9499999999999997) therefore rounds down to 2.9.
pub fn round_to(value: f64, dp: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Nearest integer, halves away from zero.
pub fn round0(value: f64) -> f64 {
    value.round()
}
