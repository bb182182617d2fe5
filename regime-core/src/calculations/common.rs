//! Shared helpers for the regime calculations.

use rust_decimal::Decimal;

/// Rounds a monetary amount to two decimal places, half away from zero.
///
/// This is the single external reporting convention. It is applied once,
/// at the point where a value leaves the engine; every stage upstream
/// accumulates at full precision so rounding error cannot compound.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(13759.004)), dec!(13759.00));
/// assert_eq!(round_half_up(dec!(13759.005)), dec!(13759.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a taxable amount at zero. Negative taxable income is never
/// produced by any stage; losses either reduce to zero or are reported
/// through their own capped channel.
pub fn floor_at_zero(value: Decimal) -> Decimal {
    if value > Decimal::ZERO { value } else { Decimal::ZERO }
}
