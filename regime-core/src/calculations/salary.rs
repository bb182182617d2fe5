//! Salary normalization.
//!
//! Both regimes allow a flat standard deduction against gross salary
//! before slab tax applies; only the amount differs (the New regime's is
//! larger). The result is clamped at zero so a salary below the standard
//! deduction never produces negative taxable income.

use rust_decimal::Decimal;

use crate::calculations::common::floor_at_zero;

/// Salary component of slab income: `max(0, gross − standard_deduction)`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::salary::taxable_salary;
///
/// // New-regime standard deduction of 75,000
/// assert_eq!(taxable_salary(dec!(1500000), dec!(75000)), dec!(1425000));
/// // Salary below the deduction clamps to zero
/// assert_eq!(taxable_salary(dec!(40000), dec!(50000)), dec!(0));
/// ```
pub fn taxable_salary(
    gross_salary: Decimal,
    standard_deduction: Decimal,
) -> Decimal {
    floor_at_zero(gross_salary - standard_deduction)
}
