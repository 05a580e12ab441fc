//! Shared helpers for the regime calculations.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Floors a decimal at zero.
///
/// Deduction and exemption arithmetic can produce intermediate negatives
/// (e.g. deductions exceeding gross income); those are clamped to zero
/// rather than propagated into slab arithmetic.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use itax_core::calculations::common::clamp_non_negative;
///
/// assert_eq!(clamp_non_negative(dec!(125.50)), dec!(125.50));
/// assert_eq!(clamp_non_negative(dec!(-30000)), dec!(0));
/// assert_eq!(clamp_non_negative(dec!(0)), dec!(0));
/// ```
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        Decimal::ZERO
    } else {
        value
    }
}

/// Total tax as a percentage of gross income.
///
/// Returns zero for zero gross income instead of dividing by zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use itax_core::calculations::common::effective_rate;
///
/// assert_eq!(effective_rate(dec!(120000), dec!(960000)), dec!(12.5));
/// assert_eq!(effective_rate(dec!(0), dec!(0)), dec!(0));
/// ```
pub fn effective_rate(
    total_tax: Decimal,
    gross_income: Decimal,
) -> Decimal {
    if gross_income > Decimal::ZERO {
        dec!(100) * total_tax / gross_income
    } else {
        Decimal::ZERO
    }
}
