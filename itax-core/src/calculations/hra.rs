//! House Rent Allowance exemption (old regime, detailed salary breakdown).
//!
//! The exempt portion of HRA is the least of three caps:
//!
//! | Cap | Amount |
//! |-----|--------|
//! | 1   | HRA actually received |
//! | 2   | 50% of basic salary (metro) / 40% (non-metro) |
//! | 3   | Rent paid minus 10% of basic salary |
//!
//! Cap 3 can go negative when rent is low relative to basic salary; the
//! result is floored at zero, never reported as a negative exemption.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calculations::common::clamp_non_negative;
use crate::models::CityClass;

const METRO_BASIC_RATE: Decimal = dec!(0.5);
const NON_METRO_BASIC_RATE: Decimal = dec!(0.4);
const RENT_OFFSET_RATE: Decimal = dec!(0.10);

/// Computes the exempt portion of HRA.
///
/// Returns zero immediately when no rent was paid; otherwise the minimum of
/// the three caps, floored at zero. The exemption never exceeds the HRA
/// received.
pub fn exemption(
    basic_salary: Decimal,
    hra: Decimal,
    rent_paid: Decimal,
    city_class: CityClass,
) -> Decimal {
    if rent_paid == Decimal::ZERO {
        return Decimal::ZERO;
    }

    let city_rate = match city_class {
        CityClass::Metro => METRO_BASIC_RATE,
        CityClass::NonMetro => NON_METRO_BASIC_RATE,
    };

    let received_cap = hra;
    let basic_cap = city_rate * basic_salary;
    let rent_cap = rent_paid - RENT_OFFSET_RATE * basic_salary;

    debug!(%received_cap, %basic_cap, %rent_cap, "hra exemption caps");

    clamp_non_negative(received_cap.min(basic_cap).min(rent_cap))
}
