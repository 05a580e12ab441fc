//! Display formatting for amounts and rates.
//!
//! Amounts render in Indian rupee convention: the `₹` symbol, no decimal
//! places, and Indian digit grouping (the last three digits form one group,
//! everything above groups in twos: `₹12,34,567`).

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole rupees with Indian digit grouping.
///
/// Rounds half-up to the whole rupee before grouping.
pub fn inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_string();

    let mut grouped = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && remaining >= 3 && (remaining - 3) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Formats an effective rate as a percentage with two decimals.
pub fn percent(rate: Decimal) -> String {
    format!(
        "{}%",
        rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
