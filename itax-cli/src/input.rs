//! Amount parsing for CLI arguments.
//!
//! The engine only ever sees well-formed non-negative decimals; everything
//! else is rejected here, at the collection boundary.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when an amount argument cannot be accepted.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
    #[error("amount '{input}' must not be negative")]
    Negative { input: String },
}

/// Parses a salary amount.
///
/// Trims whitespace and tolerates comma digit separators (`"12,34,567"`).
/// Empty input is treated as 0. Negative amounts are rejected.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let amount: Decimal = normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;

    if amount < Decimal::ZERO {
        return Err(ParseAmountError::Negative {
            input: s.to_string(),
        });
    }

    Ok(amount)
}
