//! Engine entry point: one input in, both regime breakdowns out.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use itax_core::engine;
//! use itax_core::models::{CityClass, Regime, SalaryIncome, TaxInput};
//!
//! let input = TaxInput {
//!     salary: SalaryIncome::Detailed {
//!         basic_salary: dec!(600000),
//!         hra: dec!(300000),
//!         rent_paid: dec!(240000),
//!         other_allowances: dec!(0),
//!     },
//!     city_class: CityClass::Metro,
//! };
//!
//! let result = engine::calculate(&input).unwrap();
//!
//! assert_eq!(result.old.total_tax, dec!(24440));
//! assert_eq!(result.new.total_tax, dec!(33800));
//! assert_eq!(result.comparison.cheaper, Regime::Old);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::hra;
use crate::calculations::regimes::{new_regime, old_regime};
use crate::models::{RegimeComparison, SalaryIncome, TaxBreakdown, TaxInput};

/// Errors that reject a calculation request outright.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// The resolved gross income was zero or negative. No breakdown is
    /// produced; the caller must not display partial results.
    #[error("gross income must be positive, got {0}")]
    InvalidIncome(Decimal),
}

/// Both regime breakdowns for one input, plus which regime wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComparison {
    pub old: TaxBreakdown,
    pub new: TaxBreakdown,
    pub comparison: RegimeComparison,
}

/// Runs the full pipeline for one calculation request.
///
/// Resolves gross income, computes the HRA exemption when a detailed salary
/// breakdown was supplied, evaluates both regimes, and compares them.
/// Deterministic: identical inputs always produce identical breakdowns.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidIncome`] when the resolved gross
/// income is zero or negative.
pub fn calculate(input: &TaxInput) -> Result<TaxComparison, CalculationError> {
    let gross_income = input.gross_income();
    if gross_income <= Decimal::ZERO {
        return Err(CalculationError::InvalidIncome(gross_income));
    }

    // The exemption only exists under the old regime, and only when the
    // salary components needed to compute it were supplied.
    let hra_exemption = match &input.salary {
        SalaryIncome::Detailed {
            basic_salary,
            hra,
            rent_paid,
            ..
        } => hra::exemption(*basic_salary, *hra, *rent_paid, input.city_class),
        SalaryIncome::Total { .. } => Decimal::ZERO,
    };

    debug!(%gross_income, %hra_exemption, city = input.city_class.as_str(), "calculating both regimes");

    let old = old_regime::compute(gross_income, hra_exemption);
    let new = new_regime::compute(gross_income);
    let comparison = RegimeComparison::of(&old, &new);

    Ok(TaxComparison {
        old,
        new,
        comparison,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{CityClass, Regime};

    fn detailed_metro_input() -> TaxInput {
        TaxInput {
            salary: SalaryIncome::Detailed {
                basic_salary: dec!(600000),
                hra: dec!(300000),
                rent_paid: dec!(240000),
                other_allowances: dec!(0),
            },
            city_class: CityClass::Metro,
        }
    }

    #[test]
    fn calculate_detailed_metro_matches_worked_example() {
        let result = calculate(&detailed_metro_input()).unwrap();

        // HRA exemption = min(300000, 300000, 180000) = 180000.
        assert_eq!(result.old.hra_exemption, dec!(180000));
        assert_eq!(result.old.taxable_income, dec!(555000));
        assert_eq!(result.old.income_tax, dec!(23500));
        assert_eq!(result.old.total_tax, dec!(24440));
        // New regime ignores the breakdown: taxable = 900000 - 75000.
        assert_eq!(result.new.taxable_income, dec!(825000));
        assert_eq!(result.new.income_tax, dec!(32500));
        assert_eq!(result.new.total_tax, dec!(33800));
        assert_eq!(result.comparison.cheaper, Regime::Old);
        assert_eq!(result.comparison.savings, dec!(9360));
    }

    #[test]
    fn calculate_total_mode_has_no_hra_exemption() {
        let input = TaxInput {
            salary: SalaryIncome::Total {
                annual_salary: dec!(1200000),
            },
            city_class: CityClass::Metro,
        };

        let result = calculate(&input).unwrap();

        assert_eq!(result.old.hra_exemption, dec!(0));
        assert_eq!(result.new.taxable_income, dec!(1125000));
        assert_eq!(result.new.income_tax, dec!(68750));
        assert_eq!(result.new.total_tax, dec!(71500));
    }

    #[test]
    fn calculate_rejects_zero_gross_income() {
        let input = TaxInput {
            salary: SalaryIncome::Total {
                annual_salary: dec!(0),
            },
            city_class: CityClass::Metro,
        };

        let result = calculate(&input);

        assert_eq!(result, Err(CalculationError::InvalidIncome(dec!(0))));
    }

    #[test]
    fn calculate_rejects_zero_detailed_components() {
        let input = TaxInput {
            salary: SalaryIncome::Detailed {
                basic_salary: dec!(0),
                hra: dec!(0),
                rent_paid: dec!(120000),
                other_allowances: dec!(0),
            },
            city_class: CityClass::NonMetro,
        };

        let result = calculate(&input);

        assert_eq!(result, Err(CalculationError::InvalidIncome(dec!(0))));
    }

    #[test]
    fn calculate_zero_rent_means_zero_exemption() {
        let input = TaxInput {
            salary: SalaryIncome::Detailed {
                basic_salary: dec!(600000),
                hra: dec!(300000),
                rent_paid: dec!(0),
                other_allowances: dec!(0),
            },
            city_class: CityClass::Metro,
        };

        let result = calculate(&input).unwrap();

        assert_eq!(result.old.hra_exemption, dec!(0));
    }

    #[test]
    fn calculate_is_deterministic() {
        let input = detailed_metro_input();

        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();

        assert_eq!(first, second);
    }
}
