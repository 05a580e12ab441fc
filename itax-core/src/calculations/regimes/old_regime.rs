//! Old-regime tax engine.
//!
//! The old regime keeps the classic deduction set: the 50,000 standard
//! deduction, the HRA exemption, a Section 80C allowance modelled as 10% of
//! gross income capped at the statutory 1,50,000, and a flat 25,000 covering
//! Section 80D and similar. Slabs applied to taxable income:
//!
//! | Taxable income        | Rate on the portion above the floor |
//! |-----------------------|-------------------------------------|
//! | 0 – 2,50,000          | 0%                                  |
//! | 2,50,000 – 5,00,000   | 5%                                  |
//! | 5,00,000 – 10,00,000  | 20% (plus 12,500 fixed)             |
//! | above 10,00,000       | 30% (plus 1,12,500 fixed)           |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use itax_core::calculations::regimes::old_regime;
//!
//! let breakdown = old_regime::compute(dec!(900000), dec!(180000));
//!
//! assert_eq!(breakdown.taxable_income, dec!(555000));
//! assert_eq!(breakdown.income_tax, dec!(23500));
//! assert_eq!(breakdown.total_tax, dec!(24440));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::regimes::assemble;
use crate::calculations::slabs::{SlabSchedule, TaxSlab};
use crate::models::TaxBreakdown;

const STANDARD_DEDUCTION: Decimal = dec!(50000);
const SECTION_80C_CAP: Decimal = dec!(150000);
const SECTION_80C_RATE: Decimal = dec!(0.10);
const OTHER_DEDUCTIONS: Decimal = dec!(25000);

static SLABS: [TaxSlab; 4] = [
    TaxSlab {
        floor: dec!(0),
        ceiling: Some(dec!(250000)),
        rate: dec!(0),
        base_tax: dec!(0),
    },
    TaxSlab {
        floor: dec!(250000),
        ceiling: Some(dec!(500000)),
        rate: dec!(0.05),
        base_tax: dec!(0),
    },
    TaxSlab {
        floor: dec!(500000),
        ceiling: Some(dec!(1000000)),
        rate: dec!(0.20),
        base_tax: dec!(12500),
    },
    TaxSlab {
        floor: dec!(1000000),
        ceiling: None,
        rate: dec!(0.30),
        base_tax: dec!(112500),
    },
];

/// The old-regime slab schedule.
pub fn schedule() -> SlabSchedule {
    SlabSchedule::new(&SLABS)
}

/// Computes the old-regime breakdown for a gross income and a
/// previously-calculated HRA exemption (zero when no detailed salary
/// breakdown was supplied).
///
/// The Section 80C deduction is a flat approximation of typical
/// contributions, not a user-entered figure.
pub fn compute(
    gross_income: Decimal,
    hra_exemption: Decimal,
) -> TaxBreakdown {
    let section_80c = SECTION_80C_CAP.min(SECTION_80C_RATE * gross_income);

    assemble(
        gross_income,
        STANDARD_DEDUCTION,
        hra_exemption,
        section_80c,
        OTHER_DEDUCTIONS,
        schedule(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn compute_taxable_income_at_or_below_free_slab_owes_nothing() {
        // Gross 300000: 80C = 30000, taxable = 300000 - 50000 - 30000 - 25000
        // = 195000, inside the tax-free slab.
        let result = compute(dec!(300000), dec!(0));

        assert_eq!(result.taxable_income, dec!(195000));
        assert_eq!(result.income_tax, dec!(0));
        assert_eq!(result.total_tax, dec!(0));
        assert_eq!(result.net_salary, dec!(300000));
        assert_eq!(result.effective_rate, dec!(0));
    }

    #[test]
    fn compute_second_slab_taxes_five_percent_of_excess() {
        // Gross 500000: 80C = 50000, taxable = 375000.
        // Tax = 5% of 125000 = 6250, cess = 250.
        let result = compute(dec!(500000), dec!(0));

        assert_eq!(result.taxable_income, dec!(375000));
        assert_eq!(result.income_tax, dec!(6250));
        assert_eq!(result.cess, dec!(250));
        assert_eq!(result.total_tax, dec!(6500));
    }

    #[test]
    fn compute_third_slab_with_hra_exemption() {
        // Scenario: gross 900000, HRA exemption 180000.
        // 80C = min(150000, 90000) = 90000.
        // Taxable = 900000 - 50000 - 180000 - 90000 - 25000 = 555000.
        // Tax = 12500 + 20% of 55000 = 23500, cess = 940.
        let result = compute(dec!(900000), dec!(180000));

        assert_eq!(result.section_80c, dec!(90000));
        assert_eq!(result.taxable_income, dec!(555000));
        assert_eq!(result.income_tax, dec!(23500));
        assert_eq!(result.cess, dec!(940));
        assert_eq!(result.total_tax, dec!(24440));
        assert_eq!(result.net_salary, dec!(875560));
    }

    #[test]
    fn compute_top_slab_carries_fixed_components() {
        // Gross 2000000: 80C caps at 150000,
        // taxable = 2000000 - 50000 - 150000 - 25000 = 1775000.
        // Tax = 112500 + 30% of 775000 = 345000.
        let result = compute(dec!(2000000), dec!(0));

        assert_eq!(result.section_80c, dec!(150000));
        assert_eq!(result.taxable_income, dec!(1775000));
        assert_eq!(result.income_tax, dec!(345000));
        assert_eq!(result.total_tax, dec!(358800));
    }

    #[test]
    fn compute_80c_caps_at_statutory_limit() {
        let result = compute(dec!(1500000), dec!(0));

        assert_eq!(result.section_80c, dec!(150000));
    }

    #[test]
    fn compute_deductions_exceeding_gross_clamp_taxable_at_zero() {
        let result = compute(dec!(60000), dec!(0));

        assert_eq!(result.taxable_income, dec!(0));
        assert_eq!(result.income_tax, dec!(0));
    }

    #[test]
    fn compute_cess_is_exactly_four_percent() {
        let result = compute(dec!(900000), dec!(180000));

        assert_eq!(result.total_tax, result.income_tax * dec!(1.04));
    }

    #[test]
    fn compute_schedule_is_continuous_at_slab_boundaries() {
        let schedule = schedule();

        assert_eq!(schedule.tax_for(dec!(250000)), dec!(0));
        assert_eq!(schedule.tax_for(dec!(250000.01)), dec!(0.0005));
        assert_eq!(schedule.tax_for(dec!(500000)), dec!(12500));
        assert_eq!(schedule.tax_for(dec!(1000000)), dec!(112500));
    }
}
