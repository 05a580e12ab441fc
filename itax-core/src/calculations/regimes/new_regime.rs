//! New-regime tax engine.
//!
//! The new regime trades every itemized deduction for a larger standard
//! deduction of 75,000 and lower slab rates. No HRA exemption, no Section
//! 80C, no other deductions. Slabs applied to taxable income:
//!
//! | Taxable income          | Rate on the portion above the floor |
//! |-------------------------|-------------------------------------|
//! | 0 – 3,00,000            | 0%                                  |
//! | 3,00,000 – 7,00,000     | 5%                                  |
//! | 7,00,000 – 10,00,000    | 10% (plus 20,000 fixed)             |
//! | 10,00,000 – 12,00,000   | 15% (plus 50,000 fixed)             |
//! | 12,00,000 – 15,00,000   | 20% (plus 80,000 fixed)             |
//! | above 15,00,000         | 30% (plus 1,40,000 fixed)           |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use itax_core::calculations::regimes::new_regime;
//!
//! let breakdown = new_regime::compute(dec!(1200000));
//!
//! assert_eq!(breakdown.taxable_income, dec!(1125000));
//! assert_eq!(breakdown.income_tax, dec!(68750));
//! assert_eq!(breakdown.total_tax, dec!(71500));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::regimes::assemble;
use crate::calculations::slabs::{SlabSchedule, TaxSlab};
use crate::models::TaxBreakdown;

const STANDARD_DEDUCTION: Decimal = dec!(75000);

static SLABS: [TaxSlab; 6] = [
    TaxSlab {
        floor: dec!(0),
        ceiling: Some(dec!(300000)),
        rate: dec!(0),
        base_tax: dec!(0),
    },
    TaxSlab {
        floor: dec!(300000),
        ceiling: Some(dec!(700000)),
        rate: dec!(0.05),
        base_tax: dec!(0),
    },
    TaxSlab {
        floor: dec!(700000),
        ceiling: Some(dec!(1000000)),
        rate: dec!(0.10),
        base_tax: dec!(20000),
    },
    TaxSlab {
        floor: dec!(1000000),
        ceiling: Some(dec!(1200000)),
        rate: dec!(0.15),
        base_tax: dec!(50000),
    },
    TaxSlab {
        floor: dec!(1200000),
        ceiling: Some(dec!(1500000)),
        rate: dec!(0.20),
        base_tax: dec!(80000),
    },
    TaxSlab {
        floor: dec!(1500000),
        ceiling: None,
        rate: dec!(0.30),
        base_tax: dec!(140000),
    },
];

/// The new-regime slab schedule.
pub fn schedule() -> SlabSchedule {
    SlabSchedule::new(&SLABS)
}

/// Computes the new-regime breakdown for a gross income.
pub fn compute(gross_income: Decimal) -> TaxBreakdown {
    assemble(
        gross_income,
        STANDARD_DEDUCTION,
        Decimal::ZERO,
        Decimal::ZERO,
        Decimal::ZERO,
        schedule(),
    )
}
