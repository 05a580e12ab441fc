//! The two regime engines.
//!
//! Each engine owns its deduction constants and slab schedule and produces a
//! full [`TaxBreakdown`]. The arithmetic downstream of taxable income (cess,
//! totals, net salary, effective rate) is identical across regimes and lives
//! in [`assemble`].

pub mod new_regime;
pub mod old_regime;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calculations::common::{clamp_non_negative, effective_rate};
use crate::calculations::slabs::SlabSchedule;
use crate::models::TaxBreakdown;

/// Health & Education Cess, levied flat on computed income tax.
const CESS_RATE: Decimal = dec!(0.04);

/// Builds the breakdown shared by both regimes.
///
/// Taxable income is gross minus all deductions, floored at zero. Cess is
/// exactly 4% of the slab tax, so `total_tax == income_tax × 1.04` always
/// holds.
fn assemble(
    gross_salary: Decimal,
    standard_deduction: Decimal,
    hra_exemption: Decimal,
    section_80c: Decimal,
    other_deductions: Decimal,
    schedule: SlabSchedule,
) -> TaxBreakdown {
    let taxable_income = clamp_non_negative(
        gross_salary - standard_deduction - hra_exemption - section_80c - other_deductions,
    );

    let income_tax = schedule.tax_for(taxable_income);
    let cess = income_tax * CESS_RATE;
    let total_tax = income_tax + cess;

    debug!(%gross_salary, %taxable_income, %income_tax, %total_tax, "regime breakdown assembled");

    TaxBreakdown {
        gross_salary,
        standard_deduction,
        hra_exemption,
        section_80c,
        other_deductions,
        taxable_income,
        income_tax,
        cess,
        total_tax,
        net_salary: gross_salary - total_tax,
        effective_rate: effective_rate(total_tax, gross_salary),
    }
}
