//! Progressive slab schedule evaluation.
//!
//! Both regime engines express their rate tables as a list of [`TaxSlab`]
//! entries. Each slab carries the tax accumulated by all slabs below it
//! (`base_tax`), so evaluating a schedule is a single lookup plus one
//! marginal multiplication rather than a running sum.

use rust_decimal::Decimal;

/// One tier of a progressive tax schedule.
///
/// Income strictly above `floor` (and at most `ceiling`, when present) is
/// taxed at `rate`; `base_tax` is the fixed tax owed on everything below
/// `floor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxSlab {
    pub floor: Decimal,
    pub ceiling: Option<Decimal>,
    pub rate: Decimal,
    pub base_tax: Decimal,
}

/// A complete slab schedule for one regime.
///
/// Schedules are built from crate-internal constant tables which start at a
/// zero floor and leave the top slab unbounded, so every non-negative income
/// lands in exactly one slab.
#[derive(Debug, Clone, Copy)]
pub struct SlabSchedule {
    slabs: &'static [TaxSlab],
}

impl SlabSchedule {
    pub(crate) const fn new(slabs: &'static [TaxSlab]) -> Self {
        Self { slabs }
    }

    /// Income tax on `taxable_income` under this schedule.
    ///
    /// Zero or negative taxable income owes nothing. Otherwise the matching
    /// slab contributes `base_tax + rate × (income − floor)`, which keeps the
    /// schedule continuous at every breakpoint.
    pub fn tax_for(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        self.slabs
            .iter()
            .find(|slab| {
                taxable_income > slab.floor
                    && slab
                        .ceiling
                        .is_none_or(|ceiling| taxable_income <= ceiling)
            })
            .map_or(Decimal::ZERO, |slab| {
                slab.base_tax + (taxable_income - slab.floor) * slab.rate
            })
    }
}
