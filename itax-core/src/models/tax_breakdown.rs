use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full tax breakdown for a single regime.
///
/// Every field is derived from the gross income by the regime engine; the
/// value is immutable once built. Deduction fields that a regime does not
/// offer (e.g. HRA exemption under the new regime) are present as zero so
/// both regimes render through the same report path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub gross_salary: Decimal,
    pub standard_deduction: Decimal,
    pub hra_exemption: Decimal,
    pub section_80c: Decimal,
    pub other_deductions: Decimal,
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    pub cess: Decimal,
    pub total_tax: Decimal,
    pub net_salary: Decimal,
    /// Total tax as a percentage of gross salary; zero when gross is zero.
    pub effective_rate: Decimal,
}
