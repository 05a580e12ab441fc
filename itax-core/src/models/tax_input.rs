use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// City classification for the HRA exemption rule.
///
/// Metro cities allow an exemption cap of 50% of basic salary;
/// all other cities allow 40%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CityClass {
    Metro,
    NonMetro,
}

impl CityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metro => "metro",
            Self::NonMetro => "non-metro",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "metro" => Some(Self::Metro),
            "non-metro" => Some(Self::NonMetro),
            _ => None,
        }
    }
}

/// Salary income, discriminated by how the caller supplied it.
///
/// The two shapes are mutually exclusive: a detailed component breakdown
/// (basic + HRA + other allowances) or a single annual total. Fields of the
/// variant not chosen simply do not exist, so stale values from the other
/// entry mode can never leak into a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryIncome {
    /// Component-wise annual salary breakdown.
    Detailed {
        basic_salary: Decimal,
        hra: Decimal,
        rent_paid: Decimal,
        other_allowances: Decimal,
    },
    /// Single gross annual salary figure.
    Total { annual_salary: Decimal },
}

/// Input for one calculation request.
///
/// Built fresh by the caller per request and never mutated afterwards.
/// All amounts are annual, in whole-currency units, and expected to be
/// non-negative; the input-collection layer is responsible for coercing
/// or rejecting anything else before constructing this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    pub salary: SalaryIncome,
    pub city_class: CityClass,
}

impl TaxInput {
    /// Resolves the single gross annual income figure for this input.
    ///
    /// Detailed mode sums basic salary, HRA and other allowances; rent paid
    /// is not income and is excluded. Total mode returns the annual salary
    /// as supplied.
    pub fn gross_income(&self) -> Decimal {
        match &self.salary {
            SalaryIncome::Detailed {
                basic_salary,
                hra,
                other_allowances,
                ..
            } => basic_salary + hra + other_allowances,
            SalaryIncome::Total { annual_salary } => *annual_salary,
        }
    }
}
