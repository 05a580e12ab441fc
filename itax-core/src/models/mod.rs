mod comparison;
mod tax_breakdown;
mod tax_input;

pub use comparison::{Regime, RegimeComparison};
pub use tax_breakdown::TaxBreakdown;
pub use tax_input::{CityClass, SalaryIncome, TaxInput};
