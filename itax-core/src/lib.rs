pub mod calculations;
pub mod engine;
pub mod models;

pub use engine::{CalculationError, TaxComparison, calculate};
pub use models::*;
