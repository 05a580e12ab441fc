use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxBreakdown;

/// One of the two mutually exclusive tax computation rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    Old,
    New,
}

impl Regime {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Old => "Old Regime",
            Self::New => "New Regime",
        }
    }
}

/// Which regime is cheaper for a given input, and by how much.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComparison {
    pub cheaper: Regime,
    pub savings: Decimal,
}

impl RegimeComparison {
    /// Compares two regime breakdowns by total tax.
    ///
    /// An exact tie resolves to the new regime, which is the default
    /// regime a taxpayer falls under when not opting out.
    pub fn of(
        old: &TaxBreakdown,
        new: &TaxBreakdown,
    ) -> Self {
        let cheaper = if old.total_tax < new.total_tax {
            Regime::Old
        } else {
            Regime::New
        };
        let savings = (old.total_tax - new.total_tax).abs();

        Self { cheaper, savings }
    }
}
