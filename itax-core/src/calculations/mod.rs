//! Tax calculation modules.
//!
//! The pipeline is: gross income resolution (on [`crate::models::TaxInput`]),
//! HRA exemption, the two regime engines, and regime comparison. Everything
//! here is a pure function over [`rust_decimal::Decimal`] values.

pub mod common;
pub mod hra;
pub mod regimes;
pub mod slabs;

pub use slabs::{SlabSchedule, TaxSlab};
