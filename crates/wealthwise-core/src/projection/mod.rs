//! The compounding projection engine behind the WealthWise calculators.
//!
//! Four strategies share one contract: given a contribution schedule, a
//! nominal annual rate and a tenure in years, produce the maturity value,
//! the principal contributed, the growth earned, and a year-by-year
//! breakdown of cumulative state.

pub mod fd;
pub mod mf;
pub mod rd;
pub mod schedule;
pub mod sip;

pub use fd::project_fd;
pub use mf::{project_mf, project_mf_with};
pub use rd::project_rd;
pub use sip::project_sip;

use crate::types::{CalculationResult, CalculatorInputs, CalculatorType};

/// Dispatch a projection to the strategy for `calculator`.
///
/// Returns the strategy result unchanged. The MF branch draws fresh
/// volatility per call; use [`project_mf_with`] for deterministic output.
pub fn project(calculator: CalculatorType, inputs: &CalculatorInputs) -> CalculationResult {
    match calculator {
        CalculatorType::Sip => sip::project_sip(inputs),
        CalculatorType::Fd => fd::project_fd(inputs),
        CalculatorType::Rd => rd::project_rd(inputs),
        CalculatorType::Mf => mf::project_mf(inputs),
    }
}
