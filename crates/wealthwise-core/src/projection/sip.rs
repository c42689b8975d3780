//! Systematic Investment Plan: equal monthly contributions compounding at
//! a monthly-equivalent rate.

use super::schedule::monthly_schedule;
use crate::types::{CalculationResult, CalculatorInputs};

/// Project a SIP.
///
/// The nominal annual rate is converted to a monthly rate by simple
/// division (`rate / 12 / 100`). Each month the contribution is added
/// first, then the whole balance compounds for that month.
pub fn project_sip(inputs: &CalculatorInputs) -> CalculationResult {
    let monthly_rate = inputs.interest_rate / 12.0 / 100.0;
    monthly_schedule(inputs, monthly_rate, 1, || 1.0)
}
