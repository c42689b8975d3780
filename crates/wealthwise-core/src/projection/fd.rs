//! Fixed Deposit: a single lump sum compounding annually.

use crate::types::{CalculationResult, CalculatorInputs, YearRecord};

/// Project a fixed deposit.
///
/// Closed form: `maturity = amount * (1 + rate/100)^tenure`. Each year of
/// the breakdown is computed independently from the closed form rather
/// than iterated from the previous balance. `investment` stays at the
/// lump sum for every record since nothing further is contributed, and
/// `total_investment` is the lump sum even when `tenure` is zero.
pub fn project_fd(inputs: &CalculatorInputs) -> CalculationResult {
    let annual_factor = 1.0 + inputs.interest_rate / 100.0;
    let maturity_value = inputs.amount * annual_factor.powi(inputs.tenure as i32);

    let yearly_breakdown = (1..=inputs.tenure)
        .map(|year| {
            let balance = inputs.amount * annual_factor.powi(year as i32);
            YearRecord {
                year,
                balance,
                interest: balance - inputs.amount,
                investment: inputs.amount,
            }
        })
        .collect();

    CalculationResult {
        total_investment: inputs.amount,
        interest_earned: maturity_value - inputs.amount,
        maturity_value,
        yearly_breakdown,
    }
}
