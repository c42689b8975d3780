//! Shared monthly-contribution compounding loop.
//!
//! SIP, RD and MF all walk the same month iteration and differ only in the
//! periodic rate, the compounding cadence, and an optional per-period
//! multiplicative factor. FD is a closed-form lump sum and lives in its own
//! module.

use crate::types::{CalculationResult, CalculatorInputs, YearRecord};

/// Months per emitted [`YearRecord`].
const MONTHS_PER_YEAR: u32 = 12;

/// Run a monthly contribution schedule over `inputs.tenure` years.
///
/// Every month adds `inputs.amount` to the cumulative investment. Every
/// `compound_every` months the pending contributions
/// (`amount * compound_every`) are folded into the balance, which then
/// compounds once at `periodic_rate` and is scaled by `period_factor()`.
/// A snapshot of cumulative state is emitted at each year boundary.
///
/// `compound_every` must divide 12 so quarter and year boundaries align;
/// the strategies pass 1 (SIP, MF) or 3 (RD).
///
/// No validation and no rounding happen here: degenerate inputs (NaN,
/// negative amount or rate) propagate through the arithmetic unchanged.
pub(crate) fn monthly_schedule<F>(
    inputs: &CalculatorInputs,
    periodic_rate: f64,
    compound_every: u32,
    mut period_factor: F,
) -> CalculationResult
where
    F: FnMut() -> f64,
{
    debug_assert!(compound_every > 0 && MONTHS_PER_YEAR % compound_every == 0);

    let months = inputs.tenure * MONTHS_PER_YEAR;
    let batch = inputs.amount * f64::from(compound_every);

    let mut total_investment = 0.0_f64;
    let mut maturity_value = 0.0_f64;
    let mut yearly_breakdown = Vec::with_capacity(inputs.tenure as usize);

    for month in 1..=months {
        total_investment += inputs.amount;

        if month % compound_every == 0 {
            maturity_value = (maturity_value + batch) * (1.0 + periodic_rate) * period_factor();
        }

        if month % MONTHS_PER_YEAR == 0 {
            yearly_breakdown.push(YearRecord {
                year: month / MONTHS_PER_YEAR,
                balance: maturity_value,
                interest: maturity_value - total_investment,
                investment: total_investment,
            });
        }
    }

    CalculationResult {
        total_investment,
        interest_earned: maturity_value - total_investment,
        maturity_value,
        yearly_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(amount: f64, tenure: u32, interest_rate: f64) -> CalculatorInputs {
        CalculatorInputs {
            amount,
            tenure,
            interest_rate,
            frequency: None,
        }
    }

    #[test]
    fn test_zero_tenure_is_empty() {
        let result = monthly_schedule(&inputs(5000.0, 0, 12.0), 0.01, 1, || 1.0);
        assert!(result.yearly_breakdown.is_empty());
        assert_eq!(result.total_investment, 0.0);
        assert_eq!(result.maturity_value, 0.0);
        assert_eq!(result.interest_earned, 0.0);
    }

    #[test]
    fn test_one_record_per_year() {
        let result = monthly_schedule(&inputs(100.0, 7, 6.0), 0.005, 1, || 1.0);
        assert_eq!(result.yearly_breakdown.len(), 7);
        for (i, record) in result.yearly_breakdown.iter().enumerate() {
            assert_eq!(record.year, i as u32 + 1);
        }
    }

    #[test]
    fn test_zero_rate_balance_equals_investment() {
        let result = monthly_schedule(&inputs(250.0, 3, 0.0), 0.0, 1, || 1.0);
        assert_eq!(result.total_investment, 250.0 * 36.0);
        assert_eq!(result.maturity_value, result.total_investment);
        assert_eq!(result.interest_earned, 0.0);
    }

    #[test]
    fn test_totals_match_last_record() {
        let result = monthly_schedule(&inputs(1000.0, 4, 9.0), 0.0075, 1, || 1.0);
        let last = result.yearly_breakdown.last().unwrap();
        assert_eq!(result.maturity_value, last.balance);
        assert_eq!(result.total_investment, last.investment);
    }

    #[test]
    fn test_quarterly_cadence_compounds_four_times_a_year() {
        // One year at a quarterly rate of 2%: four applications of
        // b = (b + 300) * 1.02 starting from zero.
        let result = monthly_schedule(&inputs(100.0, 1, 8.0), 0.02, 3, || 1.0);
        let mut expected = 0.0_f64;
        for _ in 0..4 {
            expected = (expected + 300.0) * 1.02;
        }
        assert_eq!(result.maturity_value, expected);
        assert_eq!(result.total_investment, 1200.0);
    }

    #[test]
    fn test_nan_amount_propagates() {
        let result = monthly_schedule(&inputs(f64::NAN, 1, 8.0), 0.02, 1, || 1.0);
        assert!(result.maturity_value.is_nan());
        assert!(result.total_investment.is_nan());
        assert_eq!(result.yearly_breakdown.len(), 1);
        assert!(result.yearly_breakdown[0].balance.is_nan());
    }

    #[test]
    fn test_negative_amount_runs_signed() {
        let result = monthly_schedule(&inputs(-100.0, 1, 12.0), 0.01, 1, || 1.0);
        assert!(result.maturity_value < 0.0);
        assert_eq!(result.total_investment, -1200.0);
    }
}
