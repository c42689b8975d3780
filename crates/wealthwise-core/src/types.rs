use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WealthWiseError;
use crate::WealthWiseResult;

/// The four calculator flavours the engine can project.
///
/// A closed set: dispatch is exhaustiveness-checked, so there is no
/// "unknown calculator" runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorType {
    #[serde(rename = "SIP")]
    Sip,
    #[serde(rename = "FD")]
    Fd,
    #[serde(rename = "RD")]
    Rd,
    #[serde(rename = "MF")]
    Mf,
}

impl fmt::Display for CalculatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CalculatorType::Sip => "SIP",
            CalculatorType::Fd => "FD",
            CalculatorType::Rd => "RD",
            CalculatorType::Mf => "MF",
        };
        f.write_str(s)
    }
}

impl FromStr for CalculatorType {
    type Err = WealthWiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SIP" => Ok(CalculatorType::Sip),
            "FD" => Ok(CalculatorType::Fd),
            "RD" => Ok(CalculatorType::Rd),
            "MF" => Ok(CalculatorType::Mf),
            other => Err(WealthWiseError::InvalidInput {
                field: "type".into(),
                reason: format!("unknown calculator type '{other}' (expected SIP, FD, RD or MF)"),
            }),
        }
    }
}

/// Contribution frequency. Reserved by the input form; the strategy math
/// does not consult it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    Yearly,
}

/// Inputs to a projection. One value object per invocation.
///
/// `amount` is the periodic contribution for SIP/RD/MF and the lump sum for
/// FD. `interest_rate` is the nominal annual rate as a percentage (12 means
/// 12%). `tenure` is whole years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    pub amount: f64,
    pub tenure: u32,
    pub interest_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
}

impl CalculatorInputs {
    /// Boundary validation for callers that want it (CLI, bindings).
    ///
    /// The projection functions never call this: the engine itself accepts
    /// any finite or non-finite input and lets the arithmetic propagate.
    pub fn validate(&self) -> WealthWiseResult<()> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(WealthWiseError::InvalidInput {
                field: "amount".into(),
                reason: "amount must be a non-negative finite number".into(),
            });
        }
        if !self.interest_rate.is_finite() || self.interest_rate < 0.0 {
            return Err(WealthWiseError::InvalidInput {
                field: "interest_rate".into(),
                reason: "interest_rate must be a non-negative finite percentage".into(),
            });
        }
        Ok(())
    }
}

/// Cumulative state of a projection at a year boundary.
///
/// `interest` is cumulative (`balance - investment`), not the interest
/// earned within that year alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: u32,
    pub balance: f64,
    pub interest: f64,
    pub investment: f64,
}

/// Output of a projection. Created fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_investment: f64,
    pub interest_earned: f64,
    pub maturity_value: f64,
    pub yearly_breakdown: Vec<YearRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_calculator_type_round_trip() {
        for (s, t) in [
            ("SIP", CalculatorType::Sip),
            ("FD", CalculatorType::Fd),
            ("RD", CalculatorType::Rd),
            ("MF", CalculatorType::Mf),
        ] {
            assert_eq!(s.parse::<CalculatorType>().unwrap(), t);
            assert_eq!(t.to_string(), s);
            assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{s}\""));
        }
        assert!("ULIP".parse::<CalculatorType>().is_err());
    }

    #[test]
    fn test_inputs_deserialize_without_frequency() {
        let inputs: CalculatorInputs =
            serde_json::from_str(r#"{"amount": 5000, "tenure": 5, "interest_rate": 12}"#).unwrap();
        assert_eq!(inputs.frequency, None);
        assert_eq!(inputs.tenure, 5);
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let mut inputs = CalculatorInputs {
            amount: 1000.0,
            tenure: 1,
            interest_rate: 8.0,
            frequency: None,
        };
        assert!(inputs.validate().is_ok());

        inputs.amount = -1.0;
        assert!(inputs.validate().is_err());

        inputs.amount = f64::NAN;
        assert!(inputs.validate().is_err());

        inputs.amount = 1000.0;
        inputs.interest_rate = f64::INFINITY;
        assert!(inputs.validate().is_err());
    }
}
