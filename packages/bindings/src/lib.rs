use napi::Result as NapiResult;
use napi_derive::napi;

use wealthwise_core::projection;
use wealthwise_core::types::{CalculatorInputs, CalculatorType};
use wealthwise_core::volatility::UniformVolatility;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_inputs(input_json: &str) -> NapiResult<CalculatorInputs> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

fn to_json(result: &wealthwise_core::types::CalculationResult) -> NapiResult<String> {
    serde_json::to_string(result).map_err(to_napi_error)
}

/// Dispatch a projection by calculator type ("SIP", "FD", "RD" or "MF").
#[napi]
pub fn calculate_investment(calculator_type: String, input_json: String) -> NapiResult<String> {
    let calculator: CalculatorType = calculator_type.parse().map_err(to_napi_error)?;
    let inputs = parse_inputs(&input_json)?;
    to_json(&projection::project(calculator, &inputs))
}

#[napi]
pub fn calculate_sip(input_json: String) -> NapiResult<String> {
    let inputs = parse_inputs(&input_json)?;
    to_json(&projection::project_sip(&inputs))
}

#[napi]
pub fn calculate_fd(input_json: String) -> NapiResult<String> {
    let inputs = parse_inputs(&input_json)?;
    to_json(&projection::project_fd(&inputs))
}

#[napi]
pub fn calculate_rd(input_json: String) -> NapiResult<String> {
    let inputs = parse_inputs(&input_json)?;
    to_json(&projection::project_rd(&inputs))
}

#[napi]
pub fn calculate_mf(input_json: String) -> NapiResult<String> {
    let inputs = parse_inputs(&input_json)?;
    to_json(&projection::project_mf(&inputs))
}

/// Mutual-fund projection with a fixed seed, for callers that need the
/// same trajectory on every render.
#[napi]
pub fn calculate_mf_seeded(input_json: String, seed: u32) -> NapiResult<String> {
    let inputs = parse_inputs(&input_json)?;
    let mut volatility = UniformVolatility::seeded(u64::from(seed));
    to_json(&projection::project_mf_with(&inputs, &mut volatility))
}
