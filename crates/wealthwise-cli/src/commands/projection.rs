use clap::Args;
use serde_json::Value;

use wealthwise_core::projection::{self, project};
use wealthwise_core::types::{CalculatorInputs, CalculatorType};
use wealthwise_core::volatility::UniformVolatility;

use crate::input;

/// Shared arguments for a projection: inline flags, a JSON/YAML file,
/// or piped JSON on stdin.
#[derive(Args)]
pub struct ProjectionArgs {
    /// Path to a JSON or YAML input file
    #[arg(long)]
    pub input: Option<String>,

    /// Contribution per month (SIP/RD/MF) or lump sum (FD)
    #[arg(long)]
    pub amount: Option<f64>,

    /// Duration in whole years
    #[arg(long)]
    pub tenure: Option<u32>,

    /// Nominal annual interest rate as a percentage (12 means 12%)
    #[arg(long)]
    pub rate: Option<f64>,
}

/// Arguments for the mutual-fund projection
#[derive(Args)]
pub struct MutualFundArgs {
    #[command(flatten)]
    pub projection: ProjectionArgs,

    /// Seed for the volatility source (omit for fresh entropy)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for projection by calculator type
#[derive(Args)]
pub struct DispatchArgs {
    /// Calculator type: SIP, FD, RD or MF
    #[arg(long = "type", value_name = "TYPE")]
    pub calculator: CalculatorType,

    #[command(flatten)]
    pub projection: ProjectionArgs,
}

/// Resolve inputs from flags, a file, or stdin, then apply boundary
/// validation before handing them to the engine.
fn resolve_inputs(args: &ProjectionArgs) -> Result<CalculatorInputs, Box<dyn std::error::Error>> {
    let inputs: CalculatorInputs = if let Some(ref path) = args.input {
        input::file::read_inputs(path)?
    } else if let (Some(amount), Some(tenure), Some(rate)) = (args.amount, args.tenure, args.rate) {
        CalculatorInputs {
            amount,
            tenure,
            interest_rate: rate,
            frequency: None,
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("provide --amount/--tenure/--rate, --input <file>, or JSON on stdin".into());
    };

    inputs.validate()?;
    Ok(inputs)
}

pub fn run_sip(args: ProjectionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = resolve_inputs(&args)?;
    Ok(serde_json::to_value(projection::project_sip(&inputs))?)
}

pub fn run_fd(args: ProjectionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = resolve_inputs(&args)?;
    Ok(serde_json::to_value(projection::project_fd(&inputs))?)
}

pub fn run_rd(args: ProjectionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = resolve_inputs(&args)?;
    Ok(serde_json::to_value(projection::project_rd(&inputs))?)
}

pub fn run_mf(args: MutualFundArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = resolve_inputs(&args.projection)?;
    let result = match args.seed {
        Some(seed) => {
            let mut volatility = UniformVolatility::seeded(seed);
            projection::project_mf_with(&inputs, &mut volatility)
        }
        None => projection::project_mf(&inputs),
    };
    Ok(serde_json::to_value(result)?)
}

pub fn run_project(args: DispatchArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = resolve_inputs(&args.projection)?;
    Ok(serde_json::to_value(project(args.calculator, &inputs))?)
}
