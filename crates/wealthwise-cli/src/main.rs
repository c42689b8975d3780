mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::projection::{DispatchArgs, MutualFundArgs, ProjectionArgs};

/// Investment projection calculators
#[derive(Parser)]
#[command(
    name = "wwise",
    version,
    about = "WealthWise investment projection calculators",
    long_about = "Project the growth of periodic or lump-sum investments under \
                  compound interest. Supports SIP, fixed deposit, recurring \
                  deposit and an illustrative mutual-fund mode with simulated \
                  volatility, each with a year-by-year breakdown."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a Systematic Investment Plan (monthly compounding)
    Sip(ProjectionArgs),
    /// Project a Fixed Deposit (lump sum, annual compounding)
    Fd(ProjectionArgs),
    /// Project a Recurring Deposit (quarterly compounding)
    Rd(ProjectionArgs),
    /// Project a Mutual Fund SIP (equity premium plus simulated volatility)
    Mf(MutualFundArgs),
    /// Project by calculator type (SIP, FD, RD or MF)
    Project(DispatchArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Sip(args) => commands::projection::run_sip(args),
        Commands::Fd(args) => commands::projection::run_fd(args),
        Commands::Rd(args) => commands::projection::run_rd(args),
        Commands::Mf(args) => commands::projection::run_mf(args),
        Commands::Project(args) => commands::projection::run_project(args),
        Commands::Version => {
            println!("wwise {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
