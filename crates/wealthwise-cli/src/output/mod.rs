pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Scalar summary fields of a projection, in display order.
pub(crate) const SUMMARY_FIELDS: [&str; 3] =
    ["total_investment", "interest_earned", "maturity_value"];

/// Column order for the yearly breakdown.
pub(crate) const BREAKDOWN_COLUMNS: [&str; 4] = ["year", "balance", "interest", "investment"];
