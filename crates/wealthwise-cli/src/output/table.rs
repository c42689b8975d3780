use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{BREAKDOWN_COLUMNS, SUMMARY_FIELDS};

/// Format a projection result as tables: a two-column summary followed by
/// the year-by-year breakdown.
pub fn print_table(value: &Value) {
    let Value::Object(map) = value else {
        println!("{}", value);
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for field in SUMMARY_FIELDS {
        if let Some(v) = map.get(field) {
            builder.push_record([field, &format_value(v)]);
        }
    }
    // Any remaining scalar fields the summary list doesn't know about
    for (key, v) in map {
        if !SUMMARY_FIELDS.contains(&key.as_str()) && !v.is_array() && !v.is_object() {
            builder.push_record([key.as_str(), &format_value(v)]);
        }
    }
    println!("{}", Table::from(builder));

    if let Some(Value::Array(breakdown)) = map.get("yearly_breakdown") {
        if !breakdown.is_empty() {
            println!();
            print_breakdown(breakdown);
        }
    }
}

fn print_breakdown(breakdown: &[Value]) {
    let mut builder = Builder::default();
    builder.push_record(BREAKDOWN_COLUMNS);

    for record in breakdown {
        if let Value::Object(fields) = record {
            let row: Vec<String> = BREAKDOWN_COLUMNS
                .iter()
                .map(|col| fields.get(*col).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }

    println!("{}", Table::from(builder));
}

fn format_value(value: &Value) -> String {
    match value {
        // Monetary values get two decimals for display; the engine itself
        // never rounds.
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() != 0.0 => format!("{:.2}", f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
