use serde_json::Value;
use std::io;

use super::BREAKDOWN_COLUMNS;

/// Write output as CSV to stdout.
///
/// A projection result becomes one row per year with the breakdown
/// columns; anything without a breakdown falls back to field,value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Array(breakdown)) = map.get("yearly_breakdown") {
                write_breakdown_csv(&mut wtr, breakdown);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_breakdown_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, breakdown: &[Value]) {
    let _ = wtr.write_record(BREAKDOWN_COLUMNS);

    for record in breakdown {
        if let Value::Object(fields) = record {
            let row: Vec<String> = BREAKDOWN_COLUMNS
                .iter()
                .map(|col| {
                    fields
                        .get(*col)
                        .map(format_csv_value)
                        .unwrap_or_default()
                })
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
