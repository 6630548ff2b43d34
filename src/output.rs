//! Terminal output
//!
//! Listings arrive as (column definitions, records) and single records
//! as JSON objects; this module renders them as aligned tables, or as
//! pretty JSON under `--json`.

use crate::resource::registry::ColumnDef;
use anyhow::Result;
use prettytable::{Cell, Row, Table};
use serde_json::Value;

/// Print a listing: one row per record, columns per the resource
/// definition.
pub fn print_list(columns: &[ColumnDef], items: &[Value], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_titles(Row::new(
        columns.iter().map(|c| Cell::new(&c.header)).collect(),
    ));

    for item in items {
        table.add_row(Row::new(
            columns
                .iter()
                .map(|c| Cell::new(&extract_json_value(item, &c.json_path)))
                .collect(),
        ));
    }

    table.printstd();
    Ok(())
}

/// Print a single record as a sorted two-column table.
pub fn print_record(record: &Value, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_titles(Row::new(vec![Cell::new("Field"), Cell::new("Value")]));

    if let Some(map) = record.as_object() {
        let mut keys: Vec<&String> = map.keys().collect();
        keys.sort();
        for key in keys {
            table.add_row(Row::new(vec![
                Cell::new(key),
                Cell::new(&display_value(&map[key])),
            ]));
        }
    } else {
        table.add_row(Row::new(vec![
            Cell::new("value"),
            Cell::new(&display_value(record)),
        ]));
    }

    table.printstd();
    Ok(())
}

/// Extract a value from JSON using a dot-notation path
pub fn extract_json_value(item: &Value, path: &str) -> String {
    let parts: Vec<&str> = path.split('.').collect();
    let mut current = item;

    for part in parts {
        // Handle array index
        if let Ok(idx) = part.parse::<usize>() {
            current = match current.get(idx) {
                Some(v) => v,
                None => return "-".to_string(),
            };
        } else {
            current = match current.get(part) {
                Some(v) => v,
                None => return "-".to_string(),
            };
        }
    }

    display_value(current)
}

/// Render one JSON value for a table cell
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        Value::Object(_) => format_dict(value),
        Value::Array(_) => serde_json::to_string(value).unwrap_or_else(|_| "-".to_string()),
    }
}

/// Format a property map as `key1='value1', key2='value2'` sorted by key
pub fn format_dict(value: &Value) -> String {
    let Some(map) = value.as_object() else {
        return display_value(value);
    };

    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    keys.iter()
        .map(|k| {
            let v = match &map[k.as_str()] {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{}='{}'", k, v)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
