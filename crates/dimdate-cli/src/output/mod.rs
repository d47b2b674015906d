use dimdate_core::{GeneratedTable, Value};
use dimdate_export::CsvOptions;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => {
            let (headers, rows) = tabulate(&serde_json::to_value(value)?);
            Ok(render_rows(&headers, &rows))
        }
        OutputFormat::Csv => {
            let (headers, rows) = tabulate(&serde_json::to_value(value)?);
            let table = GeneratedTable {
                headers,
                rows: rows
                    .into_iter()
                    .map(|row| row.into_iter().map(Value::Text).collect())
                    .collect(),
            };
            let options = CsvOptions {
                quote_all: false,
                ..CsvOptions::default()
            };
            Ok(dimdate_export::to_csv_string(&table, &options)?
                .trim_end()
                .to_string())
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render a generated table, keeping its column order.
pub fn render_generated(
    table: &GeneratedTable,
    format: OutputFormat,
    csv: &CsvOptions,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(dimdate_export::to_json_string(table, true)?
            .trim_end()
            .to_string()),
        OutputFormat::Csv => Ok(dimdate_export::to_csv_string(table, csv)?
            .trim_end()
            .to_string()),
        OutputFormat::Table => {
            let rows = table
                .rows
                .iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect::<Vec<Vec<String>>>();
            Ok(render_rows(&table.headers, &rows))
        }
    }
}

fn render_rows(headers: &[String], rows: &[Vec<String>]) -> String {
    if headers.is_empty() {
        return String::from("(no columns)");
    }
    if rows.is_empty() {
        return String::from("(no rows)");
    }

    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    table::render_entity_table(&header_refs, rows, options)
}

/// Flatten a JSON value into headers and string rows.
///
/// Arrays of objects become one row per item with the keys of the first
/// item as headers. Objects become key/value pairs, scalars a single cell.
fn tabulate(value: &JsonValue) -> (Vec<String>, Vec<Vec<String>>) {
    match value {
        JsonValue::Array(items) => {
            let Some(first) = items.first().and_then(JsonValue::as_object) else {
                let rows = items.iter().map(|item| vec![value_to_cell(item)]).collect();
                return (vec![String::from("value")], rows);
            };

            let headers = first.keys().cloned().collect::<Vec<_>>();
            let rows = items
                .iter()
                .filter_map(JsonValue::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|header| {
                            map.get(header)
                                .map_or_else(|| String::from("-"), value_to_cell)
                        })
                        .collect()
                })
                .collect();
            (headers, rows)
        }
        JsonValue::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect();
            (vec![String::from("key"), String::from("value")], rows)
        }
        scalar => (vec![String::from("value")], vec![vec![value_to_cell(scalar)]]),
    }
}

fn value_to_cell(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::Bool(v) => v.to_string(),
        JsonValue::Number(v) => v.to_string(),
        JsonValue::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
