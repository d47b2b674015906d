//! CSV serialization.
//!
//! The header row quotes a header only when it contains the separator (or a
//! quote or line break). Data values are all quoted by default; unknown ids
//! become an empty token, `""` when quoted. Embedded quotes are doubled and
//! every record, the last included, ends with `\n`.

use std::borrow::Cow;
use std::io::Write;

use dimdate_core::{GeneratedTable, Value};

use crate::error::ExportError;

/// CSV dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    pub separator: String,
    /// Quote every data value. Headers are never force-quoted.
    pub quote_all: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            separator: String::from(","),
            quote_all: true,
        }
    }
}

impl CsvOptions {
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.separator.is_empty() || self.separator.contains('"') {
            return Err(ExportError::InvalidSeparator {
                separator: self.separator.clone(),
            });
        }
        Ok(())
    }

    fn needs_quotes(&self, field: &str) -> bool {
        field.contains(self.separator.as_str())
            || field.contains('"')
            || field.contains('\n')
            || field.contains('\r')
    }

    fn escape<'a>(&self, field: &'a str, force: bool) -> Cow<'a, str> {
        if force || self.needs_quotes(field) {
            Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(field)
        }
    }
}

/// Write `table` as CSV.
pub fn write_csv<W: Write>(
    table: &GeneratedTable,
    options: &CsvOptions,
    writer: &mut W,
) -> Result<(), ExportError> {
    options.validate()?;

    let headers: Vec<Cow<'_, str>> = table
        .headers
        .iter()
        .map(|header| options.escape(header, false))
        .collect();
    writeln!(writer, "{}", headers.join(options.separator.as_str()))?;

    let mut fields: Vec<String> = Vec::with_capacity(table.width());
    for row in &table.rows {
        fields.clear();
        fields.extend(
            row.iter()
                .map(|value| options.escape(&cell_text(value), options.quote_all).into_owned()),
        );
        writeln!(writer, "{}", fields.join(options.separator.as_str()))?;
    }
    Ok(())
}

/// Render `table` as a CSV string.
pub fn to_csv_string(table: &GeneratedTable, options: &CsvOptions) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(table, options, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn cell_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Text(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}
