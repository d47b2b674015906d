//! # dimdate-export
//!
//! Serializers for [`dimdate_core::GeneratedTable`]: CSV with a configurable
//! separator, and JSON. Both write to any [`std::io::Write`]; [`export_file`]
//! replaces a file only once the whole table is written.

pub mod csv;
pub mod error;
pub mod json;

pub use csv::{CsvOptions, to_csv_string, write_csv};
pub use error::ExportError;
pub use json::{to_json_string, write_json};

use std::fmt;
use std::io::{BufWriter, Write};
use std::path::Path;

use dimdate_core::GeneratedTable;
use tempfile::NamedTempFile;

/// File format for [`export`] and [`export_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportFormat {
    Csv(CsvOptions),
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Csv(_) => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write `table` to `writer` in `format`.
pub fn export<W: Write>(
    table: &GeneratedTable,
    format: &ExportFormat,
    writer: &mut W,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv(options) => write_csv(table, options, writer),
        ExportFormat::Json => write_json(table, true, writer),
    }
}

/// Write `table` to `path`.
///
/// The table goes to a temporary file next to `path` that is renamed over
/// it on success; on failure an existing file at `path` is left untouched.
pub fn export_file(
    table: &GeneratedTable,
    format: &ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut writer = BufWriter::new(NamedTempFile::new_in(dir)?);
    export(table, format, &mut writer)?;
    let staged = writer.into_inner().map_err(|err| err.into_error())?;
    staged.persist(path).map_err(|err| err.error)?;

    tracing::info!(
        path = %path.display(),
        format = %format,
        rows = table.len(),
        columns = table.width(),
        "export: table written"
    );
    Ok(())
}
