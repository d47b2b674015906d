//! JSON serialization: `{"headers": [...], "rows": [[...], ...]}`.
//!
//! Cells keep their native JSON types; unknown ids are `null`.

use std::io::Write;

use dimdate_core::GeneratedTable;

use crate::error::ExportError;

/// Write `table` as JSON, pretty-printed when `pretty` is set.
pub fn write_json<W: Write>(
    table: &GeneratedTable,
    pretty: bool,
    writer: &mut W,
) -> Result<(), ExportError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, table)?;
    } else {
        serde_json::to_writer(&mut *writer, table)?;
    }
    writeln!(writer)?;
    Ok(())
}

pub fn to_json_string(table: &GeneratedTable, pretty: bool) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_json(table, pretty, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
