use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Output of one generation run: a header list and row-major values.
///
/// Every row holds exactly `headers.len()` values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl GeneratedTable {
    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// The value at `row` in the column titled `header`.
    #[must_use]
    pub fn cell(&self, row: usize, header: &str) -> Option<&Value> {
        let index = self.column_index(header)?;
        self.rows.get(row)?.get(index)
    }
}
