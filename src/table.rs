use serde_json::Value;

use crate::error::NormaliseError;

/// One row of the raw wide table, as a loader hands it over: column name to
/// JSON value. Columns beyond the required set are carried but ignored.
pub type RawRow = serde_json::Map<String, Value>;

/// Column names of the raw recipe dataset.
pub mod columns {
    pub const INDEX: &str = "index";
    pub const TITLE: &str = "Title";
    pub const INSTRUCTIONS: &str = "Instructions";
    pub const CLEANED_INGREDIENTS: &str = "Cleaned_Ingredients";
    pub const IMAGE_NAME: &str = "Image_Name";
}

/// Fetch a text cell, failing if the column is absent or the value is not
/// a JSON string.
pub(crate) fn require_str<'a>(
    row: &'a RawRow,
    column: &'static str,
    row_idx: usize,
) -> Result<&'a str, NormaliseError> {
    match row.get(column) {
        None => Err(NormaliseError::MissingColumn(column)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(NormaliseError::TypeMismatch {
            column,
            row: row_idx,
            expected: "text",
        }),
    }
}

/// Fetch an integer cell, failing if the column is absent or the value is
/// not an integral JSON number.
pub(crate) fn require_i64(
    row: &RawRow,
    column: &'static str,
    row_idx: usize,
) -> Result<i64, NormaliseError> {
    match row.get(column) {
        None => Err(NormaliseError::MissingColumn(column)),
        Some(value) => value.as_i64().ok_or(NormaliseError::TypeMismatch {
            column,
            row: row_idx,
            expected: "integer",
        }),
    }
}
