use serde::Serialize;

use crate::utils::constants::{COLUMN_COUNT, HEADER, MAJOR_DIMENSION};

/// A single spreadsheet value. `Empty` serializes as `null`, which leaves
/// the cell blank; `Text("")` writes an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(u64),
    Text(String),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn optional(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, Self::text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SheetRow(pub [Cell; COLUMN_COUNT]);

impl SheetRow {
    pub fn header() -> Self {
        Self(HEADER.map(Cell::text))
    }

    #[cfg(test)]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }
}

/// Request body of `spreadsheets.values.append`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange<'a> {
    pub major_dimension: &'static str,
    pub range: &'a str,
    pub values: &'a [SheetRow],
}

impl<'a> ValueRange<'a> {
    pub fn rows(range: &'a str, values: &'a [SheetRow]) -> Self {
        Self {
            major_dimension: MAJOR_DIMENSION,
            range,
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_serializes_as_null_and_text_as_string() {
        let cells = vec![Cell::Number(3), Cell::text(""), Cell::Empty];
        assert_eq!(
            serde_json::to_value(&cells).unwrap(),
            serde_json::json!([3, "", null])
        );
    }

    #[test]
    fn value_range_uses_sheets_field_names() {
        let rows = vec![SheetRow::header()];
        let body = serde_json::to_value(ValueRange::rows("Issues!A1:1", &rows)).unwrap();

        assert_eq!(body["majorDimension"], "ROWS");
        assert_eq!(body["range"], "Issues!A1:1");
        assert_eq!(body["values"][0][0], "#");
        assert_eq!(body["values"][0][13], "Milestone URI");
    }
}
