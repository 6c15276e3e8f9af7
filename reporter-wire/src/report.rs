//! Interpretation of report bodies.
//!
//! The backend passes report data through mostly untouched, so bodies come
//! in several shapes: a bare array, or an object holding the array under
//! `results`, `data` or `rows`, sometimes with column definitions and a link
//! to the spreadsheet the report was published to.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys that may hold the row array, in lookup order
const ROW_KEYS: [&str; 3] = ["results", "data", "rows"];

/// Keys that may hold the published spreadsheet URL
const SHEET_LINK_KEYS: [&str; 2] = ["google_sheet_link", "sheetUrl"];

/// How a column's values are rendered
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    #[default]
    String,
    Number,
}

/// Grid column definition (matches the backend's `columns` entries).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnDef {
    pub field: String,
    #[serde(rename = "headerName")]
    pub header_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(rename = "type", default)]
    pub kind: ColumnKind,
}

impl ColumnDef {
    pub fn text(field: &str, header_name: &str, width: u32) -> Self {
        Self {
            field: field.to_string(),
            header_name: header_name.to_string(),
            width: Some(width),
            kind: ColumnKind::String,
        }
    }

    pub fn number(field: &str, header_name: &str, width: u32) -> Self {
        Self {
            kind: ColumnKind::Number,
            ..Self::text(field, header_name, width)
        }
    }
}

/// A report body split into the parts the dashboard renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportResponse {
    pub rows: Vec<Value>,
    pub columns: Option<Vec<ColumnDef>>,
    pub sheet_link: Option<String>,
    pub sheet_preview_link: Option<String>,
    pub total_rows: Option<u64>,
}

impl ReportResponse {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::Array(rows) => Self {
                rows,
                ..Self::default()
            },
            Value::Object(mut map) => {
                let row_key = ROW_KEYS
                    .iter()
                    .copied()
                    .find(|key| matches!(map.get(*key), Some(Value::Array(_))));
                let rows = match row_key.and_then(|key| map.remove(key)) {
                    Some(Value::Array(rows)) => Some(rows),
                    _ => None,
                };

                let columns = map
                    .get("columns")
                    .cloned()
                    .and_then(|c| serde_json::from_value::<Vec<ColumnDef>>(c).ok())
                    .filter(|c| !c.is_empty());
                let sheet_link = SHEET_LINK_KEYS
                    .iter()
                    .find_map(|key| non_empty_str(map.get(*key)));
                let sheet_preview_link = non_empty_str(map.get("sheetPreviewUrl"));
                let total_rows = map.get("total_rows").and_then(Value::as_u64);

                match rows {
                    Some(rows) => Self {
                        rows,
                        columns,
                        sheet_link,
                        sheet_preview_link,
                        total_rows,
                    },
                    // Not an envelope: the object itself is the only row
                    None => Self {
                        rows: vec![Value::Object(map)],
                        ..Self::default()
                    },
                }
            }
            scalar => Self {
                rows: vec![scalar],
                ..Self::default()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array() {
        let report = ReportResponse::from_value(json!([{"id": 1}, {"id": 2}, {"id": 3}]));
        assert_eq!(report.rows.len(), 3);
        assert!(report.sheet_link.is_none());
    }

    #[test]
    fn test_results_envelope_with_sheet_link() {
        let report = ReportResponse::from_value(json!({
            "results": [{"accountName": "Acme"}],
            "google_sheet_link": "https://docs.google.com/spreadsheets/d/abc"
        }));
        assert_eq!(report.rows, vec![json!({"accountName": "Acme"})]);
        assert_eq!(
            report.sheet_link.as_deref(),
            Some("https://docs.google.com/spreadsheets/d/abc")
        );
    }

    #[test]
    fn test_data_envelope_with_totals() {
        let report = ReportResponse::from_value(json!({
            "data": [{"Account": "A"}, {"Account": "B"}],
            "start_date": "2025-05-01",
            "end_date": "2025-05-31",
            "total_rows": 2
        }));
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.total_rows, Some(2));
    }

    #[test]
    fn test_declared_columns_and_preview() {
        let report = ReportResponse::from_value(json!({
            "rows": [],
            "columns": [{"field": "REVENUE", "headerName": "REVENUE", "width": 130, "type": "number"}],
            "sheetUrl": "https://sheet",
            "sheetPreviewUrl": " "
        }));
        let columns = report.columns.unwrap();
        assert_eq!(columns[0].kind, ColumnKind::Number);
        assert_eq!(columns[0].width, Some(130));
        assert_eq!(report.sheet_link.as_deref(), Some("https://sheet"));
        assert!(report.sheet_preview_link.is_none());
    }

    #[test]
    fn test_plain_object_is_single_row() {
        let report = ReportResponse::from_value(json!({"error": "no data", "status": 0}));
        assert_eq!(report.rows.len(), 1);
    }

    #[test]
    fn test_null_is_empty() {
        assert!(ReportResponse::from_value(Value::Null).is_empty());
    }
}
