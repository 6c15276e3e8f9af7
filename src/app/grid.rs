//! Data grid model: row ids, column selection, cell text, pagination.
//!
//! Kept free of UI code so the rules can be tested without a renderer.

use std::ops::Range;

use reporter_wire::{ColumnDef, ColumnKind};
use serde_json::{Map, Value};

/// One rendered grid row
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    /// Stable row key (position in the response)
    pub key: usize,
    pub cells: Map<String, Value>,
}

impl GridRow {
    pub fn cell(&self, field: &str) -> String {
        self.cells.get(field).map(format_cell).unwrap_or_default()
    }
}

/// One row per array element. Each gets an `id` equal to its index unless
/// it carries its own; non-object elements land in a `value` column.
pub fn rows_with_ids(values: &[Value]) -> Vec<GridRow> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let mut cells = Map::new();
            cells.insert("id".to_string(), Value::from(index));
            match value {
                Value::Object(map) => {
                    cells.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
                other => {
                    cells.insert("value".to_string(), other.clone());
                }
            }
            GridRow { key: index, cells }
        })
        .collect()
}

/// Pick the columns to render.
///
/// Backend-declared columns win. Otherwise the page defaults are used when
/// the data has at least one of their fields; failing that, columns are
/// inferred from the first row.
pub fn resolve_columns(
    rows: &[GridRow],
    declared: Option<&[ColumnDef]>,
    defaults: &[ColumnDef],
) -> Vec<ColumnDef> {
    if let Some(declared) = declared.filter(|d| !d.is_empty()) {
        return declared.to_vec();
    }

    let Some(first) = rows.first() else {
        return defaults.to_vec();
    };

    let defaults_match = defaults
        .iter()
        .any(|c| c.field != "id" && first.cells.contains_key(&c.field));
    if defaults_match {
        return defaults.to_vec();
    }

    infer_columns(first)
}

fn infer_columns(row: &GridRow) -> Vec<ColumnDef> {
    let mut columns = vec![ColumnDef::text("id", "ID", 90)];
    columns.extend(row.cells.iter().filter(|(k, _)| *k != "id").map(|(field, value)| {
        if value.is_number() {
            ColumnDef::number(field, field, 130)
        } else {
            ColumnDef::text(field, field, 180)
        }
    }));
    columns
}

/// Text shown for a cell value
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                n.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 => format!("{f:.0}"),
                    Some(f) => format!("{f:.2}"),
                    None => n.to_string(),
                }
            }
        }
        other => other.to_string(),
    }
}

/// CSS class for a column's cells
pub fn cell_class(column: &ColumnDef) -> &'static str {
    match column.kind {
        ColumnKind::Number => "cell-number",
        ColumnKind::String => "cell-text",
    }
}

/// Paging state for a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Pagination {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let mut pagination = Self {
            page,
            page_size: page_size.max(1),
            total,
        };
        pagination.page = pagination.page.min(pagination.page_count() - 1);
        pagination
    }

    /// Number of pages; an empty grid still has one (empty) page
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Row indices visible on the current page
    pub fn range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    /// "11–20 of 42"
    pub fn label(&self) -> String {
        let range = self.range();
        if range.is_empty() {
            return format!("0 of {}", self.total);
        }
        format!("{}–{} of {}", range.start + 1, range.end, self.total)
    }
}
