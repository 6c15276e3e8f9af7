//! Paged data grid for report rows.

use std::collections::HashSet;

use dioxus::prelude::*;
use reporter_wire::ColumnDef;
use serde_json::Value;

use crate::app::grid::{cell_class, resolve_columns, rows_with_ids, GridRow, Pagination};

/// Paged table over raw report rows.
///
/// `columns` are the page defaults; `declared` (from the response) wins when
/// present.
#[component]
pub fn DataGrid(
    rows: Vec<Value>,
    columns: Vec<ColumnDef>,
    #[props(!optional)] declared: Option<Vec<ColumnDef>>,
    loading: bool,
    page_sizes: Vec<usize>,
    #[props(default = false)] selectable: bool,
) -> Element {
    let first_size = page_sizes.first().copied().unwrap_or(10);
    let mut page = use_signal(|| 0usize);
    let mut page_size = use_signal(move || first_size);
    let mut selected = use_signal(HashSet::<usize>::new);

    let grid_rows = rows_with_ids(&rows);
    let columns = resolve_columns(&grid_rows, declared.as_deref(), &columns);
    let pagination = Pagination::new(page(), page_size(), grid_rows.len());
    let visible: Vec<(GridRow, bool)> = {
        let selected = selected.read();
        grid_rows[pagination.range()]
            .iter()
            .map(|row| (row.clone(), selected.contains(&row.key)))
            .collect()
    };
    let selected_count = selected.read().iter().filter(|k| **k < grid_rows.len()).count();
    let current_size = pagination.page_size;
    let label = pagination.label();
    let column_count = columns.len() + usize::from(selectable);

    let toggle = move |key: usize| {
        let mut set = selected.write();
        if !set.remove(&key) {
            set.insert(key);
        }
    };

    rsx! {
        div { class: "grid-wrap",
            table { class: "striped",
                thead {
                    tr {
                        if selectable {
                            th { style: "width:2.5rem;" }
                        }
                        for column in columns.iter() {
                            th {
                                key: "{column.field}",
                                class: cell_class(column),
                                style: "min-width:{column.width.unwrap_or(120)}px;",
                                "{column.header_name}"
                            }
                        }
                    }
                }
                tbody {
                    if loading {
                        tr {
                            td { colspan: "{column_count}", aria_busy: "true", "Loading..." }
                        }
                    } else if visible.is_empty() {
                        tr {
                            td { colspan: "{column_count}", small { "No rows" } }
                        }
                    } else {
                        for (row, is_selected) in visible {
                            GridRowView {
                                key: "{row.key}",
                                row,
                                selected: is_selected,
                                columns: columns.clone(),
                                selectable,
                                on_toggle: toggle,
                            }
                        }
                    }
                }
            }
        }
        div { class: "grid-footer",
            if selectable && selected_count > 0 {
                span { "{selected_count} selected" }
            }
            label {
                "Rows per page "
                select {
                    onchange: move |evt| {
                        page_size.set(evt.value().parse().unwrap_or(first_size));
                        page.set(0);
                    },
                    for size in page_sizes.iter().copied() {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == current_size,
                            "{size}"
                        }
                    }
                }
            }
            span { "{label}" }
            button {
                class: "secondary outline",
                disabled: !pagination.has_previous(),
                onclick: move |_| page.set(pagination.page.saturating_sub(1)),
                "‹"
            }
            button {
                class: "secondary outline",
                disabled: !pagination.has_next(),
                onclick: move |_| page.set(pagination.page + 1),
                "›"
            }
        }
    }
}

/// Single grid row
#[component]
fn GridRowView(
    row: GridRow,
    columns: Vec<ColumnDef>,
    selectable: bool,
    selected: bool,
    on_toggle: EventHandler<usize>,
) -> Element {
    let key = row.key;

    rsx! {
        tr {
            if selectable {
                td {
                    input {
                        r#type: "checkbox",
                        checked: selected,
                        onchange: move |_| on_toggle.call(key),
                    }
                }
            }
            for column in columns.iter() {
                td { key: "{column.field}", class: cell_class(column), "{row.cell(&column.field)}" }
            }
        }
    }
}
