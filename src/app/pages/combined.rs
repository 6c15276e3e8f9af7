//! Combined report page: ad spend joined with tracker revenue.

use dioxus::prelude::*;
use reporter_wire::ColumnDef;

use super::report_state::{use_date_inputs, use_report_state};
use crate::app::components::{DataGrid, DateRangeInputs, ErrorAlert, Layout, SheetLink};
use crate::app::reports::ReportRequest;

fn default_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::text("id", "ID", 90),
        ColumnDef::text("accountName", "Account Name", 150),
        ColumnDef::text("campaignName", "Campaign Name", 150),
        ColumnDef::number("totalSpend", "Total Spend", 110),
        ColumnDef::number("revenue", "Revenue", 110),
    ]
}

#[component]
pub fn CombinedReport() -> Element {
    let state = use_report_state();
    let (start, end) = use_date_inputs();

    let generate = move |_| state.submit(ReportRequest::combined(start(), end()));

    let loading = state.is_loading();
    let report = state.report.read().clone();

    rsx! {
        Layout { title: "Combined Report".to_string(), nav_active: "combined".to_string(),
            section { class: "card",
                h2 { "Combined Report" }
                DateRangeInputs { start, end, disabled: loading }
                button {
                    disabled: loading,
                    aria_busy: if loading { "true" } else { "false" },
                    onclick: generate,
                    if loading { "Generating..." } else { "Generate Report" }
                }
            }
            ErrorAlert { message: state.error.read().clone() }
            SheetLink { href: report.sheet_link.clone() }
            DataGrid {
                rows: report.rows,
                columns: default_columns(),
                declared: report.columns,
                loading,
                page_sizes: vec![5, 10],
                selectable: true,
            }
        }
    }
}
