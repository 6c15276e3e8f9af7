//! Tracker (Binom) report page.

use dioxus::prelude::*;
use reporter_wire::params::{DEFAULT_DATE_TYPE, DEFAULT_TIMEZONE, DEFAULT_TRAFFIC_SOURCE_IDS};
use reporter_wire::ColumnDef;

use super::report_state::{use_date_inputs, use_report_state};
use crate::app::components::{DataGrid, DateRangeInputs, ErrorAlert, Layout, SheetLink};
use crate::app::reports::ReportRequest;

fn default_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::text("id", "ID", 90),
        ColumnDef::text("campaign_name", "Campaign Name", 250),
        ColumnDef::number("clicks", "Clicks", 110),
        ColumnDef::number("conversions", "Conversions", 130),
        ColumnDef::number("revenue", "Revenue", 110),
    ]
}

#[component]
pub fn BinomReport() -> Element {
    let state = use_report_state();
    let (start, end) = use_date_inputs();
    let mut traffic_sources = use_signal(|| DEFAULT_TRAFFIC_SOURCE_IDS.to_string());
    let mut date_type = use_signal(|| DEFAULT_DATE_TYPE.to_string());
    let mut timezone = use_signal(|| DEFAULT_TIMEZONE.to_string());

    let generate = move |_| {
        state.submit(ReportRequest::tracker(
            start(),
            end(),
            &traffic_sources.read(),
            &date_type.read(),
            &timezone.read(),
        ))
    };

    let loading = state.is_loading();
    let report = state.report.read().clone();

    rsx! {
        Layout { title: "Binom Report".to_string(), nav_active: "binom".to_string(),
            section { class: "card",
                h2 { "Binom Report" }
                DateRangeInputs { start, end, disabled: loading }
                details {
                    summary { "Tracker filters" }
                    div { class: "form-row",
                        label {
                            "Traffic Source IDs"
                            input {
                                value: "{traffic_sources}",
                                placeholder: DEFAULT_TRAFFIC_SOURCE_IDS,
                                disabled: loading,
                                oninput: move |evt| traffic_sources.set(evt.value()),
                            }
                        }
                        label {
                            "Date Type"
                            input {
                                value: "{date_type}",
                                disabled: loading,
                                oninput: move |evt| date_type.set(evt.value()),
                            }
                        }
                        label {
                            "Timezone"
                            input {
                                value: "{timezone}",
                                disabled: loading,
                                oninput: move |evt| timezone.set(evt.value()),
                            }
                        }
                    }
                }
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
                page_sizes: vec![10, 25, 50],
                selectable: true,
            }
        }
    }
}
