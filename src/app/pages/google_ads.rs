//! Ad platform test page: raw campaign/ad group query plus account check.

use dioxus::prelude::*;
use reporter_wire::ColumnDef;

use super::report_state::{use_date_inputs, use_report_state};
use crate::app::auth::use_auth;
use crate::app::components::{DataGrid, DateRangeInputs, ErrorAlert, Layout, SheetLink};
use crate::app::reports::ReportRequest;

fn default_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::text("id", "ID", 90),
        ColumnDef::text("customer_id", "Customer ID", 150),
        ColumnDef::text("campaign_id", "Campaign ID", 150),
        ColumnDef::text("campaign_name", "Campaign Name", 250),
        ColumnDef::text("ad_group_id", "Ad Group ID", 150),
        ColumnDef::text("ad_group_name", "Ad Group Name", 250),
    ]
}

#[component]
pub fn GoogleAdsReport() -> Element {
    let auth = use_auth();
    let state = use_report_state();
    let (start, end) = use_date_inputs();
    // Prefill with the signed-in account
    let mut email = use_signal(move || {
        auth.session()
            .user()
            .map(|user| user.email.clone())
            .unwrap_or_default()
    });

    let run_test = move |_| state.submit(ReportRequest::ads_test(&email.read(), start(), end()));
    let check_accounts = move |_| state.submit(ReportRequest::manager_check(&email.read()));

    let loading = state.is_loading();
    let report = state.report.read().clone();

    rsx! {
        Layout { title: "Google Ads API Test".to_string(), nav_active: "google-ads".to_string(),
            section { class: "card",
                h2 { "Google Ads API Test" }
                div { class: "form-row",
                    label {
                        "Account Email"
                        input {
                            r#type: "email",
                            value: "{email}",
                            placeholder: "name@example.com",
                            disabled: loading,
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                }
                DateRangeInputs { start, end, disabled: loading }
                div { class: "form-row",
                    button {
                        disabled: loading,
                        aria_busy: if loading { "true" } else { "false" },
                        onclick: run_test,
                        "Run Test"
                    }
                    button {
                        class: "secondary",
                        disabled: loading,
                        onclick: check_accounts,
                        "Check Accounts"
                    }
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
            }
        }
    }
}
