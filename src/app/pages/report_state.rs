//! Request state shared by the report pages.

use chrono::NaiveDate;
use dioxus::prelude::*;
use reporter_wire::ReportResponse;
use tracing::{error, info};

use crate::app::api;
use crate::app::reports::{submit_report, FormError, ReportRequest, SubmitError};
use crate::app::dates::{default_range, today};

/// Result, spinner flag and error message for one report form.
#[derive(Clone, Copy)]
pub struct ReportState {
    pub report: Signal<ReportResponse>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

pub fn use_report_state() -> ReportState {
    ReportState {
        report: use_signal(ReportResponse::default),
        loading: use_signal(|| false),
        error: use_signal(|| None),
    }
}

/// Start/end signals initialised to the default range
pub fn use_date_inputs() -> (Signal<Option<NaiveDate>>, Signal<Option<NaiveDate>>) {
    let (start, end) = default_range(today());
    (use_signal(move || Some(start)), use_signal(move || Some(end)))
}

impl ReportState {
    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    /// Submit one report form. Ignored while another request is in flight;
    /// invalid input ends as an inline error without a request.
    pub fn submit(&self, form: Result<ReportRequest, FormError>) {
        let mut state = *self;
        if *state.loading.peek() {
            return;
        }

        state.loading.set(true);
        state.error.set(None);
        state.report.with_mut(|report| {
            report.sheet_link = None;
            report.sheet_preview_link = None;
        });

        spawn(async move {
            let label = form.as_ref().map(ReportRequest::label).unwrap_or("invalid");
            let result = match api::client() {
                Ok(client) => submit_report(&client, form).await,
                Err(e) => Err(SubmitError::from(e)),
            };
            match result {
                Ok(report) => {
                    info!(report = label, rows = report.rows.len(), "Report loaded");
                    state.report.set(report);
                }
                Err(SubmitError::Form(e)) => state.error.set(Some(e.to_string())),
                Err(e) => {
                    error!(report = label, "Report request failed: {}", e);
                    state.error.set(Some(e.to_string()));
                }
            }
            state.loading.set(false);
        });
    }
}
