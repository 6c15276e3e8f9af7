//! Report requests built from form input.
//!
//! Each report page turns its raw inputs into a [`ReportRequest`] and hands
//! it to [`submit_report`]. Invalid input never reaches the transport.

use chrono::NaiveDate;
use reporter_wire::params::validate_email;
use reporter_wire::{
    AdsTestParams, DateRange, ParamError, RangeError, ReportResponse, TrackerReportParams,
};
use thiserror::Error;

use crate::app::api::{ApiClient, ApiError, Transport};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error(transparent)]
    Params(#[from] ParamError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// One validated report call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRequest {
    Combined(DateRange),
    Tracker(TrackerReportParams),
    AdsTest(AdsTestParams),
    ManagerCheck(String),
}

impl ReportRequest {
    pub fn combined(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, FormError> {
        Ok(ReportRequest::Combined(DateRange::from_inputs(start, end)?))
    }

    pub fn tracker(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        traffic_source_ids: &str,
        date_type: &str,
        timezone: &str,
    ) -> Result<Self, FormError> {
        let range = DateRange::from_inputs(start, end)?;
        let params = TrackerReportParams::from_form(range, traffic_source_ids, date_type, timezone)?;
        Ok(ReportRequest::Tracker(params))
    }

    pub fn ads_test(
        email: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, FormError> {
        let range = DateRange::from_inputs(start, end)?;
        Ok(ReportRequest::AdsTest(AdsTestParams::new(email, range)?))
    }

    pub fn manager_check(email: &str) -> Result<Self, FormError> {
        Ok(ReportRequest::ManagerCheck(validate_email(email)?))
    }

    /// Short name used in logs
    pub fn label(&self) -> &'static str {
        match self {
            ReportRequest::Combined(_) => "combined",
            ReportRequest::Tracker(_) => "binom",
            ReportRequest::AdsTest(_) => "google-ads-test",
            ReportRequest::ManagerCheck(_) => "manager-check",
        }
    }

    pub async fn send<T: Transport>(
        &self,
        client: &ApiClient<T>,
    ) -> Result<ReportResponse, ApiError> {
        match self {
            ReportRequest::Combined(range) => client.combined_report(range).await,
            ReportRequest::Tracker(params) => client.tracker_report(params).await,
            ReportRequest::AdsTest(params) => client.ads_test(params).await,
            ReportRequest::ManagerCheck(email) => client.manager_check(email).await,
        }
    }
}

/// Send the request built from a form, or stop at the form error without
/// touching the transport.
pub async fn submit_report<T: Transport>(
    client: &ApiClient<T>,
    form: Result<ReportRequest, FormError>,
) -> Result<ReportResponse, SubmitError> {
    let request = form?;
    Ok(request.send(client).await?)
}
