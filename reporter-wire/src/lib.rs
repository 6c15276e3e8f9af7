//! Wire types for the Google Binom Reporter backend.
//!
//! This crate defines the types that cross the boundary between the
//! dashboard and the reporting backend:
//! - [`endpoints`] - REST paths the dashboard calls
//! - [`auth`] - OAuth handoff and session status payloads
//! - [`range`] - validated report date ranges
//! - [`params`] - query parameter sets for each report endpoint
//! - [`report`] - interpretation of opaque report bodies

pub mod auth;
pub mod endpoints;
pub mod params;
pub mod range;
pub mod report;

// Re-export commonly used types at crate root
pub use auth::{AuthUrlResponse, CallbackResponse, LogoutResponse, User, UserStatus};
pub use params::{AdsTestParams, ParamError, TrackerReportParams};
pub use range::{DateRange, RangeError};
pub use report::{ColumnDef, ColumnKind, ReportResponse};
