//! REST paths exposed by the reporting backend.
//!
//! All paths are origin-relative; the dashboard server forwards anything
//! under [`API_PREFIX`] to the backend.

/// Prefix shared by every backend route
pub const API_PREFIX: &str = "/api/";

/// GET - returns `{ "auth_url": ... }` for the OAuth consent screen
pub const GOOGLE_AUTH: &str = "/api/auth/google/";

/// GET - completes the OAuth handoff (`code`, `redirect`)
pub const GOOGLE_AUTH_CALLBACK: &str = "/api/auth/google/callback/";

/// GET - current session status
pub const USER_STATUS: &str = "/api/auth/user/";

/// POST - ends the session
pub const LOGOUT: &str = "/api/auth/logout/";

/// GET - joined ad spend and tracker revenue
pub const COMBINED_REPORT: &str = "/api/combined-report/";

/// GET - raw tracker campaign report
pub const TRACKER_REPORT: &str = "/api/report/generate/";

/// GET - ad platform campaign cost query
pub const ADS_TEST: &str = "/api/google-ads/test/";

/// GET - ad platform account hierarchy check
pub const ADS_MANAGER_CHECK: &str = "/api/google-ads/manager-check/";

/// Value of the `redirect` parameter telling the backend to hand the browser
/// back to the dashboard after the OAuth exchange.
pub const FRONTEND_REDIRECT: &str = "frontend";
