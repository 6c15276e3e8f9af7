//! Client for the reporting backend.
//!
//! Every request carries the session cookie (via the transport) and, for
//! same-origin paths, the CSRF token from the `csrftoken` cookie. Non-2xx
//! responses become [`ApiError::Status`] with the server's message when it
//! sent one.

mod transport;

pub use transport::{cookie_value, ApiRequest, Method, RawResponse, Transport};

#[cfg(target_arch = "wasm32")]
pub use transport::BrowserTransport;
#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub use transport::HttpTransport;

use reporter_wire::endpoints;
use reporter_wire::{
    AdsTestParams, AuthUrlResponse, CallbackResponse, DateRange, LogoutResponse, ReportResponse,
    TrackerReportParams, UserStatus,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Cookie holding the CSRF token
pub const CSRF_COOKIE: &str = "csrftoken";
/// Header the backend expects the CSRF token in
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Fields checked, in order, for a server-provided error message
const MESSAGE_FIELDS: [&str; 3] = ["message", "detail", "error"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },
    #[error("API error: Malformed JSON response from {path}: {detail}")]
    Parse { path: String, detail: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Backend client over a [`Transport`].
#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ApiClient<T> {
    /// `base_url` is prepended to relative paths; empty means same origin.
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn prepare(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
    ) -> ApiRequest {
        let external = is_absolute(path);
        let mut url = if external {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        };
        if !query.is_empty() {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&encode_query(query));
        }

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        // The token belongs to our backend; never hand it to third parties
        if !external {
            if let Some(token) = self.transport.csrf_token() {
                headers.push((CSRF_HEADER.to_string(), token));
            }
        }

        ApiRequest {
            method,
            url,
            headers,
            body,
        }
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
    ) -> Result<RawResponse, ApiError> {
        let request = self.prepare(method, path, query, body);
        debug!(method = method.as_str(), url = %request.url, "API request");

        let response = self.transport.send(request).await?;
        debug!(status = response.status, path, "API response");
        Ok(response)
    }

    pub async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R, ApiError> {
        let response = self.execute(Method::Get, path, query, None).await?;
        decode(path, response)
    }

    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Parse {
            path: path.to_string(),
            detail: e.to_string(),
        })?;
        let response = self.execute(Method::Post, path, &[], Some(body)).await?;
        decode(path, response)
    }

    /// OAuth consent URL to send the browser to
    pub async fn auth_url(&self) -> Result<AuthUrlResponse, ApiError> {
        self.get_json(endpoints::GOOGLE_AUTH, &[]).await
    }

    /// Exchange an OAuth `code` for a backend session
    pub async fn complete_oauth(&self, code: &str) -> Result<CallbackResponse, ApiError> {
        self.get_json(
            endpoints::GOOGLE_AUTH_CALLBACK,
            &[
                ("code", code.to_string()),
                ("redirect", endpoints::FRONTEND_REDIRECT.to_string()),
            ],
        )
        .await
    }

    /// Session status. A 403 just means nobody is signed in.
    pub async fn user_status(&self) -> Result<UserStatus, ApiError> {
        let response = self
            .execute(Method::Get, endpoints::USER_STATUS, &[], None)
            .await?;
        if response.status == 403 {
            return Ok(UserStatus::unauthenticated());
        }
        decode(endpoints::USER_STATUS, response)
    }

    pub async fn logout(&self) -> Result<LogoutResponse, ApiError> {
        self.post_json(endpoints::LOGOUT, &serde_json::json!({})).await
    }

    pub async fn combined_report(&self, range: &DateRange) -> Result<ReportResponse, ApiError> {
        self.report(endpoints::COMBINED_REPORT, &range.query_pairs())
            .await
    }

    pub async fn tracker_report(
        &self,
        params: &TrackerReportParams,
    ) -> Result<ReportResponse, ApiError> {
        self.report(endpoints::TRACKER_REPORT, &params.query_pairs())
            .await
    }

    pub async fn ads_test(&self, params: &AdsTestParams) -> Result<ReportResponse, ApiError> {
        self.report(endpoints::ADS_TEST, &params.query_pairs()).await
    }

    /// Account hierarchy for the given (already validated) email
    pub async fn manager_check(&self, email: &str) -> Result<ReportResponse, ApiError> {
        self.report(endpoints::ADS_MANAGER_CHECK, &[("email", email.to_string())])
            .await
    }

    async fn report(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ReportResponse, ApiError> {
        let value: Value = self.get_json(path, query).await?;
        Ok(ReportResponse::from_value(value))
    }
}

/// Apply status handling and JSON decoding to a raw response.
pub fn decode<R: DeserializeOwned>(path: &str, response: RawResponse) -> Result<R, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
            message: error_message(&response.body, &response.status_text),
        });
    }

    let parse_error = |e: serde_json::Error| ApiError::Parse {
        path: path.to_string(),
        detail: e.to_string(),
    };

    // 204 / empty body: decode as `null` so `()` and `Option<_>` work
    if response.status == 204 || response.body.trim().is_empty() {
        return serde_json::from_value(Value::Null).map_err(parse_error);
    }
    serde_json::from_str(&response.body).map_err(parse_error)
}

/// Best message from an error body: a known JSON field, else the raw text,
/// else the HTTP status text.
pub fn error_message(body: &str, status_text: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status_text.to_string();
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => MESSAGE_FIELDS
            .iter()
            .find_map(|field| match map.get(*field) {
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                Some(Value::Null) | None => None,
                Some(Value::String(_)) => None,
                Some(other) => Some(other.to_string()),
            })
            .unwrap_or_else(|| body.to_string()),
        _ => body.to_string(),
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

fn encode_query(query: &[(&str, String)]) -> String {
    query
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = BrowserTransport;
#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub type DefaultTransport = HttpTransport;

/// Client used by the pages.
///
/// In the browser, paths stay origin-relative and go through the server's
/// `/api` forwarding route.
#[cfg(target_arch = "wasm32")]
pub fn client() -> Result<ApiClient<DefaultTransport>, ApiError> {
    Ok(ApiClient::new(BrowserTransport, ""))
}

/// Client used by the pages when rendering on the server. Talks to the
/// configured backend directly.
#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub fn client() -> Result<ApiClient<DefaultTransport>, ApiError> {
    let config = crate::config::load_config()
        .map_err(|e| ApiError::Transport(format!("configuration error: {e}")))?;
    client_for(&config)
}

/// Native client for an already loaded configuration.
#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub fn client_for(config: &crate::config::Config) -> Result<ApiClient<DefaultTransport>, ApiError> {
    let transport = HttpTransport::new(
        &config.backend_url,
        std::time::Duration::from_secs(config.request_timeout_secs),
    )?;
    Ok(ApiClient::new(transport, config.backend_url.clone()))
}
