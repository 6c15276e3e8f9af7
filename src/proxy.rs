//! `/api/*` forwarding to the reporting backend.
//!
//! The browser only ever talks to this server. Session cookies, the CSRF
//! header and the backend's OAuth redirects pass through unchanged.

use std::time::Duration;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::{header, HeaderMap, HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use reqwest::redirect::Policy;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

/// Request headers copied to the backend
const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] = [
    header::COOKIE,
    HeaderName::from_static("x-csrftoken"),
    header::CONTENT_TYPE,
    header::ACCEPT,
];

/// Response headers copied back to the browser
const RETURNED_RESPONSE_HEADERS: [HeaderName; 3] =
    [header::CONTENT_TYPE, header::SET_COOKIE, header::LOCATION];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("Backend timed out: {0}")]
    Timeout(String),

    #[error("Backend response could not be read: {0}")]
    Body(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProxyError::Timeout(e.to_string())
        } else if e.is_body() || e.is_decode() {
            ProxyError::Body(e.to_string())
        } else {
            ProxyError::Unreachable(e.to_string())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            ProxyError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Unreachable(_) | ProxyError::Body(_) => StatusCode::BAD_GATEWAY,
        };
        warn!("Forwarding failed: {}", self);

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Shared state for the forwarding route
#[derive(Clone)]
pub struct ProxyState {
    client: Client,
    backend: String,
}

impl ProxyState {
    pub fn new(config: &Config) -> Result<Self> {
        let backend = config.backend()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            // OAuth redirects must reach the browser
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            client,
            backend: backend.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    /// Backend URL for the raw (still percent-encoded) request path and query
    fn target(&self, path_and_query: &str) -> String {
        let target = path_and_query.strip_suffix('?').unwrap_or(path_and_query);
        format!("{}{}", self.backend, target)
    }
}

/// Router holding the forwarding route; merge it into the app router.
pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/{*path}", any(forward))
        .with_state(state)
}

async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let target = state.target(path_and_query);
    debug!(%method, %target, "Forwarding to backend");

    let mut request = state.client.request(method, &target);
    for name in FORWARDED_REQUEST_HEADERS.iter() {
        for value in headers.get_all(name) {
            request = request.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();

    let mut response_headers = HeaderMap::new();
    for name in RETURNED_RESPONSE_HEADERS.iter() {
        for value in upstream.headers().get_all(name) {
            response_headers.append(name.clone(), value.clone());
        }
    }
    let bytes = upstream.bytes().await?;

    debug!(%status, bytes = bytes.len(), "Backend responded");
    Ok((status, response_headers, bytes).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(backend_url: &str) -> ProxyState {
        ProxyState::new(&Config {
            backend_url: backend_url.to_string(),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_target_keeps_path_and_query() {
        let state = state("http://localhost:8000/");
        assert_eq!(
            state.target("/api/auth/user/"),
            "http://localhost:8000/api/auth/user/"
        );
        assert_eq!(
            state.target("/api/combined-report/?start_date=2024-01-01"),
            "http://localhost:8000/api/combined-report/?start_date=2024-01-01"
        );
        assert_eq!(state.target("/api/x/?"), "http://localhost:8000/api/x/");
        assert_eq!(
            state.target("/api/reports/a%3Fb%23c/?x=1"),
            "http://localhost:8000/api/reports/a%3Fb%23c/?x=1"
        );
    }

    #[test]
    fn test_rejects_non_http_backend() {
        let config = Config {
            backend_url: "file:///tmp".to_string(),
            request_timeout_secs: 5,
        };
        assert!(ProxyState::new(&config).is_err());
    }

    #[test]
    fn test_error_status_codes() {
        let response = ProxyError::Unreachable("refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let response = ProxyError::Timeout("slow".into()).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
