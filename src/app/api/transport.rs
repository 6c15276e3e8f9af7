//! Request transports for the API client.
//!
//! The browser build talks to the backend through `fetch` so the browser's
//! cookie jar supplies the session; native builds use reqwest with its own
//! jar.

use async_trait::async_trait;

use super::ApiError;

/// HTTP methods the backend contract uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Fully prepared request (URL already carries the query string)
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Response as received, before any status or JSON handling
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends prepared requests and exposes the CSRF cookie.
#[async_trait(?Send)]
pub trait Transport {
    /// Current value of the `csrftoken` cookie, if any
    fn csrf_token(&self) -> Option<String>;

    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Value of cookie `name` in a `Cookie`-style string (`a=1; b=2`).
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| {
            let (key, value) = cookie.split_once('=')?;
            (key == name).then(|| {
                urlencoding::decode(value)
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| value.to_string())
            })
        })
        .filter(|value| !value.is_empty())
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use async_trait::async_trait;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{HtmlDocument, Request, RequestCredentials, RequestInit, Response};

    use super::{cookie_value, ApiRequest, RawResponse, Transport};
    use crate::app::api::{ApiError, CSRF_COOKIE};

    /// `fetch`-based transport; the browser attaches the session cookie.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserTransport;

    fn js_error(value: JsValue) -> ApiError {
        ApiError::Transport(
            value
                .as_string()
                .or_else(|| {
                    value
                        .dyn_ref::<js_sys::Error>()
                        .map(|e| String::from(e.message()))
                })
                .unwrap_or_else(|| "request failed".to_string()),
        )
    }

    #[async_trait(?Send)]
    impl Transport for BrowserTransport {
        fn csrf_token(&self) -> Option<String> {
            let document = web_sys::window()?.document()?;
            let cookies = document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
            cookie_value(&cookies, CSRF_COOKIE)
        }

        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            let window =
                web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;

            let init = RequestInit::new();
            init.set_method(request.method.as_str());
            init.set_credentials(RequestCredentials::Include);
            if let Some(body) = &request.body {
                init.set_body(&JsValue::from_str(body));
            }

            let js_request = Request::new_with_str_and_init(&request.url, &init).map_err(js_error)?;
            for (name, value) in &request.headers {
                js_request.headers().set(name, value).map_err(js_error)?;
            }

            let response: Response = JsFuture::from(window.fetch_with_request(&js_request))
                .await
                .map_err(js_error)?
                .dyn_into()
                .map_err(js_error)?;

            let body = JsFuture::from(response.text().map_err(js_error)?)
                .await
                .map_err(js_error)?
                .as_string()
                .unwrap_or_default();

            Ok(RawResponse {
                status: response.status(),
                status_text: response.status_text(),
                body,
            })
        }
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub use native::HttpTransport;

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
mod native {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::cookie::{CookieStore, Jar};
    use reqwest::redirect::Policy;
    use reqwest::Client;

    use super::{cookie_value, ApiRequest, Method, RawResponse, Transport};
    use crate::app::api::{ApiError, CSRF_COOKIE};

    /// reqwest transport with its own cookie jar, scoped to one backend.
    #[derive(Clone)]
    pub struct HttpTransport {
        client: Client,
        jar: Arc<Jar>,
        base_url: url::Url,
    }

    impl HttpTransport {
        pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
            let base_url = url::Url::parse(base_url)
                .map_err(|e| ApiError::Transport(format!("invalid base URL {base_url}: {e}")))?;
            let jar = Arc::new(Jar::default());
            let client = Client::builder()
                .cookie_provider(jar.clone())
                .redirect(Policy::none())
                .timeout(timeout)
                .build()
                .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {e}")))?;

            Ok(Self {
                client,
                jar,
                base_url,
            })
        }

        pub fn base_url(&self) -> &str {
            self.base_url.as_str()
        }
    }

    #[async_trait(?Send)]
    impl Transport for HttpTransport {
        fn csrf_token(&self) -> Option<String> {
            let header = self.jar.cookies(&self.base_url)?;
            cookie_value(header.to_str().ok()?, CSRF_COOKIE)
        }

        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            let mut builder = match request.method {
                Method::Get => self.client.get(&request.url),
                Method::Post => self.client.post(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            Ok(RawResponse {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            })
        }
    }
}
