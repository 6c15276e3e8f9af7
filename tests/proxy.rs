//! Forwarding route and native transport against a mock backend.

#![cfg(feature = "server")]

use std::collections::HashMap;

use axum::body::{to_bytes, Body};
use axum::extract::Query;
use axum::http::{header, HeaderMap, Request, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use binom_reporter::app::api::{client_for, ApiError, Transport};
use binom_reporter::app::auth::{check_session, Session};
use binom_reporter::config::Config;
use binom_reporter::proxy::{self, ProxyState};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("sessionid=s1"))
}

async fn user_status(headers: HeaderMap) -> impl IntoResponse {
    if has_session(&headers) {
        (
            StatusCode::OK,
            Json(json!({"isAuthenticated": true, "user": {"email": "ana@example.com"}})),
        )
    } else {
        (
            StatusCode::FORBIDDEN,
            Json(json!({"detail": "Authentication credentials were not provided."})),
        )
    }
}

async fn oauth_callback() -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [
            (
                header::LOCATION,
                "http://localhost:3000/auth/google/callback?email=ana%40example.com",
            ),
            (header::SET_COOKIE, "sessionid=s1; Path=/; HttpOnly"),
        ],
    )
}

async fn csrf() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, "csrftoken=tok123; Path=/")],
        Json(json!({"detail": "CSRF cookie set"})),
    )
}

async fn login() -> impl IntoResponse {
    [(header::SET_COOKIE, "sessionid=s1; Path=/; HttpOnly")]
}

async fn logout(headers: HeaderMap) -> impl IntoResponse {
    match headers.get("x-csrftoken").and_then(|v| v.to_str().ok()) {
        Some("tok123") => (
            StatusCode::OK,
            Json(json!({"detail": "Successfully logged out."})),
        ),
        _ => (
            StatusCode::FORBIDDEN,
            Json(json!({"detail": "CSRF Failed: CSRF token missing."})),
        ),
    }
}

async fn combined(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({
        "results": [{"accountName": "Acme", "start": query.get("start_date")}],
        "google_sheet_link": "https://docs.google.com/spreadsheets/d/abc",
    }))
}

async fn echo_uri(uri: Uri) -> String {
    uri.to_string()
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    Json(json!([]))
}

/// Mock reporting backend on an ephemeral port
async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/auth/user/", get(user_status))
        .route("/api/auth/google/callback/", get(oauth_callback))
        .route("/api/auth/csrf/", get(csrf))
        .route("/api/auth/login/", get(login))
        .route("/api/auth/logout/", post(logout))
        .route("/api/combined-report/", get(combined))
        .route("/api/echo/{*rest}", get(echo_uri))
        .route("/api/slow/", get(slow));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn config(backend_url: &str, request_timeout_secs: u64) -> Config {
    Config {
        backend_url: backend_url.to_string(),
        request_timeout_secs,
    }
}

fn forwarding_router(backend_url: &str) -> Router {
    proxy::router(ProxyState::new(&config(backend_url, 5)).unwrap())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_forwards_status_body_and_cookie() {
    let backend = spawn_backend().await;
    let router = forwarding_router(&backend);

    let response = router
        .clone()
        .oneshot(Request::get("/api/auth/user/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await["detail"],
        "Authentication credentials were not provided."
    );

    let response = router
        .oneshot(
            Request::get("/api/auth/user/")
                .header(header::COOKIE, "sessionid=s1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body_json(response).await["user"]["email"], "ana@example.com");
}

#[tokio::test]
async fn test_forwards_query_string() {
    let backend = spawn_backend().await;
    let response = forwarding_router(&backend)
        .oneshot(
            Request::get("/api/combined-report/?start_date=2024-01-01&end_date=2024-01-31")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["results"][0]["start"], "2024-01-01");
}

#[tokio::test]
async fn test_encoded_path_is_forwarded_verbatim() {
    let backend = spawn_backend().await;
    let response = forwarding_router(&backend)
        .oneshot(
            Request::get("/api/echo/a%3Fb%23c/?x=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"/api/echo/a%3Fb%23c/?x=1");
}

#[tokio::test]
async fn test_redirects_reach_the_browser() {
    let backend = spawn_backend().await;
    let response = forwarding_router(&backend)
        .oneshot(
            Request::get("/api/auth/google/callback/?code=abc&redirect=frontend")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "http://localhost:3000/auth/google/callback?email=ana%40example.com"
    );
    assert_eq!(
        response.headers().get(header::SET_COOKIE).unwrap(),
        "sessionid=s1; Path=/; HttpOnly"
    );
}

#[tokio::test]
async fn test_forwards_csrf_header_and_body() {
    let backend = spawn_backend().await;
    let router = forwarding_router(&backend);

    let response = router
        .clone()
        .oneshot(
            Request::post("/api/auth/logout/")
                .header(header::CONTENT_TYPE, "application/json")
                .header("X-CSRFToken", "tok123")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(
            Request::post("/api/auth/logout/")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unreachable_backend_is_bad_gateway() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = forwarding_router(&format!("http://{addr}"))
        .oneshot(Request::get("/api/auth/user/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Backend unreachable"));
}

#[tokio::test]
async fn test_http_transport_keeps_cookies_and_csrf() {
    let backend = spawn_backend().await;
    let client = client_for(&config(&backend, 5)).unwrap();

    // No cookies yet: 403 resolves to signed out
    assert_eq!(check_session(&client).await, Session::SignedOut);
    assert_eq!(client.transport().csrf_token(), None);

    let _: Value = client.get_json("/api/auth/csrf/", &[]).await.unwrap();
    assert_eq!(client.transport().csrf_token().as_deref(), Some("tok123"));

    let _: Option<Value> = client.get_json("/api/auth/login/", &[]).await.unwrap();
    match check_session(&client).await {
        Session::SignedIn(user) => assert_eq!(user.email, "ana@example.com"),
        other => panic!("expected signed in, got {other:?}"),
    }

    // Logout only succeeds when the CSRF header was attached
    let response = client.logout().await.unwrap();
    assert_eq!(response.detail.as_deref(), Some("Successfully logged out."));
}

#[tokio::test]
async fn test_http_transport_honors_configured_timeout() {
    let backend = spawn_backend().await;
    let client = client_for(&config(&backend, 1)).unwrap();

    let err = client
        .get_json::<Value>("/api/slow/", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn test_client_for_rejects_invalid_backend() {
    assert!(matches!(
        client_for(&config("not a url", 5)),
        Err(ApiError::Transport(_))
    ));
}
