//! Dioxus fullstack dashboard.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod auth;
pub mod browser;
pub mod components;
pub mod dates;
pub mod grid;
pub mod pages;
pub mod reports;

use auth::use_auth_provider;
use pages::{AuthCallback, BinomReport, CombinedReport, Docs, GoogleAdsReport, Login, NotFound};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Auth context lives at the root so every page sees the same session
    use_auth_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    CombinedReport {},
    #[route("/report/binom")]
    BinomReport {},
    #[route("/report/google-ads-test")]
    GoogleAdsReport {},
    #[route("/login?:error")]
    Login { error: String },
    #[route("/auth/google/callback?:email&:error&:code")]
    AuthCallback {
        email: String,
        error: String,
        code: String,
    },
    #[route("/docs")]
    Docs {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
