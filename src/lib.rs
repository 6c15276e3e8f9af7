//! Google Binom Reporter
//!
//! Dashboard for combined Google Ads and Binom performance reports.
//!
//! This library provides:
//! - Google OAuth sign-in and a cookie-backed session context
//! - Combined, Binom and Google Ads report pages with paged data grids
//! - A JSON client for the reporting backend (browser fetch or reqwest)
//! - The server side: config loading and `/api` forwarding to the backend

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod proxy;

/// Backend used when nothing is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
