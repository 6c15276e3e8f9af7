//! Layout component wrapping the report pages with Pico CSS and the app chrome.

use dioxus::prelude::*;

use super::nav::{Sidebar, TopBar};
use super::theme::THEME_SCRIPT;
use crate::app::auth::RequireAuth;

/// CSS styles for the application (extends Pico CSS).
pub const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; --sidebar-width: 240px; }
.shell { display: grid; grid-template-columns: var(--sidebar-width) 1fr; min-height: 100vh; }
.sidebar { border-right: 1px solid var(--pico-muted-border-color); padding: 1rem 0.75rem; }
.sidebar ul { list-style: none; padding: 0; margin: 0; }
.sidebar li { list-style: none; margin: 0; }
.sidebar a, .sidebar button { display: block; width: 100%; text-align: left; padding: 0.5rem 0.75rem; border-radius: var(--pico-border-radius); text-decoration: none; margin: 0 0 0.25rem 0; }
.sidebar a.active { background: var(--pico-primary-background); color: var(--pico-primary-inverse); }
.sidebar hr { margin: 0.75rem 0; }
.topbar { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1.5rem; border-bottom: 1px solid var(--pico-muted-border-color); }
.topbar strong { font-size: 1.1rem; }
.content { padding: 1.5rem; min-width: 0; }
.card { padding: 1.5rem; border-radius: var(--pico-border-radius); background: var(--pico-card-background-color); box-shadow: var(--pico-card-box-shadow); margin-bottom: 1rem; }
.form-row { display: flex; flex-wrap: wrap; gap: 1rem; align-items: flex-end; }
.form-row label { flex: 1 1 12rem; margin: 0; }
.form-row button { width: auto; margin: 0; }
.presets { display: flex; gap: 0.5rem; margin: 1rem 0; }
.presets button { width: auto; margin: 0; padding: 0.35rem 0.75rem; font-size: 0.85rem; }
.alert-error { padding: 0.75rem 1rem; border-radius: var(--pico-border-radius); background: color-mix(in srgb, var(--pico-del-color) 15%, transparent); color: var(--pico-del-color); margin-bottom: 1rem; }
.grid-wrap { overflow-x: auto; }
.grid-wrap table { margin-bottom: 0.5rem; }
.cell-number { text-align: right; font-variant-numeric: tabular-nums; }
.grid-footer { display: flex; justify-content: flex-end; align-items: center; gap: 1rem; font-size: 0.85rem; }
.grid-footer select { width: auto; margin: 0; padding: 0.25rem 2rem 0.25rem 0.5rem; }
.grid-footer button { width: auto; margin: 0; padding: 0.25rem 0.6rem; }
small { color: var(--pico-muted-color); }
.theme-toggle { width: auto; margin: 0; padding: 0.25rem 0.6rem; font-size: 0.85rem; }
.centered { display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 80vh; }
.centered .card { width: 100%; max-width: 26rem; text-align: center; }
.google-button { background: #4285F4; border-color: #4285F4; color: #fff; }
.google-button:hover { background: #357ae8; border-color: #357ae8; }
"#;

/// Stylesheets and the theme script every page needs in `<head>`.
#[component]
pub fn PageHead(title: String) -> Element {
    let full_title = format!("{title} - Google Binom Reporter");

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }
        // Theme init runs immediately (no DOM needed) to prevent flash
        document::Script { {THEME_SCRIPT} }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout for signed-in pages: session guard, top bar, sidebar.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        PageHead { title: props.title.clone() }

        RequireAuth {
            div { class: "shell",
                Sidebar { active: props.nav_active.clone() }
                div {
                    TopBar {}
                    main { class: "content",
                        {props.children}
                    }
                    footer { class: "content",
                        small { "Google Binom Reporter v{version}" }
                    }
                }
            }
        }
    }
}
