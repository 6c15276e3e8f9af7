//! Small pieces shared by the report pages.

use dioxus::prelude::*;

/// Error banner; renders nothing without a message.
#[component]
pub fn ErrorAlert(#[props(!optional)] message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            div { class: "alert-error", role: "alert", "{message}" }
        },
        None => rsx! {},
    }
}

/// Link to the spreadsheet a report was published to.
#[component]
pub fn SheetLink(#[props(!optional)] href: Option<String>) -> Element {
    let Some(href) = href.filter(|h| !h.trim().is_empty()) else {
        return rsx! {};
    };

    rsx! {
        p {
            a {
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                role: "button",
                class: "outline",
                "Open Google Sheet"
            }
        }
    }
}
