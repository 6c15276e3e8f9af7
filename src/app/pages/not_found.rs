use dioxus::prelude::*;

use crate::app::components::PageHead;
use crate::app::Route;

/// Fallback for unknown paths
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        PageHead { title: "Not Found".to_string() }
        main { class: "container centered",
            article { class: "card",
                h1 { "404" }
                p { "Nothing lives at " code { "{path}" } "." }
                Link { to: Route::CombinedReport {}, "Back to reports" }
            }
        }
    }
}
