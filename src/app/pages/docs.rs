//! Static documentation page (public).

use dioxus::prelude::*;

use crate::app::components::{PageHead, ThemeToggle};
use crate::app::Route;

#[component]
pub fn Docs() -> Element {
    rsx! {
        PageHead { title: "Documentation".to_string() }
        header { class: "topbar",
            strong { "Google Binom Reporter" }
            div { style: "display:flex;gap:1rem;align-items:center;",
                Link { class: "secondary", to: Route::Login { error: String::new() }, "Go to Login Page" }
                ThemeToggle {}
            }
        }
        main { class: "container content",
            h1 { "Welcome to the Google Binom Reporter" }
            p {
                "This dashboard automates reporting by combining data from Google Ads and the Binom tracker."
            }
            hr {}
            h2 { "How to Get Started" }
            ol {
                li {
                    strong { "Login: " }
                    "Click "
                    strong { "Go to Login Page" }
                    " in the top right and sign in with your Google account. Reports require a signed-in session."
                }
                li {
                    strong { "Connect Accounts: " }
                    "Once signed in, the backend links your Google Ads manager (MCC) account and your Binom account."
                }
                li {
                    strong { "Generate Reports: " }
                    "Pick a date range and generate the combined, Binom or Google Ads report. Results can also be published to a Google Sheet."
                }
            }
            hr {}
            h2 { "Reports" }
            dl {
                dt { strong { "Combined Report" } }
                dd { "Google Ads spend joined with Binom revenue per campaign." }
                dt { strong { "Binom Report" } }
                dd { "Raw tracker statistics, filtered by traffic source, date type and timezone." }
                dt { strong { "Google Ads Report" } }
                dd { "Test query against the Google Ads API for one account, plus a manager account check." }
            }
            hr {}
            h2 { "Project Purpose" }
            p {
                "Marketing data lives in several systems. This dashboard brings it together for day to day performance analysis."
            }
        }
    }
}
