//! Sign-in page.

use dioxus::prelude::*;
use tracing::error;

use crate::app::api;
use crate::app::auth::{begin_login, LoginError};
use crate::app::browser;
use crate::app::components::{ErrorAlert, PageHead};
use crate::app::Route;

/// `/login?error=...`
#[component]
pub fn Login(error: String) -> Element {
    let mut redirecting = use_signal(|| false);
    let mut login_error = use_signal(|| None::<String>);
    let query_error = Some(error).filter(|e| !e.trim().is_empty());

    let sign_in = move |_| {
        redirecting.set(true);
        login_error.set(None);
        spawn(async move {
            let result = match api::client() {
                Ok(client) => begin_login(&client).await,
                Err(e) => Err(LoginError::from(e)),
            };
            match result {
                Ok(url) => browser::redirect(&url),
                Err(e) => {
                    error!("Login failed: {}", e);
                    login_error.set(Some(e.to_string()));
                    redirecting.set(false);
                }
            }
        });
    };

    let shown_error = login_error.read().clone().or(query_error);

    rsx! {
        PageHead { title: "Sign In".to_string() }
        main { class: "container centered",
            article { class: "card",
                h1 { "Sign In" }
                p { small { "Google Binom Reporter" } }
                ErrorAlert { message: shown_error }
                button {
                    class: "google-button",
                    disabled: redirecting(),
                    aria_busy: if redirecting() { "true" } else { "false" },
                    onclick: sign_in,
                    if redirecting() { "Redirecting..." } else { "Sign In with Google" }
                }
                p {
                    Link { to: Route::Docs {}, "Documentation" }
                }
            }
        }
    }
}
