//! OAuth callback page.
//!
//! The backend finishes the Google handoff and redirects here with either
//! `?email=` (signed in), `?error=` (provider refused) or, on older
//! deployments, the raw `?code=` that still has to be exchanged.

use dioxus::prelude::*;
use reporter_wire::User;
use tracing::{error, info};

use crate::app::api;
use crate::app::auth::{callback_outcome, check_session, use_auth, CallbackOutcome, Session};
use crate::app::components::PageHead;
use crate::app::Route;

const FAILED: &str = "Authentication Failed";

/// Exchange an authorization code and return the resulting user.
async fn exchange_code(code: &str) -> Result<User, String> {
    let client = api::client().map_err(|e| e.to_string())?;
    let response = client.complete_oauth(code).await.map_err(|e| e.to_string())?;
    if let Some(message) = response.error {
        return Err(message);
    }

    match check_session(&client).await {
        Session::SignedIn(user) => Ok(user),
        _ => Err("Session was not established.".to_string()),
    }
}

#[component]
pub fn AuthCallback(email: String, error: String, code: String) -> Element {
    let auth = use_auth();
    let nav = navigator();
    let outcome = callback_outcome(&email, &error, &code);
    let mut failure = use_signal(|| match &outcome {
        CallbackOutcome::Failed(message) => Some(message.clone()),
        _ => None,
    });

    let pending = outcome.clone();
    use_effect(move || match pending.clone() {
        CallbackOutcome::SignIn(user) => {
            auth.login(user);
            nav.push(Route::CombinedReport {});
        }
        CallbackOutcome::Exchange(code) => {
            spawn(async move {
                match exchange_code(&code).await {
                    Ok(user) => {
                        info!(email = %user.email, "Authorization code exchanged");
                        auth.login(user);
                        nav.push(Route::CombinedReport {});
                    }
                    Err(message) => {
                        error!("Authorization code exchange failed: {}", message);
                        failure.set(Some(message));
                    }
                }
            });
        }
        CallbackOutcome::Missing => {
            error!("Authentication failed: callback carried no email, code or error");
            nav.push(Route::Login {
                error: FAILED.to_string(),
            });
        }
        CallbackOutcome::Failed(_) => {}
    });

    let body = match failure() {
        Some(message) => rsx! {
            div { class: "alert-error", role: "alert",
                strong { "{FAILED}" }
                p { "{message}" }
            }
            Link { to: Route::Login { error: String::new() }, "Back to Sign In" }
        },
        None => rsx! {
            p { aria_busy: "true", "Finalizing authentication..." }
        },
    };

    rsx! {
        PageHead { title: "Signing In".to_string() }
        main { class: "container centered",
            article { class: "card", {body} }
        }
    }
}
