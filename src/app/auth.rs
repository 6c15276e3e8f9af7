//! Authentication context.
//!
//! The session lives for the lifetime of the tab: it starts as
//! [`Session::Checking`], is resolved once by asking the backend who we are,
//! and afterwards only changes through an explicit login or logout.

use dioxus::prelude::*;
use reporter_wire::{User, UserStatus};
use thiserror::Error;
use tracing::{info, warn};

use crate::app::api::{self, ApiClient, ApiError, Transport};
use crate::app::Route;

/// Current session state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Waiting for the status endpoint
    #[default]
    Checking,
    SignedIn(User),
    SignedOut,
}

/// What a protected page should do for a given session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Pending,
    Allow,
    RedirectToLogin,
}

impl Session {
    /// Resolve a status check. Failures count as signed out.
    pub fn from_status(result: Result<UserStatus, ApiError>) -> Self {
        match result {
            Ok(status) => status
                .into_user()
                .map(Session::SignedIn)
                .unwrap_or(Session::SignedOut),
            Err(e) => {
                warn!("Failed to fetch user status: {}", e);
                Session::SignedOut
            }
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn guard(&self) -> Guard {
        match self {
            Session::Checking => Guard::Pending,
            Session::SignedIn(_) => Guard::Allow,
            Session::SignedOut => Guard::RedirectToLogin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Could not get authentication URL. Please try again.")]
    NoAuthUrl,
    #[error("Login failed: {0}")]
    Request(#[from] ApiError),
}

/// Ask the backend who is signed in.
pub async fn check_session<T: Transport>(client: &ApiClient<T>) -> Session {
    Session::from_status(client.user_status().await)
}

/// Fetch the identity provider URL the browser should be sent to.
pub async fn begin_login<T: Transport>(client: &ApiClient<T>) -> Result<String, LoginError> {
    let response = client.auth_url().await?;
    response
        .auth_url
        .filter(|url| !url.trim().is_empty())
        .ok_or(LoginError::NoAuthUrl)
}

/// End the backend session. The local session is cleared even when the
/// backend call fails.
pub async fn sign_out<T: Transport>(client: &ApiClient<T>) -> Session {
    match client.logout().await {
        Ok(_) => info!("Signed out"),
        Err(e) => warn!("Backend logout failed, clearing local session anyway: {}", e),
    }
    Session::SignedOut
}

/// What the OAuth callback page was handed by the backend redirect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    SignIn(User),
    Failed(String),
    /// Older backends send the raw authorization code instead
    Exchange(String),
    Missing,
}

pub fn callback_outcome(email: &str, error: &str, code: &str) -> CallbackOutcome {
    let (email, error, code) = (email.trim(), error.trim(), code.trim());
    if !error.is_empty() {
        CallbackOutcome::Failed(error.to_string())
    } else if !email.is_empty() {
        CallbackOutcome::SignIn(User::from_email(email))
    } else if !code.is_empty() {
        CallbackOutcome::Exchange(code.to_string())
    } else {
        CallbackOutcome::Missing
    }
}

/// Shared auth state, provided once at the app root.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: Signal<Session>,
}

impl AuthContext {
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    pub fn login(&self, user: User) {
        let mut session = self.session;
        info!(email = %user.email, "Signed in");
        session.set(Session::SignedIn(user));
    }

    /// Re-run the status check
    pub fn refresh(&self) {
        let mut session = self.session;
        spawn(async move {
            let next = match api::client() {
                Ok(client) => check_session(&client).await,
                Err(e) => Session::from_status(Err(e)),
            };
            session.set(next);
        });
    }

    /// Sign out and go to the login page
    pub fn logout(&self) {
        let mut session = self.session;
        let nav = navigator();
        spawn(async move {
            let next = match api::client() {
                Ok(client) => sign_out(&client).await,
                Err(e) => {
                    warn!("No API client for logout: {}", e);
                    Session::SignedOut
                }
            };
            session.set(next);
            nav.push(Route::Login {
                error: String::new(),
            });
        });
    }
}

/// Install the auth context and start the initial status check.
pub fn use_auth_provider() -> AuthContext {
    let auth = use_context_provider(|| AuthContext {
        session: Signal::new(Session::Checking),
    });

    // Effects only run in the browser, after hydration
    use_effect(move || auth.refresh());

    auth
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Renders its children only for a signed-in session; otherwise waits for
/// the status check or sends the user to `/login`.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();
    let nav = navigator();
    let guard = auth.session.read().guard();

    use_effect(move || {
        if auth.session.read().guard() == Guard::RedirectToLogin {
            nav.replace(Route::Login {
                error: String::new(),
            });
        }
    });

    match guard {
        Guard::Pending => rsx! {
            div { class: "card", aria_busy: "true", "Checking session..." }
        },
        Guard::Allow => rsx! {
            {children}
        },
        Guard::RedirectToLogin => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_per_session_state() {
        assert_eq!(Session::Checking.guard(), Guard::Pending);
        assert_eq!(Session::SignedOut.guard(), Guard::RedirectToLogin);
        assert_eq!(
            Session::SignedIn(User::from_email("a@b.io")).guard(),
            Guard::Allow
        );
    }

    #[test]
    fn test_status_error_means_signed_out() {
        let session = Session::from_status(Err(ApiError::Transport("offline".to_string())));
        assert_eq!(session, Session::SignedOut);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_status_with_email_signs_in() {
        let status = UserStatus {
            email: Some("a@b.io".to_string()),
            ..UserStatus::default()
        };
        let session = Session::from_status(Ok(status));
        assert_eq!(session.user().map(|u| u.email.as_str()), Some("a@b.io"));
    }

    #[test]
    fn test_callback_outcome_priority() {
        assert_eq!(
            callback_outcome("a@b.io", "access_denied", ""),
            CallbackOutcome::Failed("access_denied".to_string())
        );
        assert_eq!(
            callback_outcome(" a@b.io ", "", "code"),
            CallbackOutcome::SignIn(User::from_email("a@b.io"))
        );
        assert_eq!(
            callback_outcome("", "", "4/0Ab"),
            CallbackOutcome::Exchange("4/0Ab".to_string())
        );
        assert_eq!(callback_outcome("", " ", ""), CallbackOutcome::Missing);
    }
}
