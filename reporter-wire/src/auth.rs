//! OAuth handoff and session payloads.

use serde::{Deserialize, Serialize};

/// Signed-in user as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl User {
    /// User known only by email (the OAuth callback carries nothing else)
    pub fn from_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: None,
            last_name: None,
        }
    }

    /// Full name when the backend supplied one, otherwise the email.
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }
}

/// Response of the user status endpoint.
///
/// Two shapes are in use: `{ "isAuthenticated": bool, "user": {..} }` and the
/// bare `{ "email": ".." }` returned once a session exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStatus {
    #[serde(rename = "isAuthenticated", default, skip_serializing_if = "Option::is_none")]
    pub is_authenticated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserStatus {
    /// Status reported for an anonymous session.
    pub fn unauthenticated() -> Self {
        Self {
            is_authenticated: Some(false),
            user: None,
            email: None,
        }
    }

    /// The signed-in user, if the status describes one.
    pub fn into_user(self) -> Option<User> {
        if self.is_authenticated == Some(false) {
            return None;
        }
        self.user.or_else(|| {
            self.email
                .filter(|email| !email.trim().is_empty())
                .map(User::from_email)
        })
    }
}

/// Response of the OAuth URL endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUrlResponse {
    #[serde(default)]
    pub auth_url: Option<String>,
}

/// Response of the OAuth completion endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallbackResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of the logout endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_with_user_object() {
        let status: UserStatus = serde_json::from_str(
            r#"{"isAuthenticated": true, "user": {"email": "ana@example.com", "first_name": "Ana", "last_name": "Silva"}}"#,
        )
        .unwrap();

        let user = status.into_user().unwrap();
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.display_name(), "Ana Silva");
    }

    #[test]
    fn test_status_with_bare_email() {
        let status: UserStatus = serde_json::from_str(r#"{"email": "ops@example.com"}"#).unwrap();
        assert_eq!(status.into_user(), Some(User::from_email("ops@example.com")));
    }

    #[test]
    fn test_explicit_unauthenticated_wins_over_user() {
        let status: UserStatus = serde_json::from_str(
            r#"{"isAuthenticated": false, "user": {"email": "stale@example.com"}}"#,
        )
        .unwrap();
        assert_eq!(status.into_user(), None);
        assert_eq!(UserStatus::unauthenticated().into_user(), None);
    }

    #[test]
    fn test_blank_email_is_not_a_user() {
        let status: UserStatus = serde_json::from_str(r#"{"email": "  "}"#).unwrap();
        assert_eq!(status.into_user(), None);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User {
            email: "x@example.com".to_string(),
            first_name: Some(" ".to_string()),
            last_name: None,
        };
        assert_eq!(user.display_name(), "x@example.com");
    }

    #[test]
    fn test_auth_url_missing_field() {
        let resp: AuthUrlResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.auth_url.is_none());
    }
}
