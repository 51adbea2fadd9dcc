//! Session and user profile types.

use serde::{Deserialize, Serialize};

use crate::tokens::{AccessToken, RefreshToken};

/// The user profile returned by the auth endpoints.
///
/// The backend's profile shape varies by account type (student,
/// employee, other), so every known field is optional and unrecognized
/// fields are preserved round-trip. The session layer treats the whole
/// profile as an opaque blob; only display code reads individual fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An authenticated session: the pair of bearer credentials plus the
/// user profile issued alongside them.
///
/// Created on successful login, registration, or identity-provider
/// sign-in; the access token is replaced in place on refresh; the whole
/// session is destroyed on logout or irrecoverable refresh failure. The
/// session is owned by a [`CredentialStore`](crate::CredentialStore) -
/// the API client reads and writes it only through that interface.
#[derive(Debug, Clone)]
pub struct Session {
    pub access: AccessToken,
    pub refresh: RefreshToken,
    pub user: UserProfile,
}

impl Session {
    /// Assemble a session from an auth endpoint response.
    pub fn new(access: AccessToken, refresh: RefreshToken, user: UserProfile) -> Self {
        Self {
            access,
            refresh,
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_preserves_unknown_fields() {
        let value = json!({
            "email": "alice@lms.example.com",
            "name": "Alice Kumar",
            "user_type": "employee",
            "device_token_key": "abc123"
        });
        let profile: UserProfile = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(profile.email.as_deref(), Some("alice@lms.example.com"));
        assert_eq!(profile.user_type.as_deref(), Some("employee"));
        assert_eq!(
            profile.extra.get("device_token_key"),
            Some(&json!("abc123"))
        );

        let round_trip = serde_json::to_value(&profile).unwrap();
        assert_eq!(round_trip, value);
    }

    #[test]
    fn profile_tolerates_empty_object() {
        let profile: UserProfile = serde_json::from_value(json!({})).unwrap();
        assert!(profile.email.is_none());
        assert!(profile.extra.is_empty());
    }
}
