use serde::{Deserialize, Serialize};
use store::Role;

use super::user::{check_new_password, looks_like_email, User};
use crate::error::ApiError;

/// Body for `POST /login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ApiError::Invalid("Email and password are required".into()));
        }
        Ok(())
    }
}

/// Body for `POST /register`. New accounts are always members.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub role: Role,
}

impl Registration {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Invalid("Name is required".into()));
        }
        if !looks_like_email(&self.email) {
            return Err(ApiError::Invalid("Please enter a valid email address".into()));
        }
        if self.password != self.password_confirmation {
            return Err(ApiError::Invalid("Password confirmation does not match".into()));
        }
        check_new_password(&self.password, &self.password_confirmation)
    }
}

/// `POST /login` answer. The token may be named `access_token` or `token`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthResponse {
    pub fn bearer(&self) -> Option<&str> {
        super::first_filled([self.access_token.as_deref(), self.token.as_deref()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_prefers_access_token() {
        let response: AuthResponse = serde_json::from_str(
            r#"{"access_token": "a1", "token": "t1", "user": {"id": 1, "role": "admin"}}"#,
        )
        .unwrap();
        assert_eq!(response.bearer(), Some("a1"));
        let response: AuthResponse = serde_json::from_str(r#"{"token": "t1"}"#).unwrap();
        assert_eq!(response.bearer(), Some("t1"));
        assert!(response.user.is_none());
    }

    #[test]
    fn test_registration_serializes_member_role() {
        let registration = Registration {
            name: "Ana".into(),
            email: "ana@lib.io".into(),
            password: "password1".into(),
            password_confirmation: "password1".into(),
            role: Role::Member,
        };
        assert!(registration.validate().is_ok());
        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(json["role"], "member");
        assert_eq!(json["password_confirmation"], "password1");
    }

    #[test]
    fn test_registration_confirmation_mismatch() {
        let registration = Registration {
            name: "Ana".into(),
            email: "ana@lib.io".into(),
            password: "password1".into(),
            password_confirmation: "password2".into(),
            role: Role::Member,
        };
        assert_eq!(
            registration.validate(),
            Err(ApiError::Invalid("Password confirmation does not match".into()))
        );
    }
}
