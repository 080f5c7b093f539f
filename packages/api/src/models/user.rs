use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use store::{Role, SessionUser};

use super::de;
use crate::error::ApiError;

pub const MIN_PASSWORD_LEN: usize = 8;

/// An account as listed by `/admin/users` or returned by `/me`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "de::u64_or_zero")]
    pub id: u64,
    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "de::opt_date")]
    pub created_at: Option<NaiveDate>,
}

impl User {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// The subset persisted as the session's user record.
    pub fn to_session_user(&self) -> SessionUser {
        SessionUser {
            id: (self.id != 0).then_some(self.id),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            avatar: self.avatar.clone(),
        }
    }
}

/// Body for `PUT /profile` when editing name and email.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Invalid("Name is required".into()));
        }
        if !looks_like_email(&self.email) {
            return Err(ApiError::Invalid("Please enter a valid email address".into()));
        }
        Ok(())
    }
}

/// Body for `PUT /profile` when changing the password.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PasswordChange {
    pub password: String,
    pub password_confirmation: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), ApiError> {
        check_new_password(&self.password, &self.password_confirmation)
    }
}

/// Shared rule for registration and password change: confirmation first,
/// then length.
pub fn check_new_password(password: &str, confirmation: &str) -> Result<(), ApiError> {
    if password != confirmation {
        return Err(ApiError::Invalid("New passwords do not match!".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::Invalid(
            "Password must be at least 8 characters long!".into(),
        ));
    }
    Ok(())
}

pub(crate) fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_with_object_role() {
        let user: User = serde_json::from_str(
            r#"{"id": 2, "name": "Budi", "email": "b@lib.io", "role": {"id": 1, "name": "Admin"},
                "created_at": "2025-01-05T08:00:00.000000Z"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.created_at, NaiveDate::from_ymd_opt(2025, 1, 5));
        let session_user = user.to_session_user();
        assert_eq!(session_user.id, Some(2));
        assert_eq!(session_user.role, Role::Admin);
    }

    #[test]
    fn test_password_rules() {
        let change = PasswordChange {
            password: "secret123".into(),
            password_confirmation: "secret124".into(),
        };
        assert_eq!(
            change.validate(),
            Err(ApiError::Invalid("New passwords do not match!".into()))
        );
        let change = PasswordChange {
            password: "short".into(),
            password_confirmation: "short".into(),
        };
        assert!(change.validate().is_err());
        let change = PasswordChange {
            password: "longenough".into(),
            password_confirmation: "longenough".into(),
        };
        assert!(change.validate().is_ok());
    }

    #[test]
    fn test_profile_validation() {
        let mut update = ProfileUpdate {
            name: "Budi".into(),
            email: "budi@lib.io".into(),
        };
        assert!(update.validate().is_ok());
        update.email = "budi".into();
        assert!(update.validate().is_err());
        update.email = "budi@lib.io".into();
        update.name = " ".into();
        assert!(update.validate().is_err());
    }
}
