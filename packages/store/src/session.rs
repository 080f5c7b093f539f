//! # Session model: who is signed in, and as what
//!
//! The console keeps exactly two pieces of persisted client state: the bearer
//! token and the signed-in user record. [`Session`] bundles both; [`Role`] is
//! the one field of the user record the UI branches on.
//!
//! ## Role shapes
//!
//! The backend has been observed to send the role either as a bare string
//! (`"role": "admin"`) or as an object (`"role": { "name": "admin" }`). Both
//! are accepted here so no call site ever has to unwrap the role again. The
//! comparison is case-insensitive; anything that is not `admin` (including a
//! missing role) is a [`Role::Member`]. Serialisation always writes the bare
//! string form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The two roles that gate navigation and route access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Member,
    Admin,
}

impl Role {
    /// Parse a role name, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::Member
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }

    /// Human label used in badges and selects.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoleRepr {
    Name(String),
    Object { name: Option<String> },
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = Option::<RoleRepr>::deserialize(deserializer)?;
        Ok(match repr {
            Some(RoleRepr::Name(name)) => Role::from_name(&name),
            Some(RoleRepr::Object { name: Some(name) }) => Role::from_name(&name),
            _ => Role::Member,
        })
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The persisted user record (a subset of the backend `User`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl SessionUser {
    /// Name, falling back to email.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Token and user as read from client storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    /// A session is authenticated as soon as it carries a token.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// The effective role. A token without a stored user counts as a member.
    pub fn role(&self) -> Role {
        self.user.as_ref().map(|u| u.role).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_bare_string() {
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
        let role: Role = serde_json::from_str("\"Member\"").unwrap();
        assert_eq!(role, Role::Member);
    }

    #[test]
    fn test_role_from_object() {
        let role: Role = serde_json::from_str(r#"{"id": 1, "name": "ADMIN"}"#).unwrap();
        assert_eq!(role, Role::Admin);
        let role: Role = serde_json::from_str(r#"{"name": "member"}"#).unwrap();
        assert_eq!(role, Role::Member);
    }

    #[test]
    fn test_missing_or_unknown_role_is_member() {
        let user: SessionUser =
            serde_json::from_str(r#"{"id": 3, "name": "Ana", "email": "a@x.io"}"#).unwrap();
        assert_eq!(user.role, Role::Member);

        let user: SessionUser =
            serde_json::from_str(r#"{"name": "Ana", "email": "a@x.io", "role": null}"#).unwrap();
        assert_eq!(user.role, Role::Member);

        assert_eq!(Role::from_name("librarian"), Role::Member);
    }

    #[test]
    fn test_role_serializes_as_bare_string() {
        let user = SessionUser {
            id: Some(1),
            name: "Root".into(),
            email: "root@lib.io".into(),
            role: Role::Admin,
            avatar: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "admin");
    }

    #[test]
    fn test_session_authentication_and_role() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), Role::Member);

        session.token = Some(String::new());
        assert!(!session.is_authenticated());

        session.token = Some("abc".into());
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Role::Member);

        session.user = Some(SessionUser {
            role: Role::Admin,
            ..Default::default()
        });
        assert_eq!(session.role(), Role::Admin);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = SessionUser {
            email: "m@lib.io".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "m@lib.io");
    }
}
