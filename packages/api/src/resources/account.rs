use store::Session;

use crate::client::ApiClient;
use crate::envelope::{self, USERS};
use crate::error::ApiError;
use crate::models::{AuthResponse, Credentials, PasswordChange, ProfileUpdate, Registration, User};
use crate::transport::Transport;

impl<T: Transport> ApiClient<T> {
    /// Sign in and persist the token and user record.
    ///
    /// Returns the session as stored, so the caller can route by role.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        credentials.validate()?;
        // A leftover token would turn a wrong password into an expired session
        self.session().clear();
        let body = self.post_json("/login", credentials).await?;
        let response: AuthResponse = serde_json::from_value(body)?;

        let token = response
            .bearer()
            .ok_or_else(|| ApiError::Decode("login response carried no token".into()))?;
        self.session().save_token(token);
        if let Some(user) = &response.user {
            self.session().save_user(&user.to_session_user());
        }
        tracing::info!(
            "Signed in as {}",
            response.user.as_ref().map(User::display_name).unwrap_or("unknown user")
        );
        Ok(self.session().load())
    }

    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        registration.validate()?;
        self.post_json("/register", registration).await?;
        Ok(())
    }

    /// Tell the backend to revoke the token. The stored session is left to
    /// the caller, which clears it whatever this returns.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post("/logout").await?;
        Ok(())
    }

    /// The signed-in account. Refreshes the stored user record.
    pub async fn me(&self) -> Result<User, ApiError> {
        let body = self.get("/me").await?;
        let user: User = envelope::record(&body, USERS)?;
        let mut stored = user.to_session_user();
        if !carries_role(&body) {
            stored.role = self.session().user().unwrap_or_default().role;
        }
        self.session().save_user(&stored);
        Ok(user)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        update.validate()?;
        let body = self.put_json("/profile", update).await?;
        let mut user: User = envelope::record(&body, USERS).unwrap_or_default();
        if user.name.trim().is_empty() {
            user.name = update.name.clone();
        }
        if user.email.trim().is_empty() {
            user.email = update.email.clone();
        }
        // Keep role and id from the stored record when the answer omits them
        let mut stored = self.session().user().unwrap_or_default();
        stored.name = user.name.clone();
        stored.email = user.email.clone();
        if user.id != 0 {
            stored.id = Some(user.id);
        }
        if carries_role(&body) {
            stored.role = user.role;
        } else {
            user.role = stored.role;
        }
        if user.avatar.is_some() {
            stored.avatar = user.avatar.clone();
        }
        self.session().save_user(&stored);
        Ok(user)
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        change.validate()?;
        self.put_json("/profile", change).await?;
        Ok(())
    }
}

/// Whether the user record in `body` states a role. `User::role` falls back
/// to member when the key is missing, which must not demote the session.
fn carries_role(body: &serde_json::Value) -> bool {
    envelope::record_value(body, USERS)
        .get("role")
        .is_some_and(|role| !role.is_null())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::{MemoryStore, Role, SessionRepository, SessionUser};

    use super::*;
    use crate::stub::StubTransport;
    use crate::transport::{Method, Payload};

    fn client() -> (ApiClient<StubTransport>, StubTransport, SessionRepository) {
        let transport = StubTransport::new();
        let session = SessionRepository::new(MemoryStore::new());
        let client = ApiClient::new(transport.clone(), "http://api.test", session.clone());
        (client, transport, session)
    }

    #[tokio::test]
    async fn test_login_persists_token_and_role() {
        let (client, transport, session) = client();
        transport.respond(
            200,
            json!({ "access_token": "abc", "user": { "id": 1, "name": "Root", "email": "r@lib.io",
                    "role": { "name": "admin" } } }),
        );

        let signed_in = client
            .login(&Credentials {
                email: "r@lib.io".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();

        assert_eq!(signed_in.role(), Role::Admin);
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(session.user().unwrap().name, "Root");
        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://api.test/login");
        assert_eq!(
            request.payload,
            Payload::Json(json!({ "email": "r@lib.io", "password": "secret" }))
        );
    }

    #[tokio::test]
    async fn test_login_failure_keeps_signed_out() {
        let (client, transport, session) = client();
        transport.respond(422, json!({ "message": "Invalid credentials" }));
        let err = client
            .login(&Credentials {
                email: "x@lib.io".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.user_message("Login failed. Please try again."), "Invalid credentials");
        assert!(!session.load().is_authenticated());
    }

    #[tokio::test]
    async fn test_wrong_password_shows_server_message() {
        let (client, transport, session) = client();
        // Leftover token from an earlier session
        session.save_token("old");
        transport.respond(401, json!({ "message": "Invalid credentials" }));

        let err = client
            .login(&Credentials {
                email: "x@lib.io".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.user_message("Login failed. Please try again."), "Invalid credentials");
        assert!(!err.is_unauthorized());
        assert_eq!(transport.last_request().unwrap().bearer, None);
        assert!(!session.load().is_authenticated());
    }

    #[tokio::test]
    async fn test_register_is_validated_before_sending() {
        let (client, transport, _) = client();
        let err = client
            .register(&Registration {
                name: "Ana".into(),
                email: "ana@lib.io".into(),
                password: "short".into(),
                password_confirmation: "short".into(),
                role: Role::Member,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_profile_update_keeps_stored_role() {
        let (client, transport, session) = client();
        session.save_token("t");
        session.save_user(&SessionUser {
            id: Some(3),
            name: "Old".into(),
            email: "old@lib.io".into(),
            role: Role::Admin,
            avatar: None,
        });
        transport.respond(200, json!({ "message": "Profile updated" }));

        client
            .update_profile(&ProfileUpdate {
                name: "New".into(),
                email: "new@lib.io".into(),
            })
            .await
            .unwrap();

        let stored = session.user().unwrap();
        assert_eq!(stored.name, "New");
        assert_eq!(stored.role, Role::Admin);
        assert_eq!(stored.id, Some(3));
        assert_eq!(transport.last_request().unwrap().method, Method::Put);
    }

    #[tokio::test]
    async fn test_profile_answer_without_role_keeps_admin() {
        let (client, transport, session) = client();
        session.save_token("t");
        session.save_user(&SessionUser {
            id: Some(3),
            name: "Old".into(),
            email: "old@lib.io".into(),
            role: Role::Admin,
            avatar: None,
        });
        transport.respond(200, json!({ "user": { "id": 3, "name": "New", "email": "n@l.io" } }));

        let user = client
            .update_profile(&ProfileUpdate {
                name: "New".into(),
                email: "n@l.io".into(),
            })
            .await
            .unwrap();

        assert_eq!(user.role, Role::Admin);
        let stored = session.user().unwrap();
        assert_eq!(stored.role, Role::Admin);
        assert_eq!(stored.email, "n@l.io");
    }

    #[tokio::test]
    async fn test_profile_answer_with_role_is_trusted() {
        let (client, transport, session) = client();
        session.save_token("t");
        session.save_user(&SessionUser {
            id: Some(3),
            role: Role::Admin,
            ..Default::default()
        });
        transport.respond(
            200,
            json!({ "user": { "id": 3, "name": "New", "email": "n@l.io", "role": "member" } }),
        );

        client
            .update_profile(&ProfileUpdate {
                name: "New".into(),
                email: "n@l.io".into(),
            })
            .await
            .unwrap();

        assert_eq!(session.user().unwrap().role, Role::Member);
    }

    #[tokio::test]
    async fn test_me_accepts_wrapped_user() {
        let (client, transport, session) = client();
        transport.respond(200, json!({ "user": { "id": 5, "name": "Sari", "role": "member" } }));
        let user = client.me().await.unwrap();
        assert_eq!(user.id, 5);
        assert_eq!(session.user().unwrap().name, "Sari");
    }
}
