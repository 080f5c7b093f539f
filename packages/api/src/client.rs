//! # ApiClient: the one door to the backend
//!
//! Every endpoint group in [`crate::resources`] is an `impl` block on
//! [`ApiClient`]; they all funnel through [`ApiClient::send`], which owns the
//! cross-cutting behaviour:
//!
//! 1. Join the base URL and the endpoint path.
//! 2. Attach `Authorization: Bearer <token>` when the session store has one.
//! 3. On `401` for a request that carried a token, clear the stored session,
//!    fire the unauthorized hook and return [`ApiError::Unauthorized`].
//! 4. On any other non-2xx, return [`ApiError::Status`] with the server message.
//!    A `401` without a token (a rejected sign-in) lands here too.
//! 5. On success, persist a top-level `token` if the body carries one.
//!
//! The hook is how the UI learns about an expired session no matter which
//! page made the call or what that page does with the error.

use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;
use store::SessionRepository;

use crate::envelope;
use crate::error::ApiError;
use crate::transport::{ApiRequest, FormField, Method, Payload, Transport};

#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    session: SessionRepository,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl<T> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .field("on_unauthorized", &self.on_unauthorized.is_some())
            .finish()
    }
}

impl<T> PartialEq for ApiClient<T> {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>, session: SessionRepository) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            session,
            on_unauthorized: None,
        }
    }

    /// Run `hook` after every `401` that cleared the stored session.
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The persisted session this client reads its token from.
    pub fn session(&self) -> &SessionRepository {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn send(&self, method: Method, path: &str, payload: Payload) -> Result<Value, ApiError> {
        let bearer = self.session.token();
        let had_token = bearer.is_some();
        let request = ApiRequest {
            method,
            url: self.url(path),
            bearer,
            payload,
        };
        tracing::debug!("{} {}", method.as_str(), request.url);

        let response = self.transport.execute(request).await.inspect_err(|e| {
            tracing::error!("{} {path} failed: {e}", method.as_str());
        })?;

        if response.status == 401 && had_token {
            tracing::warn!("{} {path} answered 401, clearing session", method.as_str());
            self.session.clear();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ApiError::Unauthorized);
        }
        if !response.is_success() {
            let message = envelope::error_message(&response.body);
            tracing::error!(
                "{} {path} answered {}: {}",
                method.as_str(),
                response.status,
                message.as_deref().unwrap_or("no message")
            );
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        if let Some(token) = envelope::token(&response.body) {
            self.session.save_token(token);
        }
        Ok(response.body)
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::Get, path, Payload::Empty).await
    }

    pub async fn post(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::Post, path, Payload::Empty).await
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.send(Method::Post, path, Payload::Json(to_json(body)?)).await
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.send(Method::Put, path, Payload::Json(to_json(body)?)).await
    }

    pub async fn post_form(&self, path: &str, fields: Vec<FormField>) -> Result<Value, ApiError> {
        self.send(Method::Post, path, Payload::Multipart(fields)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::Delete, path, Payload::Empty).await
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Invalid(format!("cannot encode request: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::StubTransport;
    use serde_json::json;
    use std::cell::Cell;
    use store::{MemoryStore, Role, Session, SessionUser};

    fn client() -> (ApiClient<StubTransport>, StubTransport, SessionRepository) {
        let transport = StubTransport::new();
        let session = SessionRepository::new(MemoryStore::new());
        let client = ApiClient::new(transport.clone(), "http://localhost:8000/api/", session.clone());
        (client, transport, session)
    }

    #[tokio::test]
    async fn test_bearer_token_and_url_join() {
        let (client, transport, session) = client();
        session.save_token("tok-1");
        transport.respond(200, json!([]));

        client.get("/books").await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://localhost:8000/api/books");
        assert_eq!(request.bearer.as_deref(), Some("tok-1"));
        assert_eq!(request.method, Method::Get);
    }

    #[tokio::test]
    async fn test_no_bearer_when_signed_out() {
        let (client, transport, _) = client();
        client.get("books").await.unwrap();
        assert_eq!(transport.last_request().unwrap().bearer, None);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session() {
        let (client, transport, session) = client();
        session.save(&Session {
            token: Some("stale".into()),
            user: Some(SessionUser {
                role: Role::Admin,
                ..Default::default()
            }),
        });
        transport.respond(401, json!({ "message": "Unauthenticated." }));

        let err = client.get("/admin/books").await.unwrap_err();

        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(session.load(), Session::default());
    }

    #[tokio::test]
    async fn test_unauthorized_fires_hook_once_per_401() {
        let (client, transport, session) = client();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let client = client.with_unauthorized_hook(move || counter.set(counter.get() + 1));
        session.save_token("stale");
        transport.respond(401, json!({ "message": "Unauthenticated." }));
        transport.respond(200, json!([]));

        // The caller ignores the error; the hook still ran
        let _ = client.get("/admin/loans/pending").await;
        assert_eq!(fired.get(), 1);
        assert_eq!(session.token(), None);

        client.get("/books").await.unwrap();
        assert_eq!(fired.get(), 1);
    }

    #[tokio::test]
    async fn test_401_without_token_keeps_server_message() {
        let (client, transport, _) = client();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let client = client.with_unauthorized_hook(move || flag.set(true));
        transport.respond(401, json!({ "message": "Invalid credentials" }));

        let err = client.post_json("/login", &json!({})).await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 401,
                message: Some("Invalid credentials".into())
            }
        );
        assert!(!fired.get());
    }

    #[tokio::test]
    async fn test_error_status_carries_server_message() {
        let (client, transport, session) = client();
        session.save_token("tok");
        transport.respond(422, json!({ "errors": { "isbn": ["The isbn has already been taken."] } }));

        let err = client.post_json("/admin/books", &json!({})).await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 422,
                message: Some("The isbn has already been taken.".into())
            }
        );
        assert_eq!(session.token().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_response_token_is_persisted() {
        let (client, transport, session) = client();
        transport.respond(200, json!({ "token": "fresh", "user": {} }));
        client.get("/me").await.unwrap();
        assert_eq!(session.token().as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_returned() {
        let (client, transport, _) = client();
        transport.fail(ApiError::Transport("connection refused".into()));
        let err = client.get("/books").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
