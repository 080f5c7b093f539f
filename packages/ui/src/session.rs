//! Console context: the signed-in session, API client, configuration and
//! alert queue, provided once at the app root.
//!
//! Pages never touch the persisted token or user record directly. They read
//! the session through [`ConsoleContext`] and change it only through
//! [`ConsoleContext::sign_in`], [`ConsoleContext::sign_out`] and
//! [`ConsoleContext::reload_session`].
//!
//! The client is built with an unauthorized hook that resets the session
//! signal, so any `401` sends the guard layouts to the login page even when
//! the calling page ignores the error.

use api::{ApiError, LibraryClient};
use dioxus::prelude::*;
use store::{ConsoleConfig, Role, Session, SessionUser};

use crate::alert::{raise_alert, AlertLevel, AlertQueue};
use crate::platform::{make_client, make_session_repo};

pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

#[derive(Clone, Copy)]
pub struct ConsoleContext {
    client: Signal<LibraryClient>,
    config: Signal<ConsoleConfig>,
    pub session: Signal<Session>,
    pub alerts: Signal<AlertQueue>,
}

impl ConsoleContext {
    pub fn client(&self) -> LibraryClient {
        self.client.peek().clone()
    }

    pub fn config(&self) -> ConsoleConfig {
        self.config.peek().clone()
    }

    /// Reactive read; components re-render on sign-in and sign-out.
    pub fn session(&self) -> Session {
        (self.session)()
    }

    pub fn role(&self) -> Role {
        self.session.read().role()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.session.read().user.clone()
    }

    pub fn sign_in(&self, session: Session) {
        tracing::debug!("Session set for role {}", session.role());
        self.client.peek().session().save(&session);
        let mut signal = self.session;
        signal.set(session);
    }

    /// Clear the persisted session and the signal. Guard layouts redirect
    /// to the login page on the next render.
    pub fn sign_out(&self) {
        self.client.peek().session().clear();
        let mut signal = self.session;
        signal.set(Session::default());
    }

    /// `POST /logout`, then [`Self::sign_out`] whether or not the call worked.
    pub async fn logout(self) {
        if let Err(e) = self.client().logout().await {
            tracing::warn!("Logout request failed: {e}");
        }
        self.sign_out();
    }

    /// Re-read the persisted session after the client updated it.
    pub fn reload_session(&self) {
        let stored = self.client.peek().session().load();
        let mut signal = self.session;
        signal.set(stored);
    }

    pub fn alert(&self, level: AlertLevel, message: &str) {
        let mut alerts = self.alerts;
        raise_alert(&mut alerts, level, message);
    }

    /// A mutation failed: blocking alert with the server message or `fallback`.
    pub fn report_failure(&self, err: &ApiError, fallback: &str) {
        if err.is_unauthorized() {
            self.expire();
            return;
        }
        tracing::error!("{fallback}: {err}");
        self.alert(AlertLevel::Error, &err.user_message(fallback));
    }

    /// A page load failed: the message for the inline banner.
    pub fn load_error(&self, err: &ApiError, fallback: &str) -> String {
        if err.is_unauthorized() {
            self.expire();
        } else {
            tracing::error!("{fallback}: {err}");
        }
        err.user_message(fallback)
    }

    fn expire(&self) {
        self.client.peek().session().clear();
        expire_session(self.session, self.alerts);
    }
}

/// Drop a session the server rejected. Warns once: a session that is
/// already signed out gets no second alert.
pub fn apply_expiry(session: &mut Session, alerts: &mut AlertQueue) {
    if session.is_authenticated() {
        tracing::warn!("Session rejected by the server");
        alerts.push(AlertLevel::Warning, AlertLevel::Warning.title(), SESSION_EXPIRED);
    }
    *session = Session::default();
}

fn expire_session(mut session: Signal<Session>, mut alerts: Signal<AlertQueue>) {
    apply_expiry(&mut session.write(), &mut alerts.write());
}

pub fn use_console() -> ConsoleContext {
    use_context::<ConsoleContext>()
}

/// Wrap the router with this component to make [`use_console`] available.
#[component]
pub fn ConsoleProvider(config: ConsoleConfig, children: Element) -> Element {
    let context = use_hook(|| {
        let repo = make_session_repo();
        let session = Signal::new(repo.load());
        let alerts = Signal::new(AlertQueue::default());
        let client = make_client(&config, repo)
            .with_unauthorized_hook(move || expire_session(session, alerts));
        ConsoleContext {
            client: Signal::new(client),
            config: Signal::new(config.clone()),
            session,
            alerts,
        }
    });
    use_context_provider(|| context);
    use_context_provider(|| context.alerts);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use api::{ApiClient, StubTransport};
    use serde_json::json;
    use store::{MemoryStore, SessionRepository};

    use super::*;
    use crate::guard::{self, Access, Redirect};

    fn admin() -> Session {
        Session {
            token: Some("stale".into()),
            user: Some(SessionUser {
                role: Role::Admin,
                ..Default::default()
            }),
        }
    }

    #[tokio::test]
    async fn test_ignored_401_still_sends_admin_to_login() {
        let transport = StubTransport::new();
        let repo = SessionRepository::new(MemoryStore::new());
        repo.save(&admin());
        let state = Rc::new(RefCell::new((admin(), AlertQueue::default())));
        let hooked = state.clone();
        let client = ApiClient::new(transport.clone(), "http://api.test", repo.clone())
            .with_unauthorized_hook(move || {
                let (session, alerts) = &mut *hooked.borrow_mut();
                apply_expiry(session, alerts);
            });
        transport.respond(401, json!({ "message": "Unauthenticated." }));

        // The dashboard logs the failure and renders without a count
        let pending = client.pending_loans().await.ok().map(|loans| loans.len());
        assert_eq!(pending, None);

        let (session, alerts) = &*state.borrow();
        assert_eq!(guard::check(session, Access::Role(Role::Admin)), Some(Redirect::Login));
        assert_eq!(guard::check(&repo.load(), Access::SignedIn), Some(Redirect::Login));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts.current().map(|a| a.message.as_str()), Some(SESSION_EXPIRED));
    }

    #[test]
    fn test_expiry_warns_once() {
        let mut session = admin();
        let mut alerts = AlertQueue::default();
        apply_expiry(&mut session, &mut alerts);
        apply_expiry(&mut session, &mut alerts);
        assert_eq!(session, Session::default());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts.current().map(|a| a.level), Some(AlertLevel::Warning));
    }
}
