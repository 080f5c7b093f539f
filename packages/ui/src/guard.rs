//! Route access rules.
//!
//! Layout routes call [`check`] with the session and the access level of the
//! pages they wrap; a `Some(Redirect)` means the page must not render.

use store::{Role, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone.
    Public,
    /// Only signed-out visitors (login, register).
    Guest,
    /// Any signed-in account.
    SignedIn,
    /// Signed in with exactly this role.
    Role(Role),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    Login,
    /// The landing page for the given role.
    Home(Role),
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Login => "/login",
            Redirect::Home(role) => home_path(*role),
        }
    }
}

/// Where each role lands after sign-in.
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Member => "/home",
    }
}

pub fn check(session: &Session, access: Access) -> Option<Redirect> {
    let signed_in = session.is_authenticated();
    match access {
        Access::Public => None,
        Access::Guest if signed_in => Some(Redirect::Home(session.role())),
        Access::Guest => None,
        Access::SignedIn | Access::Role(_) if !signed_in => Some(Redirect::Login),
        Access::SignedIn => None,
        Access::Role(required) if session.role() != required => {
            Some(Redirect::Home(session.role()))
        }
        Access::Role(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::SessionUser;

    fn signed_in(role: Role) -> Session {
        Session {
            token: Some("t".into()),
            user: Some(SessionUser {
                role,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_signed_out_is_sent_to_login() {
        let session = Session::default();
        assert_eq!(check(&session, Access::SignedIn), Some(Redirect::Login));
        assert_eq!(check(&session, Access::Role(Role::Admin)), Some(Redirect::Login));
        assert_eq!(check(&session, Access::Role(Role::Member)), Some(Redirect::Login));
        assert_eq!(check(&session, Access::Guest), None);
        assert_eq!(check(&session, Access::Public), None);
    }

    #[test]
    fn test_member_on_admin_route_goes_home() {
        let redirect = check(&signed_in(Role::Member), Access::Role(Role::Admin));
        assert_eq!(redirect, Some(Redirect::Home(Role::Member)));
        assert_eq!(redirect.unwrap().path(), "/home");
    }

    #[test]
    fn test_admin_on_member_route_goes_to_admin() {
        let redirect = check(&signed_in(Role::Admin), Access::Role(Role::Member));
        assert_eq!(redirect.unwrap().path(), "/admin");
    }

    #[test]
    fn test_matching_role_and_shared_pages_render() {
        assert_eq!(check(&signed_in(Role::Admin), Access::Role(Role::Admin)), None);
        assert_eq!(check(&signed_in(Role::Member), Access::SignedIn), None);
        assert_eq!(check(&signed_in(Role::Admin), Access::SignedIn), None);
    }

    #[test]
    fn test_guest_pages_bounce_signed_in_accounts() {
        assert_eq!(
            check(&signed_in(Role::Admin), Access::Guest),
            Some(Redirect::Home(Role::Admin))
        );
    }

    #[test]
    fn test_token_without_user_is_a_member() {
        let session = Session {
            token: Some("t".into()),
            user: None,
        };
        assert_eq!(check(&session, Access::Role(Role::Member)), None);
        assert_eq!(
            check(&session, Access::Role(Role::Admin)),
            Some(Redirect::Home(Role::Member))
        );
    }
}
