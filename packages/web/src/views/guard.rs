//! Route guards. Each layout checks the session against an [`Access`] level
//! and either renders its outlet or replaces the route.

use dioxus::prelude::*;
use store::Role;
use ui::guard::{self, Access, Redirect};
use ui::use_console;

use crate::Route;

/// Landing route for a role.
pub(crate) fn home_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard {},
        Role::Member => Route::Home {},
    }
}

fn redirect_route(redirect: Redirect) -> Route {
    match redirect {
        Redirect::Login => Route::Login {},
        Redirect::Home(role) => home_route(role),
    }
}

#[component]
fn Guarded(access: Access) -> Element {
    let console = use_console();
    let nav = use_navigator();

    if let Some(redirect) = guard::check(&console.session(), access) {
        tracing::debug!("Access {access:?} denied, redirecting to {}", redirect.path());
        nav.replace(redirect_route(redirect));
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

/// Login, register and forgot-password: signed-in accounts go home.
#[component]
pub fn GuestLayout() -> Element {
    rsx! {
        Guarded { access: Access::Guest }
    }
}

#[component]
pub fn MemberGuard() -> Element {
    rsx! {
        Guarded { access: Access::Role(Role::Member) }
    }
}

#[component]
pub fn AdminGuard() -> Element {
    rsx! {
        Guarded { access: Access::Role(Role::Admin) }
    }
}

/// `/` goes to the role home, or to the login page.
#[component]
pub fn Root() -> Element {
    let console = use_console();
    let nav = use_navigator();

    let session = console.session();
    if session.is_authenticated() {
        nav.replace(home_route(session.role()));
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Page not found" }
                p { class: "auth-subtitle", "There is nothing at /{path}." }
                Link { class: "btn btn-primary", to: Route::Root {}, "Back to the library" }
            }
        }
    }
}
