use dioxus::prelude::*;

use ui::components::ConsoleSidebar;
use ui::guard::{self, Access};
use ui::nav::NavTarget;
use ui::use_console;

use crate::Route;

fn target_route(target: NavTarget) -> Route {
    match target {
        NavTarget::Home => Route::Home {},
        NavTarget::Overview => Route::Overview {},
        NavTarget::Authors => Route::Authors {},
        NavTarget::Categories => Route::Categories {},
        NavTarget::MyLoans => Route::MyLoans {},
        NavTarget::MyFines => Route::MyFines {},
        NavTarget::Dashboard => Route::AdminDashboard {},
        NavTarget::ManageBooks => Route::ManageBooks {},
        NavTarget::ManageAuthors => Route::ManageAuthors {},
        NavTarget::ManageCategories => Route::ManageCategories {},
        NavTarget::ManageLoans => Route::ManageLoans {},
        NavTarget::ManageFines => Route::ManageFines {},
        NavTarget::ManageUsers => Route::ManageUsers {},
        NavTarget::Reports => Route::Reports {},
        NavTarget::Profile => Route::Profile {},
        NavTarget::Notifications => Route::Notifications {},
    }
}

/// The menu entry to highlight for the current route.
fn active_target(route: &Route) -> Option<NavTarget> {
    Some(match route {
        Route::Home {} | Route::BookDetail { .. } | Route::Borrow { .. } => NavTarget::Home,
        Route::Overview {} => NavTarget::Overview,
        Route::Authors {} | Route::AuthorDetail { .. } => NavTarget::Authors,
        Route::Categories {} | Route::CategoryDetail { .. } => NavTarget::Categories,
        Route::MyLoans {} => NavTarget::MyLoans,
        Route::MyFines {} => NavTarget::MyFines,
        Route::AdminDashboard {} => NavTarget::Dashboard,
        Route::ManageBooks {} => NavTarget::ManageBooks,
        Route::ManageAuthors {} => NavTarget::ManageAuthors,
        Route::ManageCategories {} => NavTarget::ManageCategories,
        Route::ManageLoans {} => NavTarget::ManageLoans,
        Route::ManageFines {} => NavTarget::ManageFines,
        Route::ManageUsers {} => NavTarget::ManageUsers,
        Route::Reports {} => NavTarget::Reports,
        Route::Profile {} | Route::ChangePassword {} => NavTarget::Profile,
        Route::Notifications {} => NavTarget::Notifications,
        _ => return None,
    })
}

/// Sidebar shell for every signed-in page.
#[component]
pub fn ConsoleLayout() -> Element {
    let console = use_console();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let session = console.session();
    if guard::check(&session, Access::SignedIn).is_some() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let on_logout = move |_| {
        spawn(async move {
            console.logout().await;
            nav.replace(Route::Login {});
        });
    };

    rsx! {
        div {
            class: "app-shell",
            ConsoleSidebar {
                role: session.role(),
                user: session.user.clone(),
                active: active_target(&route),
                on_navigate: move |target| {
                    nav.push(target_route(target));
                },
                on_logout,
            }
            main {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
