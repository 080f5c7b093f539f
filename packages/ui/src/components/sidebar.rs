use dioxus::prelude::*;
use store::{Role, SessionUser};

use super::badges::RoleBadge;
use super::modal::ConfirmDialog;
use crate::icons::{
    FaBell, FaBook, FaBookOpen, FaChartPie, FaFeather, FaFileLines, FaGauge, FaHouse, FaMoneyBill,
    FaRightFromBracket, FaRightLeft, FaTags, FaUser, FaUsers,
};
use crate::nav::{menu_for, sidebar_title, NavIcon, NavTarget};
use crate::Icon;

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx! { Icon { icon: FaHouse, width: 14, height: 14 } },
        NavIcon::Chart => rsx! { Icon { icon: FaChartPie, width: 14, height: 14 } },
        NavIcon::Feather => rsx! { Icon { icon: FaFeather, width: 14, height: 14 } },
        NavIcon::Tags => rsx! { Icon { icon: FaTags, width: 14, height: 14 } },
        NavIcon::Book => rsx! { Icon { icon: FaBook, width: 14, height: 14 } },
        NavIcon::Money => rsx! { Icon { icon: FaMoneyBill, width: 14, height: 14 } },
        NavIcon::Gauge => rsx! { Icon { icon: FaGauge, width: 14, height: 14 } },
        NavIcon::Exchange => rsx! { Icon { icon: FaRightLeft, width: 14, height: 14 } },
        NavIcon::Users => rsx! { Icon { icon: FaUsers, width: 14, height: 14 } },
        NavIcon::File => rsx! { Icon { icon: FaFileLines, width: 14, height: 14 } },
        NavIcon::User => rsx! { Icon { icon: FaUser, width: 14, height: 14 } },
        NavIcon::Bell => rsx! { Icon { icon: FaBell, width: 14, height: 14 } },
    }
}

/// Role-filtered navigation. Routing stays with the caller: clicks are
/// reported as [`NavTarget`]s.
#[component]
pub fn ConsoleSidebar(
    role: Role,
    user: Option<SessionUser>,
    active: Option<NavTarget>,
    on_navigate: EventHandler<NavTarget>,
    on_logout: EventHandler<()>,
) -> Element {
    let mut confirm_logout = use_signal(|| false);
    let sections = menu_for(role);

    rsx! {
        aside {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                Icon { icon: FaBookOpen, width: 20, height: 20 }
                span { "{sidebar_title(role)}" }
            }

            if let Some(ref u) = user {
                div {
                    class: "sidebar-user",
                    span { class: "sidebar-user-name", "{u.display_name()}" }
                    RoleBadge { role }
                }
            }

            nav {
                class: "sidebar-nav",
                for section in sections {
                    div {
                        key: "{section.title}",
                        class: "sidebar-section",
                        p { class: "sidebar-section-title", "{section.title}" }
                        for item in section.items {
                            button {
                                key: "{item.label}-{item.target:?}",
                                class: if active == Some(item.target) { "sidebar-link active" } else { "sidebar-link" },
                                onclick: move |_| on_navigate.call(item.target),
                                NavGlyph { icon: item.icon }
                                span { "{item.label}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                button {
                    class: "sidebar-link logout",
                    onclick: move |_| confirm_logout.set(true),
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    span { "Log out" }
                }
            }
        }

        if confirm_logout() {
            ConfirmDialog {
                title: "Log out",
                message: "Are you sure you want to log out?",
                confirm_label: "Log out",
                on_confirm: move |_| {
                    confirm_logout.set(false);
                    on_logout.call(());
                },
                on_cancel: move |_| confirm_logout.set(false),
            }
        }
    }
}
