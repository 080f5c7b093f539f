use dioxus::prelude::*;
use store::Role;
use ui::components::{EmptyState, ErrorBanner, Loading, PageHeader};
use ui::format::today;
use ui::notifications::{admin_notices, member_notices, Notice};
use ui::use_console;

use crate::Route;

#[component]
pub fn Notifications() -> Element {
    let console = use_console();
    let nav = use_navigator();
    let role = console.role();

    let mut notices = use_resource(move || async move {
        let client = console.client();
        match role {
            Role::Admin => client
                .pending_loans()
                .await
                .map(|pending| admin_notices(&pending)),
            Role::Member => client
                .my_loans()
                .await
                .map(|loans| member_notices(&loans, today())),
        }
        .map_err(|e| console.load_error(&e, "Failed to load notifications"))
    });

    let open = move |_: ()| match role {
        Role::Admin => {
            nav.push(Route::ManageLoans {});
        }
        Role::Member => {
            nav.push(Route::MyLoans {});
        }
    };

    let content = match &*notices.read() {
        None => rsx! {
            Loading { label: "Loading notifications..." }
        },
        Some(Err(message)) => rsx! {
            ErrorBanner { message: message.clone(), on_retry: move |_| notices.restart() }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState { message: "You're all caught up." }
        },
        Some(Ok(list)) => rsx! {
            ul {
                class: "notice-list",
                for notice in list.iter().cloned() {
                    NoticeItem { key: "{notice.kind:?}-{notice.loan_id}", notice: notice.clone(), on_open: open }
                }
            }
        },
    };

    rsx! {
        PageHeader { title: "Notifications" }
        {content}
    }
}

#[component]
fn NoticeItem(notice: Notice, on_open: EventHandler<()>) -> Element {
    rsx! {
        li {
            class: "notice {notice.kind.css_class()} clickable",
            onclick: move |_| on_open.call(()),
            strong { "{notice.title}" }
            p { "{notice.message}" }
        }
    }
}
