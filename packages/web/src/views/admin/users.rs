use api::User;
use dioxus::prelude::*;
use store::Role;
use ui::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyRow, ErrorBanner, Loading, PageHeader, ResultCount,
    RoleBadge, SearchBox,
};
use ui::format::date;
use ui::table::TableState;
use ui::{use_console, AlertLevel};

#[component]
pub fn ManageUsers() -> Element {
    let console = use_console();
    let own_id = console.user().and_then(|u| u.id);
    let mut table = use_signal(TableState::<User>::default);
    let mut error = use_signal(|| Option::<String>::None);

    let mut loader = use_resource(move || async move {
        match console.client().admin_users().await {
            Ok(users) => {
                table.write().replace(users);
                error.set(None);
            }
            Err(e) => error.set(Some(console.load_error(&e, "Failed to load users"))),
        }
    });

    let mut change_role = move |id: u64, role: Role| {
        spawn(async move {
            match console.client().set_user_role(id, role).await {
                Ok(updated) => {
                    match updated.filter(|u| u.id != 0) {
                        Some(updated) => table.write().upsert(updated),
                        None => loader.restart(),
                    }
                    console.alert(
                        AlertLevel::Success,
                        &format!("Role changed to {}.", role.label()),
                    );
                }
                Err(e) => {
                    console.report_failure(&e, "Failed to change the role");
                    // Put the select back to the stored role.
                    loader.restart();
                }
            }
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(id) = table.write().take_pending_delete() else {
            return;
        };
        spawn(async move {
            let outcome = console.client().delete_user(id).await;
            let outcome = table.write().settle_delete(id, outcome);
            match outcome {
                Ok(()) => {
                    console.alert(AlertLevel::Success, "User deleted successfully.");
                }
                Err(e) => console.report_failure(&e, "Failed to delete the user"),
            }
        });
    };

    let body = if let Some(message) = error() {
        rsx! {
            ErrorBanner { message, on_retry: move |_| loader.restart() }
        }
    } else if loader.read().is_none() {
        rsx! {
            Loading { label: "Loading users..." }
        }
    } else {
        let state = table.read();
        let rows: Vec<User> = state.visible().into_iter().cloned().collect();
        rsx! {
            ResultCount { label: state.result_label() }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th { "Joined" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        EmptyRow { colspan: 5, message: "No users found." }
                    }
                    for user in rows {
                        tr {
                            key: "{user.id}",
                            td { strong { "{user.display_name()}" } }
                            td { "{user.email}" }
                            td { RoleBadge { role: user.role } }
                            td { "{date(user.created_at)}" }
                            td {
                                class: "row-actions",
                                select {
                                    class: "form-control form-control-sm",
                                    disabled: own_id == Some(user.id),
                                    onchange: move |evt: FormEvent| change_role(user.id, Role::from_name(&evt.value())),
                                    for role in [Role::Member, Role::Admin] {
                                        option {
                                            key: "{role.as_str()}",
                                            value: "{role.as_str()}",
                                            selected: role == user.role,
                                            "{role.label()}"
                                        }
                                    }
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    small: true,
                                    disabled: own_id == Some(user.id),
                                    onclick: move |_| table.write().request_delete(user.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    let pending_name = table
        .read()
        .pending_delete()
        .and_then(|id| table.read().get(id).map(|u| u.display_name().to_string()));

    rsx! {
        PageHeader { title: "Manage Users", subtitle: "Accounts and roles" }
        div {
            class: "toolbar",
            SearchBox {
                value: table.read().query().to_string(),
                placeholder: "Search by name, email or role...",
                on_search: move |q: String| table.write().set_query(q),
            }
        }
        {body}

        if let Some(name) = pending_name {
            ConfirmDialog {
                title: "Delete user",
                message: format!("Are you sure you want to delete {name}?"),
                confirm_label: "Delete",
                danger: true,
                on_confirm: confirm_delete,
                on_cancel: move |_| table.write().cancel_delete(),
            }
        }
    }
}

