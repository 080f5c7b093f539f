//! Loan management: every loan, the pending-request queue, and the
//! approve/reject/return/extend actions.

use api::resources::admin::DEFAULT_EXTENSION_DAYS;
use api::{Book, Loan, LoanStatus, User};
use dioxus::prelude::*;
use store::Role;
use ui::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyRow, ErrorBanner, Field, Input, LoanStatusBadge,
    Loading, Modal, PageHeader, PromptDialog, ResultCount, SearchBox, Select, StandingBadge,
};
use ui::format::{date, today};
use ui::forms::{parse_extension_days, LoanForm};
use ui::table::TableState;
use ui::{use_console, AlertLevel};

use super::{select_options, Editing};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    All,
    Pending,
}

/// A row action waiting for confirmation or input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoanAction {
    Approve(u64),
    Reject(u64),
    Return(u64),
    Extend(u64),
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab active"
    } else {
        "tab"
    }
}

#[component]
pub fn ManageLoans() -> Element {
    let console = use_console();
    let mut tab = use_signal(|| Tab::All);
    let mut table = use_signal(TableState::<Loan>::default);
    let mut pending = use_signal(Vec::<Loan>::new);
    let mut users = use_signal(Vec::<User>::new);
    let mut books = use_signal(Vec::<Book>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut form = use_signal(LoanForm::default);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut action = use_signal(|| Option::<LoanAction>::None);

    let mut loader = use_resource(move || async move {
        let client = console.client();
        match client.admin_loans().await {
            Ok(loans) => {
                table.write().replace(loans);
                error.set(None);
            }
            Err(e) => {
                error.set(Some(console.load_error(&e, "Failed to load loans")));
                return;
            }
        }
        match client.pending_loans().await {
            Ok(list) => pending.set(list),
            Err(e) => {
                tracing::warn!("Pending loans unavailable, filtering locally: {e}");
                let local = table
                    .peek()
                    .items()
                    .iter()
                    .filter(|l| l.status == LoanStatus::Pending)
                    .cloned()
                    .collect();
                pending.set(local);
            }
        }
        match client.admin_users().await {
            Ok(list) => users.set(list),
            Err(e) => tracing::warn!("User list unavailable: {e}"),
        }
        match client.admin_books().await {
            Ok(list) => books.set(list),
            Err(e) => tracing::warn!("Book list unavailable: {e}"),
        }
    });

    let period = console.config().loans.period_days;
    let mut open_editor = move |target: Editing| {
        let initial = match target {
            Editing::New => LoanForm::new(today(), period),
            Editing::Existing(id) => table
                .read()
                .get(id)
                .map(LoanForm::from_loan)
                .unwrap_or_else(|| LoanForm::new(today(), period)),
        };
        form.set(initial);
        form_error.set(None);
        editing.set(Some(target));
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(target) = editing() else {
            return;
        };
        let payload = match form.read().payload() {
            Ok(payload) => payload,
            Err(e) => {
                form_error.set(Some(e.user_message("Please check the form")));
                return;
            }
        };
        spawn(async move {
            saving.set(true);
            match console.client().save_loan(target.id(), &payload).await {
                Ok(_) => {
                    editing.set(None);
                    let message = match target {
                        Editing::New => "Loan created successfully.",
                        Editing::Existing(_) => "Loan updated successfully.",
                    };
                    console.alert(AlertLevel::Success, message);
                    loader.restart();
                }
                Err(e) => console.report_failure(&e, "Failed to save the loan"),
            }
            saving.set(false);
        });
    };

    // Runs the confirmed action; `input` is the prompt answer, if any.
    let mut run_action = move |input: String| {
        let Some(current) = action() else {
            return;
        };
        action.set(None);
        spawn(async move {
            let client = console.client();
            let outcome = match current {
                LoanAction::Approve(id) => client
                    .approve_loan(id)
                    .await
                    .map(|_| "Loan request approved.".to_string())
                    .map_err(|e| (e, "Failed to approve the loan")),
                LoanAction::Reject(id) => client
                    .reject_loan(id, &input)
                    .await
                    .map(|_| "Loan request rejected.".to_string())
                    .map_err(|e| (e, "Failed to reject the loan")),
                LoanAction::Return(id) => client
                    .return_loan(id)
                    .await
                    .map(|_| "Book marked as returned.".to_string())
                    .map_err(|e| (e, "Failed to return the book")),
                LoanAction::Extend(id) => match parse_extension_days(&input) {
                    Ok(days) => client
                        .extend_loan(id, days)
                        .await
                        .map(|_| format!("Loan extended by {days} day(s)."))
                        .map_err(|e| (e, "Failed to extend the loan")),
                    Err(e) => Err((e, "Please enter a valid number of days")),
                },
            };
            match outcome {
                Ok(message) => {
                    console.alert(AlertLevel::Success, &message);
                    loader.restart();
                }
                Err((e, fallback)) => console.report_failure(&e, fallback),
            }
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(id) = table.write().take_pending_delete() else {
            return;
        };
        spawn(async move {
            let outcome = console.client().delete_loan(id).await;
            let outcome = table.write().settle_delete(id, outcome);
            match outcome {
                Ok(()) => {
                    pending.write().retain(|l| l.id != id);
                    console.alert(AlertLevel::Success, "Loan deleted successfully.");
                }
                Err(e) => console.report_failure(&e, "Failed to delete the loan"),
            }
        });
    };

    let today = today();
    let body = if let Some(message) = error() {
        rsx! {
            ErrorBanner { message, on_retry: move |_| loader.restart() }
        }
    } else if loader.read().is_none() {
        rsx! {
            Loading { label: "Loading loans..." }
        }
    } else {
        let state = table.read();
        let (rows, label): (Vec<Loan>, Option<String>) = match tab() {
            Tab::All => (
                state.visible().into_iter().cloned().collect(),
                state.result_label(),
            ),
            Tab::Pending => {
                let rows: Vec<Loan> = api::filter_by_query(&pending.read(), state.query())
                    .into_iter()
                    .cloned()
                    .collect();
                let label = state
                    .is_searching()
                    .then(|| format!("Found {} item(s)", rows.len()));
                (rows, label)
            }
        };
        let empty = match tab() {
            Tab::All => "No loans found.",
            Tab::Pending => "No pending loan requests.",
        };
        rsx! {
            ResultCount { label }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Member" }
                        th { "Book" }
                        th { "Loan date" }
                        th { "Due date" }
                        th { "Returned" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        EmptyRow { colspan: 7, message: empty }
                    }
                    for loan in rows {
                        tr {
                            key: "{loan.id}",
                            td { {loan.member_name().unwrap_or("-").to_string()} }
                            td { {loan.book_title().unwrap_or("-").to_string()} }
                            td { "{date(loan.loaned_at)}" }
                            td { "{date(loan.due_at)}" }
                            td { "{date(loan.returned_at)}" }
                            td {
                                LoanStatusBadge { status: loan.status.clone() }
                                if loan.status == LoanStatus::Borrowed {
                                    StandingBadge { standing: loan.standing(today) }
                                }
                            }
                            td {
                                class: "row-actions",
                                if loan.status == LoanStatus::Pending {
                                    Button {
                                        variant: ButtonVariant::Success,
                                        small: true,
                                        onclick: move |_| action.set(Some(LoanAction::Approve(loan.id))),
                                        "Approve"
                                    }
                                    Button {
                                        variant: ButtonVariant::Danger,
                                        small: true,
                                        onclick: move |_| action.set(Some(LoanAction::Reject(loan.id))),
                                        "Reject"
                                    }
                                } else if !loan.is_returned() && loan.status != LoanStatus::Rejected {
                                    Button {
                                        variant: ButtonVariant::Success,
                                        small: true,
                                        onclick: move |_| action.set(Some(LoanAction::Return(loan.id))),
                                        "Return"
                                    }
                                    Button {
                                        variant: ButtonVariant::Secondary,
                                        small: true,
                                        onclick: move |_| action.set(Some(LoanAction::Extend(loan.id))),
                                        "Extend"
                                    }
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    small: true,
                                    onclick: move |_| open_editor(Editing::Existing(loan.id)),
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    small: true,
                                    onclick: move |_| table.write().request_delete(loan.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    let member_options = {
        let users = users.read();
        let members: Vec<User> = users.iter().filter(|u| u.role == Role::Member).cloned().collect();
        select_options(&members, |u| format!("{} ({})", u.display_name(), u.email))
    };
    let book_options = select_options(&books.read(), |b| format!("{} (stock {})", b.title, b.stock));
    let pending_count = pending.read().len();
    let dialog = match action() {
        Some(LoanAction::Approve(id)) => rsx! {
            ConfirmDialog {
                title: "Approve loan",
                message: format!("Approve loan request #{id}?"),
                confirm_label: "Approve",
                on_confirm: move |_| run_action(String::new()),
                on_cancel: move |_| action.set(None),
            }
        },
        Some(LoanAction::Return(id)) => rsx! {
            ConfirmDialog {
                title: "Return book",
                message: format!("Mark loan #{id} as returned?"),
                confirm_label: "Return",
                on_confirm: move |_| run_action(String::new()),
                on_cancel: move |_| action.set(None),
            }
        },
        Some(LoanAction::Extend(_)) => rsx! {
            PromptDialog {
                title: "Extend loan",
                label: "Extend by how many days?",
                initial: DEFAULT_EXTENSION_DAYS.to_string(),
                input_type: "number",
                on_submit: move |days| run_action(days),
                on_cancel: move |_| action.set(None),
            }
        },
        Some(LoanAction::Reject(_)) => rsx! {
            PromptDialog {
                title: "Reject loan",
                label: "Reason for rejection",
                placeholder: "No reason provided",
                on_submit: move |reason| run_action(reason),
                on_cancel: move |_| action.set(None),
            }
        },
        None => rsx! {},
    };

    rsx! {
        PageHeader {
            title: "Manage Loans",
            actions: rsx! {
                Button { onclick: move |_| open_editor(Editing::New), "New Loan" }
            },
        }
        div {
            class: "tabs",
            button {
                class: tab_class(tab() == Tab::All),
                onclick: move |_| tab.set(Tab::All),
                "All loans"
            }
            button {
                class: tab_class(tab() == Tab::Pending),
                onclick: move |_| tab.set(Tab::Pending),
                "Pending requests ({pending_count})"
            }
        }
        div {
            class: "toolbar",
            SearchBox {
                value: table.read().query().to_string(),
                placeholder: "Search by member, book or status...",
                on_search: move |q: String| table.write().set_query(q),
            }
        }
        {body}

        if let Some(target) = editing() {
            Modal {
                title: target.title("Loan"),
                on_close: move |_| editing.set(None),
                form {
                    onsubmit: handle_save,
                    if let Some(message) = form_error() {
                        p { class: "form-error", "{message}" }
                    }
                    Field {
                        id: "loan-user",
                        label: "Member",
                        Select {
                            id: "loan-user",
                            value: form.read().user_id.clone(),
                            options: member_options,
                            placeholder: "Select member",
                            onchange: move |v| form.write().user_id = v,
                        }
                    }
                    Field {
                        id: "loan-book",
                        label: "Book",
                        Select {
                            id: "loan-book",
                            value: form.read().book_id.clone(),
                            options: book_options,
                            placeholder: "Select book",
                            onchange: move |v| form.write().book_id = v,
                        }
                    }
                    div {
                        class: "form-row",
                        Field {
                            id: "loan-start",
                            label: "Loan date",
                            Input {
                                id: "loan-start",
                                r#type: "date",
                                required: true,
                                value: form.read().loaned_at.clone(),
                                oninput: move |v| form.write().loaned_at = v,
                            }
                        }
                        Field {
                            id: "loan-due",
                            label: "Due date",
                            Input {
                                id: "loan-due",
                                r#type: "date",
                                required: true,
                                value: form.read().due_at.clone(),
                                oninput: move |v| form.write().due_at = v,
                            }
                        }
                    }
                    div {
                        class: "dialog-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| editing.set(None),
                            "Cancel"
                        }
                        Button {
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }

        {dialog}

        if table.read().pending_delete().is_some() {
            ConfirmDialog {
                title: "Delete loan",
                message: "Are you sure you want to delete this loan?",
                confirm_label: "Delete",
                danger: true,
                on_confirm: confirm_delete,
                on_cancel: move |_| table.write().cancel_delete(),
            }
        }
    }
}
