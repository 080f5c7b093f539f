use api::{Fine, Loan};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyRow, ErrorBanner, Field, FineStatusBadge, Input,
    Loading, Modal, PageHeader, ResultCount, SearchBox, Select, Textarea,
};
use ui::format::{date, rupiah};
use ui::forms::{parse_id, FineForm};
use ui::table::TableState;
use ui::{use_console, AlertLevel};

use super::{select_options, Editing};

#[component]
pub fn ManageFines() -> Element {
    let console = use_console();
    let mut table = use_signal(TableState::<Fine>::default);
    let mut loans = use_signal(Vec::<Loan>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut form = use_signal(FineForm::default);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut paying = use_signal(|| Option::<u64>::None);
    let mut calculating = use_signal(|| false);

    let mut loader = use_resource(move || async move {
        let client = console.client();
        match client.admin_fines().await {
            Ok(fines) => {
                table.write().replace(fines);
                error.set(None);
            }
            Err(e) => {
                error.set(Some(console.load_error(&e, "Failed to load fines")));
                return;
            }
        }
        match client.admin_loans().await {
            Ok(list) => loans.set(list),
            Err(e) => tracing::warn!("Loan list unavailable: {e}"),
        }
    });

    let mut open_editor = move |target: Editing| {
        let initial = match target {
            Editing::New => FineForm::default(),
            Editing::Existing(id) => table
                .read()
                .get(id)
                .map(FineForm::from_fine)
                .unwrap_or_default(),
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
            match console.client().save_fine(target.id(), &payload).await {
                Ok(_) => {
                    editing.set(None);
                    // Saved records rarely carry the nested loan; re-fetch for display.
                    loader.restart();
                    let message = match target {
                        Editing::New => "Fine added successfully.",
                        Editing::Existing(_) => "Fine updated successfully.",
                    };
                    console.alert(AlertLevel::Success, message);
                }
                Err(e) => console.report_failure(&e, "Failed to save the fine"),
            }
            saving.set(false);
        });
    };

    // Let the backend compute the amount for the selected loan.
    let handle_calculate = move |_: MouseEvent| {
        let Some(loan_id) = parse_id(&form.read().loan_id) else {
            form_error.set(Some("Please select a loan".to_string()));
            return;
        };
        spawn(async move {
            calculating.set(true);
            match console.client().calculate_fine(loan_id).await {
                Ok(Some(fine)) => {
                    let mut current = form.write();
                    current.amount = format!("{}", fine.amount);
                    if let Some(reason) = fine.reason() {
                        current.reason = reason.to_string();
                    }
                }
                Ok(None) => console.alert(
                    AlertLevel::Info,
                    "No fine was calculated for this loan.",
                ),
                Err(e) => console.report_failure(&e, "Failed to calculate the fine"),
            }
            calculating.set(false);
        });
    };

    let confirm_pay = move |_: ()| {
        let Some(id) = paying() else {
            return;
        };
        paying.set(None);
        spawn(async move {
            match console.client().pay_fine(id).await {
                Ok(_) => {
                    console.alert(AlertLevel::Success, "Fine marked as paid.");
                    loader.restart();
                }
                Err(e) => console.report_failure(&e, "Failed to mark the fine as paid"),
            }
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(id) = table.write().take_pending_delete() else {
            return;
        };
        spawn(async move {
            let outcome = console.client().delete_fine(id).await;
            let outcome = table.write().settle_delete(id, outcome);
            match outcome {
                Ok(()) => {
                    console.alert(AlertLevel::Success, "Fine deleted successfully.");
                }
                Err(e) => console.report_failure(&e, "Failed to delete the fine"),
            }
        });
    };

    let body = if let Some(message) = error() {
        rsx! {
            ErrorBanner { message, on_retry: move |_| loader.restart() }
        }
    } else if loader.read().is_none() {
        rsx! {
            Loading { label: "Loading fines..." }
        }
    } else {
        let state = table.read();
        let rows: Vec<Fine> = state.visible().into_iter().cloned().collect();
        rsx! {
            ResultCount { label: state.result_label() }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Member" }
                        th { "Book" }
                        th { "Due date" }
                        th { "Reason" }
                        th { "Amount" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        EmptyRow { colspan: 7, message: "No fines found." }
                    }
                    for fine in rows {
                        tr {
                            key: "{fine.id}",
                            td { {fine.member_name().unwrap_or("-").to_string()} }
                            td { {fine.book_title().unwrap_or("-").to_string()} }
                            td { {date(fine.loan.as_ref().and_then(|l| l.due_at))} }
                            td { class: "cell-clip", {fine.reason().unwrap_or("-").to_string()} }
                            td { "{rupiah(fine.amount)}" }
                            td { FineStatusBadge { status: fine.status } }
                            td {
                                class: "row-actions",
                                if !fine.is_paid() {
                                    Button {
                                        variant: ButtonVariant::Success,
                                        small: true,
                                        onclick: move |_| paying.set(Some(fine.id)),
                                        "Mark paid"
                                    }
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    small: true,
                                    onclick: move |_| open_editor(Editing::Existing(fine.id)),
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    small: true,
                                    onclick: move |_| table.write().request_delete(fine.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    let loan_options = select_options(&loans.read(), |l| {
        format!(
            "#{} {} - {}",
            l.id,
            l.member_name().unwrap_or("Unknown member"),
            l.book_title().unwrap_or("Unknown book")
        )
    });

    rsx! {
        PageHeader {
            title: "Manage Fines",
            actions: rsx! {
                Button { onclick: move |_| open_editor(Editing::New), "Add Fine" }
            },
        }
        div {
            class: "toolbar",
            SearchBox {
                value: table.read().query().to_string(),
                placeholder: "Search by member, book or reason...",
                on_search: move |q: String| table.write().set_query(q),
            }
        }
        {body}

        if let Some(target) = editing() {
            Modal {
                title: target.title("Fine"),
                on_close: move |_| editing.set(None),
                form {
                    onsubmit: handle_save,
                    if let Some(message) = form_error() {
                        p { class: "form-error", "{message}" }
                    }
                    Field {
                        id: "fine-loan",
                        label: "Loan",
                        Select {
                            id: "fine-loan",
                            value: form.read().loan_id.clone(),
                            options: loan_options,
                            placeholder: "Select loan",
                            onchange: move |v| form.write().loan_id = v,
                        }
                    }
                    div {
                        class: "form-row",
                        Field {
                            id: "fine-amount",
                            label: "Amount (Rp)",
                            Input {
                                id: "fine-amount",
                                r#type: "number",
                                min: "0",
                                required: true,
                                value: form.read().amount.clone(),
                                oninput: move |v| form.write().amount = v,
                            }
                        }
                        div {
                            class: "form-group form-group-end",
                            Button {
                                variant: ButtonVariant::Secondary,
                                disabled: calculating(),
                                onclick: handle_calculate,
                                if calculating() { "Calculating..." } else { "Calculate from loan" }
                            }
                        }
                    }
                    Field {
                        id: "fine-reason",
                        label: "Reason",
                        Textarea {
                            id: "fine-reason",
                            value: form.read().reason.clone(),
                            oninput: move |v| form.write().reason = v,
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

        if let Some(id) = paying() {
            ConfirmDialog {
                title: "Mark fine as paid",
                message: format!("Mark fine #{id} as paid?"),
                confirm_label: "Mark paid",
                on_confirm: confirm_pay,
                on_cancel: move |_| paying.set(None),
            }
        }

        if table.read().pending_delete().is_some() {
            ConfirmDialog {
                title: "Delete fine",
                message: "Are you sure you want to delete this fine?",
                confirm_label: "Delete",
                danger: true,
                on_confirm: confirm_delete,
                on_cancel: move |_| table.write().cancel_delete(),
            }
        }
    }
}
