//! The member's fines with an unpaid summary and a pay action.

use api::{Fine, FineSummary};
use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyRow, ErrorBanner, FineStatusBadge, Loading,
    PageHeader,
};
use ui::format::rupiah;
use ui::{use_console, AlertLevel};

#[component]
pub fn MyFines() -> Element {
    let console = use_console();
    let mut fines = use_signal(Vec::<Fine>::new);
    let mut summary = use_signal(FineSummary::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut paying = use_signal(|| Option::<u64>::None);

    let mut loader = use_resource(move || async move {
        let client = console.client();
        match client.my_fines().await {
            Ok(list) => {
                summary.set(client.my_fine_summary(&list).await);
                fines.set(list);
                error.set(None);
            }
            Err(e) => error.set(Some(console.load_error(&e, "Failed to load your fines"))),
        }
    });

    let confirm_pay = move |_: ()| {
        let Some(id) = paying() else {
            return;
        };
        paying.set(None);
        spawn(async move {
            match console.client().pay_my_fine(id).await {
                Ok(()) => {
                    console.alert(AlertLevel::Success, "Fine paid successfully.");
                    loader.restart();
                }
                Err(e) => console.report_failure(&e, "Failed to pay the fine"),
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
        let totals = summary();
        rsx! {
            div {
                class: "card-grid",
                div {
                    class: "stat-card",
                    p { class: "stat-value", "{totals.total}" }
                    p { class: "stat-label", "Total fines" }
                }
                div {
                    class: "stat-card",
                    p { class: "stat-value", "{totals.unpaid}" }
                    p { class: "stat-label", "Unpaid" }
                }
                div {
                    class: "stat-card",
                    p { class: "stat-value", "{rupiah(totals.total_unpaid)}" }
                    p { class: "stat-label", "Amount due" }
                }
            }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Book" }
                        th { "Reason" }
                        th { "Days late" }
                        th { "Amount" }
                        th { "Status" }
                        th { "" }
                    }
                }
                tbody {
                    if fines.read().is_empty() {
                        EmptyRow { colspan: 6, message: "You have no fines." }
                    }
                    for fine in fines() {
                        tr {
                            key: "{fine.id}",
                            td { {fine.book_title().unwrap_or("-").to_string()} }
                            td { {fine.reason().unwrap_or("-").to_string()} }
                            td { {fine.days.map(|d| d.to_string()).unwrap_or_else(|| "-".into())} }
                            td { "{rupiah(fine.amount)}" }
                            td { FineStatusBadge { status: fine.status } }
                            td {
                                if !fine.is_paid() {
                                    Button {
                                        variant: ButtonVariant::Success,
                                        small: true,
                                        onclick: move |_| paying.set(Some(fine.id)),
                                        "Pay"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        PageHeader { title: "My Fines", subtitle: "Late returns and other charges" }
        {body}
        if let Some(id) = paying() {
            ConfirmDialog {
                title: "Pay fine",
                message: format!("Pay fine #{id} now?"),
                confirm_label: "Pay",
                on_confirm: confirm_pay,
                on_cancel: move |_| paying.set(None),
            }
        }
    }
}
