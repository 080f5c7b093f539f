use api::Loan;
use dioxus::prelude::*;
use ui::components::{
    BookCover, EmptyRow, ErrorBanner, LoanStatusBadge, Loading, PageHeader, ResultCount, SearchBox,
    StandingBadge,
};
use ui::format::{date, today};
use ui::table::TableState;
use ui::use_console;

/// The member's own loans and loan requests.
#[component]
pub fn MyLoans() -> Element {
    let console = use_console();
    let mut table = use_signal(TableState::<Loan>::default);
    let mut error = use_signal(|| Option::<String>::None);

    let mut loader = use_resource(move || async move {
        match console.client().my_loans().await {
            Ok(loans) => {
                table.write().replace(loans);
                error.set(None);
            }
            Err(e) => error.set(Some(console.load_error(&e, "Failed to load your loans"))),
        }
    });

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
        let rows: Vec<Loan> = state.visible().into_iter().cloned().collect();
        let empty = if state.is_searching() {
            "No loans match your search."
        } else {
            "You have not borrowed any books yet."
        };
        rsx! {
            ResultCount { label: state.result_label() }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Book" }
                        th { "Loan date" }
                        th { "Due date" }
                        th { "Returned" }
                        th { "Standing" }
                        th { "Status" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        EmptyRow { colspan: 6, message: empty }
                    }
                    for loan in rows {
                        tr {
                            key: "{loan.id}",
                            td {
                                div {
                                    class: "book-cell",
                                    BookCover {
                                        src: loan.cover_src().map(str::to_string),
                                        alt: loan.book_title().unwrap_or_default().to_string(),
                                        class: "book-cover book-cover-thumb",
                                    }
                                    div {
                                        strong { {loan.book_title().unwrap_or("-").to_string()} }
                                        if let Some(author) = loan.book_author() {
                                            p { class: "book-meta", "{author}" }
                                        }
                                    }
                                }
                            }
                            td { "{date(loan.loaned_at)}" }
                            td { "{date(loan.due_at)}" }
                            td { "{date(loan.returned_at)}" }
                            td { StandingBadge { standing: loan.standing(today) } }
                            td {
                                LoanStatusBadge { status: loan.status.clone() }
                                if let Some(reason) = loan.rejection_reason.as_ref().filter(|r| !r.trim().is_empty()) {
                                    p { class: "form-hint", "{reason}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        PageHeader { title: "My Loans", subtitle: "Books you have borrowed or requested" }
        div {
            class: "toolbar",
            SearchBox {
                value: table.read().query().to_string(),
                placeholder: "Search by book or status...",
                on_search: move |q: String| table.write().set_query(q),
            }
        }
        {body}
    }
}
