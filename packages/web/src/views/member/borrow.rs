//! Borrow form. The member picks a start date; the due date follows from the
//! configured loan period and cannot be edited.

use dioxus::prelude::*;
use ui::components::{BookCover, Button, ButtonVariant, ErrorBanner, Field, Input, Loading, PageHeader};
use ui::format::{input_date, today};
use ui::forms::BorrowForm;
use ui::{use_console, AlertLevel};

use crate::Route;

#[component]
pub fn Borrow(id: u64) -> Element {
    let console = use_console();
    let nav = use_navigator();
    let period = console.config().loans.period_days;
    let mut form = use_signal(|| BorrowForm::new(id, today(), period));
    let mut submitting = use_signal(|| false);

    let mut book = use_resource(use_reactive!(|(id,)| async move {
        console
            .client()
            .book(id)
            .await
            .map_err(|e| console.load_error(&e, "Failed to load book"))
    }));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        spawn(async move {
            submitting.set(true);
            let mut payload = form.read().payload();
            payload.book_id = id;
            match console.client().borrow(&payload).await {
                Ok(()) => {
                    console.alert(
                        AlertLevel::Success,
                        "Your loan request has been submitted and is waiting for approval.",
                    );
                    nav.replace(Route::MyLoans {});
                }
                Err(e) => console.report_failure(&e, "Failed to borrow the book"),
            }
            submitting.set(false);
        });
    };

    let summary = match &*book.read() {
        None => rsx! {
            Loading { label: "Loading book..." }
        },
        Some(Err(message)) => rsx! {
            ErrorBanner { message: message.clone(), on_retry: move |_| book.restart() }
        },
        Some(Ok(book)) => {
            let author = book.author_label().unwrap_or("Unknown author").to_string();
            rsx! {
                div {
                    class: "card borrow-summary",
                    BookCover {
                        src: book.cover_src().map(str::to_string),
                        alt: book.title.clone(),
                        class: "book-cover book-cover-thumb",
                    }
                    div {
                        h2 { "{book.title}" }
                        p { class: "book-meta", "{author}" }
                    }
                }
            }
        }
    };

    let start = input_date(form.read().loaned_at());
    let due = input_date(form.read().due_at());
    let period_hint = format!("{} days after the loan date", form.read().period_days());

    rsx! {
        PageHeader { title: "Borrow a Book" }
        {summary}
        form {
            class: "card",
            onsubmit: handle_submit,
            Field {
                id: "borrow-start",
                label: "Loan date",
                Input {
                    id: "borrow-start",
                    r#type: "date",
                    required: true,
                    value: start,
                    oninput: move |v: String| form.write().set_start(&v),
                }
            }
            Field {
                id: "borrow-due",
                label: "Due date",
                hint: period_hint,
                Input { id: "borrow-due", r#type: "date", readonly: true, value: due }
            }
            div {
                class: "form-row",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| nav.go_back(),
                    "Cancel"
                }
                Button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Submit request" }
                }
            }
        }
    }
}
