use dioxus::prelude::*;
use ui::components::{BookCover, Button, ButtonVariant, ErrorBanner, Loading, StockBadge};
use ui::use_console;

use crate::Route;

#[component]
pub fn BookDetail(id: u64) -> Element {
    let console = use_console();
    let nav = use_navigator();
    let threshold = console.config().catalog.low_stock_threshold;

    let mut book = use_resource(use_reactive!(|(id,)| async move {
        console
            .client()
            .book(id)
            .await
            .map_err(|e| console.load_error(&e, "Failed to load book details"))
    }));

    let content = match &*book.read() {
        None => rsx! {
            Loading { label: "Loading book..." }
        },
        Some(Err(message)) => rsx! {
            ErrorBanner { message: message.clone(), on_retry: move |_| book.restart() }
        },
        Some(Ok(book)) => {
            let author = book.author_label().unwrap_or("Unknown").to_string();
            let category = book.category_label().unwrap_or("Uncategorized").to_string();
            let year = book.year.map(|y| y.to_string()).unwrap_or_else(|| "-".into());
            rsx! {
                div {
                    class: "book-detail",
                    BookCover {
                        src: book.cover_src().map(str::to_string),
                        alt: book.title.clone(),
                        class: "book-cover book-cover-large",
                    }
                    div {
                        class: "book-detail-body",
                        h1 { class: "page-title", "{book.title}" }
                        StockBadge { level: book.stock_level(threshold), stock: book.stock }
                        dl {
                            class: "detail-list",
                            dt { "Author" }
                            dd { "{author}" }
                            dt { "Category" }
                            dd { "{category}" }
                            dt { "Publisher" }
                            dd { "{book.publisher}" }
                            dt { "Year" }
                            dd { "{year}" }
                            dt { "ISBN" }
                            dd { "{book.isbn}" }
                        }
                        if let Some(description) = book.description.as_ref().filter(|d| !d.trim().is_empty()) {
                            p { class: "book-description", "{description}" }
                        }
                        div {
                            class: "form-row",
                            Button {
                                disabled: !book.is_available(),
                                onclick: move |_| {
                                    nav.push(Route::Borrow { id });
                                },
                                "Borrow this book"
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "toolbar",
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| nav.go_back(),
                "Back"
            }
        }
        {content}
    }
}
