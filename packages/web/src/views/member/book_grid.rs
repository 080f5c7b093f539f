use api::Book;
use dioxus::prelude::*;
use ui::components::{BookCover, Button, ButtonVariant, EmptyState, StockBadge};
use ui::use_console;

use crate::Route;

/// Catalog cards shared by the home, author and category pages.
#[component]
pub(super) fn BookGrid(books: Vec<Book>, #[props(into)] empty_message: String) -> Element {
    if books.is_empty() {
        return rsx! {
            EmptyState { message: empty_message }
        };
    }
    rsx! {
        div {
            class: "book-grid",
            for book in books {
                BookCard { key: "{book.id}", book: book.clone() }
            }
        }
    }
}

#[component]
fn BookCard(book: Book) -> Element {
    let console = use_console();
    let nav = use_navigator();
    let threshold = console.config().catalog.low_stock_threshold;
    let id = book.id;
    let author = book.author_label().unwrap_or("Unknown author").to_string();

    rsx! {
        div {
            class: "book-card",
            BookCover {
                src: book.cover_src().map(str::to_string),
                alt: book.title.clone(),
            }
            div {
                class: "book-card-body",
                h3 { class: "book-title", "{book.title}" }
                p { class: "book-meta", "{author}" }
                if let Some(category) = book.category_label() {
                    p { class: "book-meta", "{category}" }
                }
                StockBadge { level: book.stock_level(threshold), stock: book.stock }
            }
            div {
                class: "book-card-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    small: true,
                    onclick: move |_| {
                        nav.push(Route::BookDetail { id });
                    },
                    "Details"
                }
                Button {
                    small: true,
                    disabled: !book.is_available(),
                    onclick: move |_| {
                        nav.push(Route::Borrow { id });
                    },
                    "Borrow"
                }
            }
        }
    }
}
