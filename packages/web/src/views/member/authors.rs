use api::Author;
use dioxus::prelude::*;
use ui::components::{EmptyState, ErrorBanner, Loading, PageHeader, ResultCount, SearchBox};
use ui::table::TableState;
use ui::use_console;

use super::book_grid::BookGrid;
use crate::Route;

#[component]
pub fn Authors() -> Element {
    let console = use_console();
    let nav = use_navigator();
    let mut table = use_signal(TableState::<Author>::default);
    let mut error = use_signal(|| Option::<String>::None);

    let mut loader = use_resource(move || async move {
        match console.client().authors().await {
            Ok(authors) => {
                table.write().replace(authors);
                error.set(None);
            }
            Err(e) => error.set(Some(console.load_error(&e, "Failed to load authors"))),
        }
    });

    let body = if let Some(message) = error() {
        rsx! {
            ErrorBanner { message, on_retry: move |_| loader.restart() }
        }
    } else if loader.read().is_none() {
        rsx! {
            Loading { label: "Loading authors..." }
        }
    } else {
        let state = table.read();
        let authors: Vec<Author> = state.visible().into_iter().cloned().collect();
        rsx! {
            ResultCount { label: state.result_label() }
            if authors.is_empty() {
                EmptyState { message: "No authors found." }
            }
            div {
                class: "card-grid",
                for author in authors {
                    div {
                        key: "{author.id}",
                        class: "card author-card clickable",
                        onclick: move |_| {
                            nav.push(Route::AuthorDetail { id: author.id });
                        },
                        h3 { "{author.name}" }
                        p { class: "book-meta", "{author.book_count()} book(s)" }
                        if let Some(bio) = author.biography() {
                            p { class: "author-bio", "{bio}" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        PageHeader { title: "Authors" }
        div {
            class: "toolbar",
            SearchBox {
                value: table.read().query().to_string(),
                placeholder: "Search authors...",
                on_search: move |q: String| table.write().set_query(q),
            }
        }
        {body}
    }
}

/// One author with their books.
#[component]
pub fn AuthorDetail(id: u64) -> Element {
    let console = use_console();

    let mut detail = use_resource(use_reactive!(|(id,)| async move {
        let client = console.client();
        let author = client
            .author(id)
            .await
            .map_err(|e| console.load_error(&e, "Failed to load author"))?;
        // Books embedded in the author record spare the second request.
        let books = if author.books.is_empty() {
            client
                .author_books(id)
                .await
                .map_err(|e| console.load_error(&e, "Failed to load the author's books"))?
        } else {
            author.books.clone()
        };
        Ok::<_, String>((author, books))
    }));

    let content = match &*detail.read() {
        None => rsx! {
            Loading { label: "Loading author..." }
        },
        Some(Err(message)) => rsx! {
            ErrorBanner { message: message.clone(), on_retry: move |_| detail.restart() }
        },
        Some(Ok((author, books))) => rsx! {
            PageHeader {
                title: author.name.clone(),
                subtitle: author.biography().unwrap_or_default().to_string(),
            }
            BookGrid { books: books.clone(), empty_message: "No books by this author yet." }
        },
    };
    content
}
