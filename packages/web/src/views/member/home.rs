//! Member catalog: every book, narrowed by search and category.

use api::{Book, Category};
use dioxus::prelude::*;
use ui::components::{ErrorBanner, Loading, PageHeader, ResultCount, SearchBox};
use ui::forms::parse_id;
use ui::table::{in_category, TableState};
use ui::use_console;

use super::book_grid::BookGrid;

#[component]
pub fn Home() -> Element {
    let console = use_console();
    let mut table = use_signal(TableState::<Book>::default);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut category = use_signal(|| Option::<u64>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let mut loader = use_resource(move || async move {
        let client = console.client();
        match client.books().await {
            Ok(books) => {
                table.write().replace(books);
                error.set(None);
            }
            Err(e) => {
                error.set(Some(console.load_error(&e, "Failed to load books")));
                return;
            }
        }
        // The filter is optional; a failed category list only hides it.
        match client.categories().await {
            Ok(list) => categories.set(list),
            Err(e) => tracing::warn!("Category filter unavailable: {e}"),
        }
    });

    let greeting = console
        .user()
        .map(|u| format!("Welcome back, {}", u.display_name()))
        .unwrap_or_default();

    let body = if let Some(message) = error() {
        rsx! {
            ErrorBanner { message, on_retry: move |_| loader.restart() }
        }
    } else if loader.read().is_none() {
        rsx! {
            Loading { label: "Loading books..." }
        }
    } else {
        let state = table.read();
        let books: Vec<Book> = in_category(state.visible(), category())
            .into_iter()
            .cloned()
            .collect();
        let label = (state.is_searching() || category().is_some())
            .then(|| format!("Found {} item(s)", books.len()));
        rsx! {
            ResultCount { label }
            BookGrid { books, empty_message: "No books match your search." }
        }
    };

    rsx! {
        PageHeader { title: "Book Catalog", subtitle: greeting }
        div {
            class: "toolbar",
            SearchBox {
                value: table.read().query().to_string(),
                placeholder: "Search by title, author, category...",
                on_search: move |q: String| table.write().set_query(q),
            }
            select {
                class: "form-control filter-select",
                onchange: move |evt: FormEvent| category.set(parse_id(&evt.value())),
                option { value: "", "All categories" }
                for c in categories() {
                    option {
                        key: "{c.id}",
                        value: "{c.id}",
                        selected: category() == Some(c.id),
                        "{c.name}"
                    }
                }
            }
        }
        {body}
    }
}
