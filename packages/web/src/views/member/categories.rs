use api::Category;
use dioxus::prelude::*;
use ui::components::{EmptyState, ErrorBanner, Loading, PageHeader, ResultCount, SearchBox};
use ui::table::TableState;
use ui::use_console;

use super::book_grid::BookGrid;
use crate::Route;

#[component]
pub fn Categories() -> Element {
    let console = use_console();
    let nav = use_navigator();
    let mut table = use_signal(TableState::<Category>::default);
    let mut error = use_signal(|| Option::<String>::None);

    let mut loader = use_resource(move || async move {
        match console.client().categories().await {
            Ok(categories) => {
                table.write().replace(categories);
                error.set(None);
            }
            Err(e) => error.set(Some(console.load_error(&e, "Failed to load categories"))),
        }
    });

    let body = if let Some(message) = error() {
        rsx! {
            ErrorBanner { message, on_retry: move |_| loader.restart() }
        }
    } else if loader.read().is_none() {
        rsx! {
            Loading { label: "Loading categories..." }
        }
    } else {
        let state = table.read();
        let categories: Vec<Category> = state.visible().into_iter().cloned().collect();
        rsx! {
            ResultCount { label: state.result_label() }
            if categories.is_empty() {
                EmptyState { message: "No categories found." }
            }
            div {
                class: "card-grid",
                for category in categories {
                    CategoryCard {
                        key: "{category.id}",
                        category: category.clone(),
                        on_open: move |id| {
                            nav.push(Route::CategoryDetail { id });
                        },
                    }
                }
            }
        }
    };

    rsx! {
        PageHeader { title: "Categories", subtitle: "Browse the collection by genre" }
        div {
            class: "toolbar",
            SearchBox {
                value: table.read().query().to_string(),
                placeholder: "Search categories...",
                on_search: move |q: String| table.write().set_query(q),
            }
        }
        {body}
    }
}

#[component]
fn CategoryCard(category: Category, on_open: EventHandler<u64>) -> Element {
    let style = category.style();
    let id = category.id;
    rsx! {
        div {
            class: "card category-card clickable",
            style: "--accent: {style.color}",
            onclick: move |_| on_open.call(id),
            span { class: "category-icon", "{style.icon}" }
            h3 { "{category.name}" }
            if let Some(description) = category.description.as_ref().filter(|d| !d.trim().is_empty()) {
                p { class: "book-meta", "{description}" }
            }
            p { class: "category-count", "{category.book_count()} book(s)" }
        }
    }
}

/// Books in one category.
#[component]
pub fn CategoryDetail(id: u64) -> Element {
    let console = use_console();

    let mut detail = use_resource(use_reactive!(|(id,)| async move {
        let client = console.client();
        let category = client
            .category(id)
            .await
            .map_err(|e| console.load_error(&e, "Failed to load category"))?;
        let books = if category.books.is_empty() {
            client
                .category_books(id)
                .await
                .map_err(|e| console.load_error(&e, "Failed to load the category's books"))?
        } else {
            category.books.clone()
        };
        Ok::<_, String>((category, books))
    }));

    let content = match &*detail.read() {
        None => rsx! {
            Loading { label: "Loading category..." }
        },
        Some(Err(message)) => rsx! {
            ErrorBanner { message: message.clone(), on_retry: move |_| detail.restart() }
        },
        Some(Ok((category, books))) => rsx! {
            PageHeader {
                title: format!("{} {}", category.style().icon, category.name),
                subtitle: category.description.clone().unwrap_or_default(),
            }
            BookGrid { books: books.clone(), empty_message: "No books in this category yet." }
        },
    };
    content
}
