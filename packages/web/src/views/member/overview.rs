use api::{Book, Category};
use dioxus::prelude::*;
use ui::components::{ErrorBanner, Loading, PageHeader};
use ui::stats::CatalogStats;
use ui::use_console;

/// Collection overview computed from the book and category lists.
#[component]
pub fn Overview() -> Element {
    let console = use_console();

    let mut stats = use_resource(move || async move {
        let client = console.client();
        let books: Vec<Book> = client
            .books()
            .await
            .map_err(|e| console.load_error(&e, "Failed to load statistics"))?;
        let categories: Vec<Category> = client
            .categories()
            .await
            .map_err(|e| console.load_error(&e, "Failed to load statistics"))?;
        Ok::<_, String>(CatalogStats::compute(&books, &categories))
    });

    let body = match &*stats.read() {
        None => rsx! {
            Loading {}
        },
        Some(Err(message)) => rsx! {
            ErrorBanner { message: message.clone(), on_retry: move |_| stats.restart() }
        },
        Some(Ok(computed)) => rsx! {
            div {
                class: "card-grid",
                for (label, value) in computed.cards() {
                    div {
                        key: "{label}",
                        class: "stat-card",
                        p { class: "stat-value", "{value}" }
                        p { class: "stat-label", "{label}" }
                    }
                }
            }
        },
    };

    rsx! {
        PageHeader { title: "Overview", subtitle: "The collection at a glance" }
        {body}
    }
}
