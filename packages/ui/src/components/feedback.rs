use dioxus::prelude::*;

use crate::icons::{FaCircleExclamation, FaMagnifyingGlass};
use crate::Icon;

#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "loading",
            div { class: "spinner" }
            p { "{label}" }
        }
    }
}

/// Inline banner for a failed page load.
#[component]
pub fn ErrorBanner(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            Icon { icon: FaCircleExclamation, width: 16, height: 16 }
            span { "{message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "btn btn-sm btn-outline",
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state", p { "{message}" } }
    }
}

/// Table row spanning every column, for "no results".
#[component]
pub fn EmptyRow(colspan: u32, message: String) -> Element {
    rsx! {
        tr {
            class: "empty-row",
            td { colspan: "{colspan}", "{message}" }
        }
    }
}

#[component]
pub fn ResultCount(label: Option<String>) -> Element {
    rsx! {
        if let Some(label) = label {
            p { class: "result-count", "{label}" }
        }
    }
}

#[component]
pub fn SearchBox(
    value: String,
    #[props(default = "Search...".to_string())] placeholder: String,
    on_search: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "search-box",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| on_search.call(evt.value()),
            }
        }
    }
}

/// Title row at the top of every page, with optional actions on the right.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: String,
    actions: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: "page-header",
            div {
                h1 { class: "page-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            if let Some(actions) = actions {
                div { class: "page-actions", {actions} }
            }
        }
    }
}
