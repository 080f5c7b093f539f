//! Report cards. Each card fetches its report on demand and renders it as a
//! key/value list or a table, whichever shape the backend answered with.

use api::{ReportData, ReportKind};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, EmptyState, ErrorBanner, Loading, PageHeader};
use ui::use_console;

#[component]
pub fn Reports() -> Element {
    rsx! {
        PageHeader { title: "Reports", subtitle: "Library statistics" }
        div {
            class: "report-list",
            for kind in ReportKind::ALL {
                ReportCard { key: "{kind.slug()}", kind }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ReportState {
    Idle,
    Loading,
    Ready(ReportData),
    Failed(String),
}

#[component]
fn ReportCard(kind: ReportKind) -> Element {
    let console = use_console();
    let mut state = use_signal(|| ReportState::Idle);

    let generate = move |_: MouseEvent| {
        spawn(async move {
            state.set(ReportState::Loading);
            let next = match console.client().report(kind).await {
                Ok(data) => ReportState::Ready(data),
                Err(e) => ReportState::Failed(console.load_error(&e, "Failed to generate the report")),
            };
            state.set(next);
        });
    };

    let output = match state() {
        ReportState::Idle => rsx! {},
        ReportState::Loading => rsx! {
            Loading { label: "Generating report..." }
        },
        ReportState::Failed(message) => rsx! {
            ErrorBanner { message }
        },
        ReportState::Ready(data) => rsx! {
            ReportOutput { data }
        },
    };

    rsx! {
        div {
            class: "card report-card",
            div {
                class: "report-header",
                div {
                    h3 { "{kind.title()}" }
                    p { class: "book-meta", "{kind.description()}" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: state() == ReportState::Loading,
                    onclick: generate,
                    "Generate"
                }
            }
            {output}
        }
    }
}

#[component]
fn ReportOutput(data: ReportData) -> Element {
    match data {
        ReportData::Empty => rsx! {
            EmptyState { message: "No data for this report." }
        },
        ReportData::Pairs(pairs) => rsx! {
            dl {
                class: "detail-list report-output",
                for (key, value) in pairs {
                    dt { "{key}" }
                    dd { "{value}" }
                }
            }
        },
        ReportData::Table { columns, rows } => rsx! {
            div {
                class: "report-output",
                table {
                    class: "data-table",
                    thead {
                        tr {
                            for column in columns {
                                th { key: "{column}", {api::resources::reports::humanize(&column)} }
                            }
                        }
                    }
                    tbody {
                        for (i, row) in rows.into_iter().enumerate() {
                            tr {
                                key: "{i}",
                                for cell in row {
                                    td { "{cell}" }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}
