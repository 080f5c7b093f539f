use api::{FineStatus, LoanStanding, LoanStatus, StockLevel};
use dioxus::prelude::*;
use store::Role;

#[component]
pub fn Badge(#[props(into)] class: String, #[props(into)] label: String) -> Element {
    rsx! {
        span { class: "badge {class}", "{label}" }
    }
}

#[component]
pub fn StockBadge(level: StockLevel, stock: i64) -> Element {
    let label = match level {
        StockLevel::Out => level.label().to_string(),
        _ => format!("{} ({stock})", level.label()),
    };
    rsx! {
        Badge { class: level.css_class(), label }
    }
}

#[component]
pub fn LoanStatusBadge(status: LoanStatus) -> Element {
    rsx! {
        Badge { class: "status-{status.css_class()}", label: status.label() }
    }
}

#[component]
pub fn StandingBadge(standing: LoanStanding) -> Element {
    let class = match standing {
        LoanStanding::Active => "status-borrowed",
        LoanStanding::Overdue => "status-overdue",
        LoanStanding::Returned => "status-returned",
    };
    rsx! {
        Badge { class, label: standing.label() }
    }
}

#[component]
pub fn FineStatusBadge(status: FineStatus) -> Element {
    rsx! {
        Badge { class: "fine-{status.css_class()}", label: status.label() }
    }
}

#[component]
pub fn RoleBadge(role: Role) -> Element {
    rsx! {
        Badge { class: "role-{role.as_str()}", label: role.label() }
    }
}
