use dioxus::prelude::*;
use ui::components::PageHeader;
use ui::icons::{FaBook, FaFileLines, FaFeather, FaMoneyBill, FaRightLeft, FaTags, FaUsers};
use ui::{use_console, Icon};

use crate::Route;

#[component]
pub fn AdminDashboard() -> Element {
    let console = use_console();
    let nav = use_navigator();
    let greeting = console
        .user()
        .map(|u| format!("Signed in as {}", u.display_name()))
        .unwrap_or_default();

    let pending = use_resource(move || async move {
        match console.client().pending_loans().await {
            Ok(loans) => Some(loans.len()),
            Err(e) => {
                tracing::warn!("Pending loan count unavailable: {e}");
                None
            }
        }
    });
    let pending_label = match *pending.read() {
        Some(Some(0)) => "No pending requests".to_string(),
        Some(Some(n)) => format!("{n} pending request(s)"),
        _ => "Loans, returns and extensions".to_string(),
    };

    let tile = move |route: Route| {
        move |_: MouseEvent| {
            nav.push(route.clone());
        }
    };

    rsx! {
        PageHeader { title: "Admin Dashboard", subtitle: greeting }
        div {
            class: "card-grid",
            div {
                class: "card dashboard-tile clickable",
                onclick: tile(Route::ManageBooks {}),
                Icon { icon: FaBook, width: 24, height: 24 }
                h3 { "Books" }
                p { class: "book-meta", "Catalog, stock and covers" }
            }
            div {
                class: "card dashboard-tile clickable",
                onclick: tile(Route::ManageAuthors {}),
                Icon { icon: FaFeather, width: 24, height: 24 }
                h3 { "Authors" }
                p { class: "book-meta", "Names and biographies" }
            }
            div {
                class: "card dashboard-tile clickable",
                onclick: tile(Route::ManageCategories {}),
                Icon { icon: FaTags, width: 24, height: 24 }
                h3 { "Categories" }
                p { class: "book-meta", "Genres used by the catalog" }
            }
            div {
                class: "card dashboard-tile clickable",
                onclick: tile(Route::ManageLoans {}),
                Icon { icon: FaRightLeft, width: 24, height: 24 }
                h3 { "Loans" }
                p { class: "book-meta", "{pending_label}" }
            }
            div {
                class: "card dashboard-tile clickable",
                onclick: tile(Route::ManageFines {}),
                Icon { icon: FaMoneyBill, width: 24, height: 24 }
                h3 { "Fines" }
                p { class: "book-meta", "Charges and payments" }
            }
            div {
                class: "card dashboard-tile clickable",
                onclick: tile(Route::ManageUsers {}),
                Icon { icon: FaUsers, width: 24, height: 24 }
                h3 { "Users" }
                p { class: "book-meta", "Accounts and roles" }
            }
            div {
                class: "card dashboard-tile clickable",
                onclick: tile(Route::Reports {}),
                Icon { icon: FaFileLines, width: 24, height: 24 }
                h3 { "Reports" }
                p { class: "book-meta", "Loan, book, member and fine statistics" }
            }
        }
    }
}
