//! Shared UI for the library console.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | [`ConsoleContext`] and [`ConsoleProvider`]: session, client, config, alerts |
//! | [`guard`] | Route access rules and role homes |
//! | [`nav`] | Role-filtered sidebar menu |
//! | [`table`] | List state: search, delete confirmation, patching |
//! | [`forms`] | Form state and payload building for the modals |
//! | [`notifications`] | Notices derived from loans |
//! | [`stats`] | Catalog overview figures |
//! | [`format`] | Date and rupiah formatting |
//! | [`components`] | Dioxus widgets |

use dioxus::prelude::*;

pub mod components;
pub use components::AlertHost;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const CONSOLE_CSS: Asset = asset!("/assets/console.css");

pub mod alert;
pub use alert::{raise_alert, use_alerts, AlertLevel, AlertQueue};

pub mod format;
pub mod forms;
pub mod guard;
pub mod nav;
pub mod notifications;
pub mod placeholder;
pub mod stats;
pub mod table;

mod platform;
pub use platform::{make_client, make_session_repo};

pub mod session;
pub use session::{use_console, ConsoleContext, ConsoleProvider};
