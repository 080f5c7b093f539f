use dioxus::prelude::*;

use super::controls::Button;
use super::modal::ModalOverlay;
use crate::alert::use_alerts;

/// Renders the front of the alert queue as a blocking dialog.
#[component]
pub fn AlertHost() -> Element {
    let mut alerts = use_alerts();
    let current = alerts.read().current().cloned();

    let Some(alert) = current else {
        return rsx! {};
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| {
                alerts.write().dismiss();
            },
            div {
                class: "dialog {alert.level.css_class()}",
                h2 { class: "dialog-title", "{alert.title}" }
                p { class: "dialog-message", "{alert.message}" }
                div {
                    class: "dialog-actions",
                    Button {
                        onclick: move |_| {
                            alerts.write().dismiss();
                        },
                        "OK"
                    }
                }
            }
        }
    }
}
