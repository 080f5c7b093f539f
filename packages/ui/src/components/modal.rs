use dioxus::prelude::*;

use super::controls::{Button, ButtonVariant, Input};
use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    let card = if wide { "modal-card modal-wide" } else { "modal-card" };
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "{card}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Modal with a title bar and close button.
#[component]
pub fn Modal(
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close,
            wide,
            div {
                class: "modal-header",
                h2 { class: "modal-title", "{title}" }
                button {
                    class: "modal-close",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }
            div { class: "modal-body", {children} }
        }
    }
}

/// Yes/no question. Declining only closes the dialog.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Yes".to_string())] confirm_label: String,
    #[props(default)] danger: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let variant = if danger { ButtonVariant::Danger } else { ButtonVariant::Primary };
    rsx! {
        ModalOverlay {
            on_close: on_cancel,
            div {
                class: "dialog",
                h2 { class: "dialog-title", "{title}" }
                p { class: "dialog-message", "{message}" }
                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

/// Asks for one line of text. `on_submit` receives it untrimmed.
#[component]
pub fn PromptDialog(
    title: String,
    label: String,
    #[props(default)] initial: String,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    on_submit: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut value = use_signal(|| initial.clone());
    rsx! {
        ModalOverlay {
            on_close: on_cancel,
            form {
                class: "dialog",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(value());
                },
                h2 { class: "dialog-title", "{title}" }
                label { class: "form-label", r#for: "prompt-input", "{label}" }
                Input {
                    id: "prompt-input",
                    r#type: input_type,
                    placeholder,
                    value: value(),
                    oninput: move |v| value.set(v),
                }
                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button { r#type: "submit", "OK" }
                }
            }
        }
    }
}
