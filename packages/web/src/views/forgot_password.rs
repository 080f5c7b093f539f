//! Forgot-password page. There is no reset endpoint; the page only confirms
//! the request and returns to the login form.

use dioxus::prelude::*;
use ui::components::{Button, Field, Input};
use ui::{use_console, AlertLevel};

use crate::Route;

#[component]
pub fn ForgotPassword() -> Element {
    let console = use_console();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let address = email().trim().to_string();
        if address.is_empty() || !address.contains('@') {
            error.set(Some("Please enter a valid email address".to_string()));
            return;
        }
        console.alert(
            AlertLevel::Success,
            &format!("If {address} is registered, password reset instructions will be sent there."),
        );
        nav.replace(Route::Login {});
    };

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: handle_submit,
                h1 { class: "auth-title", "Forgot password" }
                p { class: "auth-subtitle", "Enter the email you registered with" }

                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }

                Field {
                    id: "forgot-email",
                    label: "Email",
                    Input {
                        id: "forgot-email",
                        r#type: "email",
                        value: email(),
                        oninput: move |v| {
                            email.set(v);
                            error.set(None);
                        },
                    }
                }

                Button { r#type: "submit", "Send reset link" }

                div {
                    class: "auth-footer",
                    Link { to: Route::Login {}, "Back to sign in" }
                }
            }
        }
    }
}
