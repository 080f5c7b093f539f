//! Login page with email/password form.

use api::Credentials;
use dioxus::prelude::*;
use ui::components::{Button, Field, Input};
use ui::use_console;

use super::guard::home_route;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let console = use_console();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let credentials = Credentials {
                email: email().trim().to_string(),
                password: password(),
            };
            match console.client().login(&credentials).await {
                Ok(session) => {
                    let role = session.role();
                    console.sign_in(session);
                    nav.replace(home_route(role));
                }
                Err(e) => {
                    tracing::warn!("Login failed: {e}");
                    error.set(Some(e.user_message("Login failed. Please check your credentials.")));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: handle_login,
                h1 { class: "auth-title", "E-Library" }
                p { class: "auth-subtitle", "Sign in to your account" }

                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }

                Field {
                    id: "login-email",
                    label: "Email",
                    Input {
                        id: "login-email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        required: true,
                        value: email(),
                        oninput: move |v| email.set(v),
                    }
                }
                Field {
                    id: "login-password",
                    label: "Password",
                    Input {
                        id: "login-password",
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |v| password.set(v),
                    }
                }

                Button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }

                div {
                    class: "auth-footer",
                    Link { to: Route::ForgotPassword {}, "Forgot password?" }
                }
                div {
                    class: "auth-footer",
                    "No account yet? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
