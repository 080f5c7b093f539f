//! Registration page. New accounts are members; the page sends the visitor
//! to the login form afterwards.

use api::Registration;
use dioxus::prelude::*;
use store::Role;
use ui::components::{Button, Field, Input};
use ui::{use_console, AlertLevel};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let console = use_console();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            let registration = Registration {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                password_confirmation: confirm_password(),
                role: Role::Member,
            };

            loading.set(true);
            match console.client().register(&registration).await {
                Ok(()) => {
                    console.alert(
                        AlertLevel::Success,
                        "Registration successful. Please sign in with your new account.",
                    );
                    nav.replace(Route::Login {});
                }
                Err(e) => {
                    error.set(Some(e.user_message("Registration failed. Please try again.")));
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
                onsubmit: handle_register,
                h1 { class: "auth-title", "Create an account" }
                p { class: "auth-subtitle", "Join the library as a member" }

                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }

                Field {
                    id: "register-name",
                    label: "Name",
                    Input {
                        id: "register-name",
                        required: true,
                        value: name(),
                        oninput: move |v| name.set(v),
                    }
                }
                Field {
                    id: "register-email",
                    label: "Email",
                    Input {
                        id: "register-email",
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |v| email.set(v),
                    }
                }
                Field {
                    id: "register-password",
                    label: "Password",
                    hint: "At least 8 characters",
                    Input {
                        id: "register-password",
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |v| password.set(v),
                    }
                }
                Field {
                    id: "register-confirm",
                    label: "Confirm password",
                    Input {
                        id: "register-confirm",
                        r#type: "password",
                        required: true,
                        value: confirm_password(),
                        oninput: move |v| confirm_password.set(v),
                    }
                }

                Button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }

                div {
                    class: "auth-footer",
                    "Already registered? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
