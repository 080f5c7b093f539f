//! Profile editing and password change.

use std::time::Duration;

use api::{ApiError, PasswordChange, ProfileUpdate};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, Field, Input, Loading, PageHeader, RoleBadge};
use ui::format::date;
use ui::{use_console, AlertLevel};

use crate::views::sleep;
use crate::Route;

#[component]
pub fn Profile() -> Element {
    let console = use_console();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let mut me = use_resource(move || async move {
        let user = console
            .client()
            .me()
            .await
            .map_err(|e| console.load_error(&e, "Failed to load profile"))?;
        name.set(user.name.clone());
        email.set(user.email.clone());
        Ok::<_, String>(user)
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            let update = ProfileUpdate {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
            };
            saving.set(true);
            match console.client().update_profile(&update).await {
                Ok(_) => {
                    console.reload_session();
                    console.alert(AlertLevel::Success, "Profile updated successfully.");
                    me.restart();
                }
                Err(e @ ApiError::Invalid(_)) => error.set(Some(e.user_message("Invalid profile"))),
                Err(e) => console.report_failure(&e, "Failed to update profile"),
            }
            saving.set(false);
        });
    };

    let content = match &*me.read() {
        None => rsx! {
            Loading { label: "Loading profile..." }
        },
        Some(Err(message)) => rsx! {
            ErrorBanner { message: message.clone(), on_retry: move |_| me.restart() }
        },
        Some(Ok(user)) => rsx! {
            div {
                class: "card profile-summary",
                h2 { "{user.display_name()}" }
                RoleBadge { role: user.role }
                p { class: "book-meta", "Member since {date(user.created_at)}" }
            }
            form {
                class: "card",
                onsubmit: handle_save,
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                Field {
                    id: "profile-name",
                    label: "Name",
                    Input {
                        id: "profile-name",
                        required: true,
                        value: name(),
                        oninput: move |v| name.set(v),
                    }
                }
                Field {
                    id: "profile-email",
                    label: "Email",
                    Input {
                        id: "profile-email",
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |v| email.set(v),
                    }
                }
                div {
                    class: "form-row",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            nav.push(Route::ChangePassword {});
                        },
                        "Change password"
                    }
                    Button {
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save changes" }
                    }
                }
            }
        },
    };

    rsx! {
        PageHeader { title: "Profile", subtitle: "Your account details" }
        {content}
    }
}

#[component]
pub fn ChangePassword() -> Element {
    let console = use_console();
    let nav = use_navigator();
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            success.set(None);
            let change = PasswordChange {
                password: password(),
                password_confirmation: confirmation(),
            };
            saving.set(true);
            match console.client().change_password(&change).await {
                Ok(()) => {
                    password.set(String::new());
                    confirmation.set(String::new());
                    success.set(Some("Password changed successfully.".to_string()));
                    saving.set(false);
                    sleep(Duration::from_secs(2)).await;
                    nav.replace(Route::Profile {});
                    return;
                }
                Err(e) if e.is_unauthorized() => console.report_failure(&e, "Failed to change password"),
                Err(e) => {
                    tracing::warn!("Password change rejected: {e}");
                    error.set(Some(e.user_message("Failed to change password")));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        PageHeader { title: "Change Password" }
        form {
            class: "card",
            onsubmit: handle_submit,
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            if let Some(message) = success() {
                p { class: "form-success", "{message}" }
            }
            Field {
                id: "new-password",
                label: "New password",
                hint: "At least 8 characters",
                Input {
                    id: "new-password",
                    r#type: "password",
                    required: true,
                    value: password(),
                    oninput: move |v| password.set(v),
                }
            }
            Field {
                id: "confirm-password",
                label: "Confirm new password",
                Input {
                    id: "confirm-password",
                    r#type: "password",
                    required: true,
                    value: confirmation(),
                    oninput: move |v| confirmation.set(v),
                }
            }
            div {
                class: "form-row",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        nav.push(Route::Profile {});
                    },
                    "Cancel"
                }
                Button {
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Update password" }
                }
            }
        }
    }
}
