use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Danger,
    Success,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Danger => "btn btn-danger",
            ButtonVariant::Success => "btn btn-success",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] small: bool,
    #[props(default)] disabled: bool,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] title: String,
    #[props(default)] class: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let size = if small { " btn-sm" } else { "" };
    rsx! {
        button {
            class: "{variant.class()}{size} {class}",
            r#type: "{r#type}",
            title: "{title}",
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "form-label", r#for: "{html_for}", {children} }
    }
}

/// Labelled form row.
#[component]
pub fn Field(id: String, label: String, #[props(default)] hint: String, children: Element) -> Element {
    rsx! {
        div {
            class: "form-group",
            Label { html_for: id, "{label}" }
            {children}
            if !hint.is_empty() {
                p { class: "form-hint", "{hint}" }
            }
        }
    }
}

#[component]
pub fn Input(
    id: String,
    value: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] readonly: bool,
    #[props(default)] required: bool,
    #[props(default)] min: String,
    #[props(default)] oninput: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "form-control",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            min: "{min}",
            readonly,
            required,
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}

#[component]
pub fn Textarea(
    id: String,
    value: String,
    #[props(default)] placeholder: String,
    #[props(default = 3)] rows: u32,
    #[props(default)] oninput: EventHandler<String>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "form-control",
            rows: "{rows}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}

/// `<select>` over `(value, label)` pairs with a leading empty choice.
#[component]
pub fn Select(
    id: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(default = "Select...".to_string())] placeholder: String,
    #[props(default)] onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "form-control",
            value: "{value}",
            onchange: move |evt: FormEvent| onchange.call(evt.value()),
            option { value: "", "{placeholder}" }
            for (key, label) in options {
                option {
                    key: "{key}",
                    value: "{key}",
                    selected: key == value,
                    "{label}"
                }
            }
        }
    }
}
