use dioxus::prelude::*;

use crate::placeholder::{cover_or_placeholder, cover_placeholder};

/// Book cover image. A missing or broken image falls back to the placeholder.
#[component]
pub fn BookCover(
    src: Option<String>,
    alt: String,
    #[props(default = "book-cover".to_string())] class: String,
) -> Element {
    let mut broken = use_signal(|| false);
    let shown = if broken() {
        cover_placeholder()
    } else {
        cover_or_placeholder(src.as_deref())
    };
    rsx! {
        img {
            class: "{class}",
            src: "{shown}",
            alt: "{alt}",
            onerror: move |_| broken.set(true),
        }
    }
}
