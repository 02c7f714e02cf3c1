//! Glitch Title
//!
//! The display name, duplicated into `data-text` so the stylesheet's
//! `::before` / `::after` layers can slice and offset it.

use dioxus::prelude::*;

#[component]
pub fn GlitchTitle(text: String) -> Element {
    rsx! {
        div { class: "glitch-wrapper",
            h1 { class: "glitch-text", "data-text": "{text}", "{text}" }
        }
    }
}
