//! Page footer: tagline over a sparkle divider.

use dioxus::prelude::*;

use super::SparklesIcon;

#[component]
pub fn BioFooter(tagline: String) -> Element {
    rsx! {
        footer { class: "bio-footer",
            p { class: "bio-footer__tagline", "{tagline}" }
            div { class: "bio-footer__divider",
                div { class: "bio-footer__rule" }
                SparklesIcon {}
                div { class: "bio-footer__rule" }
            }
        }
    }
}
