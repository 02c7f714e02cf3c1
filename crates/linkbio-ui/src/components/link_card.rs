//! Link Card
//!
//! One outbound link. Cards fade up one after another; the delay grows with
//! the card's position in the list.

use dioxus::prelude::*;
use linkbio_core::SocialLink;

use super::{ExternalLinkIcon, LinkIconView};

/// Seconds before the first card starts its entry animation.
pub const CARD_BASE_DELAY: f32 = 0.6;

/// Extra delay per card.
pub const CARD_STAGGER: f32 = 0.1;

/// Entry-animation delay for the card at `index`.
pub fn card_delay(index: usize) -> f32 {
    CARD_BASE_DELAY + index as f32 * CARD_STAGGER
}

/// Outbound link opened in a new browsing context
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for (i, link) in LINKS.iter().enumerate() {
///         LinkCard { key: "{link.name}", link: *link, index: i }
///     }
/// }
/// ```
#[component]
pub fn LinkCard(link: SocialLink, index: usize) -> Element {
    let delay = card_delay(index);

    rsx! {
        a {
            class: "link-card",
            href: link.url,
            target: "_blank",
            rel: "noopener noreferrer",
            style: "animation-delay: {delay}s;",
            div { class: "link-card__body",
                div { class: "link-card__icon",
                    LinkIconView { icon: link.icon }
                }
                div { class: "link-card__text",
                    span { class: "link-card__name", "{link.name}" }
                    span { class: "link-card__label", "{link.label}" }
                }
            }
            ExternalLinkIcon {}
        }
    }
}
