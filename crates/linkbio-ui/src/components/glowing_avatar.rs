//! Glowing Avatar
//!
//! Profile picture wrapped in a pulsing neon ring, four counter-rotating
//! orbit rings, a scanline overlay and a hologram flicker.

use dioxus::prelude::*;

/// Orbit rings around the avatar: (inset px, period s, direction, class).
const ORBIT_RINGS: [(u32, u32, &str, &str); 4] = [
    (16, 10, "normal", "avatar-orbit avatar-orbit--bright"),
    (32, 15, "reverse", "avatar-orbit avatar-orbit--dim"),
    (48, 20, "normal", "avatar-orbit avatar-orbit--faint"),
    (24, 25, "normal", "avatar-orbit avatar-orbit--bright"),
];

/// Properties for the GlowingAvatar component
#[derive(Clone, PartialEq, Props)]
pub struct GlowingAvatarProps {
    /// Image URL
    pub src: String,
    /// Alt text, normally the display name
    pub alt: String,
}

/// Avatar with neon ring and holographic overlays
///
/// The image is loaded without a referrer so the avatar proxy doesn't
/// reject it.
#[component]
pub fn GlowingAvatar(props: GlowingAvatarProps) -> Element {
    rsx! {
        div { class: "avatar-frame",
            // Neon ring
            div { class: "avatar-glow",
                div { class: "avatar-glow__pulse" }
                div { class: "avatar-glow__sweep" }
            }

            div { class: "avatar-scanlines" }

            for (inset, period, direction, class) in ORBIT_RINGS {
                div {
                    class: "{class}",
                    style: "inset: -{inset}px; animation-duration: {period}s; animation-direction: {direction};",
                }
            }

            div { class: "avatar-image",
                img {
                    src: "{props.src}",
                    alt: "{props.alt}",
                    "referrerpolicy": "no-referrer",
                }
                div { class: "avatar-flicker" }
            }
        }
    }
}

