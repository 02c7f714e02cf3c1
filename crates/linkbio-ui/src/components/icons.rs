//! Inline SVG icons.

use dioxus::prelude::*;
use linkbio_core::LinkIcon;

const DISCORD_PATH: &str = "M18.94 4.58C17.51 3.93 15.97 3.47 14.36 3.24C14.34 3.24 14.32 3.25 14.31 3.27C14.11 3.63 13.89 4.09 13.73 4.47C11.99 4.21 10.27 4.21 8.56 4.47C8.4 4.09 8.17 3.63 7.97 3.27C7.96 3.25 7.94 3.24 7.92 3.24C6.31 3.47 4.77 3.93 3.34 4.58C3.33 4.58 3.32 4.59 3.32 4.6C0.44 8.91 -0.35 13.12 0.04 17.27C0.04 17.28 0.05 17.3 0.06 17.31C1.96 18.71 3.8 19.56 5.6 20.12C5.62 20.13 5.65 20.12 5.66 20.1C6.09 19.52 6.47 18.9 6.8 18.24C6.82 18.21 6.8 18.17 6.77 18.16C6.17 17.93 5.59 17.65 5.04 17.33C5.01 17.31 5.01 17.27 5.03 17.25C5.15 17.16 5.27 17.07 5.38 16.97C5.39 16.96 5.41 16.96 5.42 16.96C9.07 18.63 13.01 18.63 16.62 16.96C16.63 16.96 16.65 16.96 16.66 16.97C16.77 17.07 16.89 17.16 17.01 17.25C17.03 17.27 17.03 17.31 17 17.33C16.45 17.65 15.87 17.93 15.27 18.16C15.24 18.17 15.22 18.21 15.24 18.24C15.57 18.9 15.95 19.52 16.38 20.1C16.39 20.12 16.42 20.13 16.44 20.12C18.24 19.56 20.08 18.71 21.98 17.31C21.99 17.3 22 17.28 22 17.27C22.46 12.42 21.25 8.25 18.95 4.6C18.95 4.59 18.94 4.58 18.94 4.58ZM8.02 14.88C6.94 14.88 6.05 13.89 6.05 12.67C6.05 11.45 6.91 10.46 8.02 10.46C9.13 10.46 10.02 11.45 10 12.67C10 13.89 9.12 14.88 8.02 14.88ZM14.01 14.88C12.93 14.88 12.04 13.89 12.04 12.67C12.04 11.45 12.9 10.46 14.01 10.46C15.12 10.46 16.01 11.45 15.99 12.67C15.99 13.89 15.11 14.88 14.01 14.88Z";

const LAYERS_TOP: &str = "M12 2L2 7L12 12L22 7L12 2Z";

/// Icon for a link, by kind
#[component]
pub fn LinkIconView(icon: LinkIcon, #[props(default = 20)] size: u32) -> Element {
    match icon {
        LinkIcon::Saweria => rsx! {
            svg {
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                "aria-hidden": "true",
                path { d: LAYERS_TOP, fill: "currentColor", fill_opacity: "0.3" }
                g {
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M2 17L12 22L22 17" }
                    path { d: "M2 12L12 17L22 12" }
                    path { d: LAYERS_TOP }
                }
            }
        },
        LinkIcon::Discord => rsx! {
            svg {
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                "aria-hidden": "true",
                path { d: DISCORD_PATH, fill: "currentColor" }
            }
        },
    }
}

/// Box-with-arrow glyph marking an outbound link
#[component]
pub fn ExternalLinkIcon(#[props(default = 18)] size: u32) -> Element {
    rsx! {
        svg {
            class: "external-link-icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        }
    }
}

#[component]
pub fn SparklesIcon(#[props(default = 12)] size: u32) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M12 3l1.9 5.8a2 2 0 0 0 1.3 1.3L21 12l-5.8 1.9a2 2 0 0 0-1.3 1.3L12 21l-1.9-5.8a2 2 0 0 0-1.3-1.3L3 12l5.8-1.9a2 2 0 0 0 1.3-1.3Z" }
            path { d: "M5 3v4" }
            path { d: "M3 5h4" }
        }
    }
}
