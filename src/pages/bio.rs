//! Bio page - the whole site.
//!
//! Background scene, profile header, link cards and footer. A pure function
//! of the profile signal.

use dioxus::prelude::*;
use linkbio_core::{ProfileState, FOOTER_TAGLINE, LINKS};
use linkbio_ui::{
    BioFooter, GlitchTitle, GlowingAvatar, LinkCard, OrbitingPlanet, StarField, SCENE_PLANETS,
};

use crate::context::use_profile;
use crate::theme::colors::PLANET;

#[component]
pub fn Bio() -> Element {
    let profile = use_profile();
    let ProfileState {
        display_name,
        avatar_url,
    } = profile();

    rsx! {
        main { class: "bio-page",
            div { class: "vignette" }

            // Background scene
            div { class: "scene",
                StarField {}
                div { class: "orbit-center",
                    for (i, planet) in SCENE_PLANETS.iter().enumerate() {
                        OrbitingPlanet { key: "{i}", planet: *planet, color: PLANET.to_string() }
                    }
                }
            }

            div { class: "bio-content",
                section { class: "profile-header",
                    GlowingAvatar { src: avatar_url, alt: display_name.clone() }
                    GlitchTitle { text: display_name }
                }

                nav { class: "link-list",
                    for (i, link) in LINKS.iter().enumerate() {
                        LinkCard { key: "{link.name}", link: *link, index: i }
                    }
                }

                BioFooter { tagline: FOOTER_TAGLINE.to_string() }
            }
        }
    }
}
