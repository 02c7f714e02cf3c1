//! Star Field Background
//!
//! A fixed layer of twinkling points behind everything else. Positions come
//! from a seeded RNG so the sky is identical on every launch.

use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One star, in percent of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    /// Radius in viewBox units
    pub r: f32,
    pub opacity: f32,
    /// Twinkle period in seconds
    pub twinkle: f32,
    /// Negative start offset so stars don't blink in unison
    pub delay: f32,
}

/// Generate `count` stars from `seed`.
pub fn generate_stars(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            // Most stars are faint dust; a few are bright
            let bright = rng.random_bool(0.08);
            Star {
                x: rng.random_range(0.0..100.0),
                y: rng.random_range(0.0..100.0),
                r: if bright {
                    rng.random_range(0.18..0.3)
                } else {
                    rng.random_range(0.05..0.15)
                },
                opacity: if bright {
                    rng.random_range(0.7..1.0)
                } else {
                    rng.random_range(0.2..0.6)
                },
                twinkle: rng.random_range(2.0..6.0),
                delay: -rng.random_range(0.0..6.0),
            }
        })
        .collect()
}

/// Properties for the StarField component
#[derive(Clone, PartialEq, Props)]
pub struct StarFieldProps {
    /// Number of stars (default: 220)
    #[props(default = 220)]
    pub count: usize,
    /// RNG seed (default: 7)
    #[props(default = 7)]
    pub seed: u64,
}

/// Renders the star layer as a full-viewport SVG
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StarField { count: 300 }
/// }
/// ```
#[component]
pub fn StarField(props: StarFieldProps) -> Element {
    let stars = use_hook(|| generate_stars(props.count, props.seed));

    rsx! {
        svg {
            class: "star-field",
            view_box: "0 0 100 100",
            "preserveAspectRatio": "xMidYMid slice",
            "aria-hidden": "true",
            for (i, star) in stars.iter().enumerate() {
                circle {
                    key: "{i}",
                    class: "star",
                    cx: "{star.x}",
                    cy: "{star.y}",
                    r: "{star.r}",
                    fill: "#ffffff",
                    style: "opacity: {star.opacity}; animation-duration: {star.twinkle}s; animation-delay: {star.delay}s;",
                }
            }
        }
    }
}
