//! Orbiting Planet
//!
//! A small ringed sphere circling the page centre. The orbit is a CSS
//! rotation of a square container squashed vertically, which gives the
//! tilted-ellipse look of a 3D orbit seen from slightly above.

use dioxus::prelude::*;

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// Scene units to CSS pixels.
pub const ORBIT_UNIT_PX: f32 = 42.0;

/// Vertical squash of every orbit.
pub const ORBIT_TILT: f32 = 0.2;

/// Parameters of one planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetSpec {
    /// Orbit radius in scene units
    pub radius: f32,
    /// Angular speed in radians per second
    pub speed: f32,
    /// Sphere radius in scene units
    pub size: f32,
    /// Starting angle in radians
    pub offset: f32,
}

/// The four planets of the background scene.
pub const SCENE_PLANETS: [PlanetSpec; 4] = [
    PlanetSpec {
        radius: 4.0,
        speed: 0.5,
        size: 0.15,
        offset: 0.0,
    },
    PlanetSpec {
        radius: 6.0,
        speed: 0.3,
        size: 0.25,
        offset: PI,
    },
    PlanetSpec {
        radius: 8.0,
        speed: 0.2,
        size: 0.1,
        offset: FRAC_PI_2,
    },
    PlanetSpec {
        radius: 5.0,
        speed: 0.4,
        size: 0.2,
        offset: -FRAC_PI_4,
    },
];

impl PlanetSpec {
    /// Seconds for one full revolution.
    pub fn period(&self) -> f32 {
        TAU / self.speed
    }

    /// CSS animation-delay placing the planet at `offset` at time zero.
    ///
    /// Always negative or zero so the animation starts mid-orbit.
    pub fn start_delay(&self) -> f32 {
        -(self.offset.rem_euclid(TAU) / self.speed)
    }
}

/// Properties for the OrbitingPlanet component
#[derive(Clone, PartialEq, Props)]
pub struct OrbitingPlanetProps {
    pub planet: PlanetSpec,
    /// Sphere colour (default: white)
    #[props(default = "#ffffff".to_string())]
    pub color: String,
}

#[component]
pub fn OrbitingPlanet(props: OrbitingPlanetProps) -> Element {
    let planet = props.planet;
    let diameter = planet.radius * 2.0 * ORBIT_UNIT_PX;
    let half = diameter / 2.0;
    let body = (planet.size * 2.0 * ORBIT_UNIT_PX).max(4.0);
    let ring = body * 2.5;
    let period = planet.period();
    let delay = planet.start_delay();
    let color = &props.color;

    rsx! {
        div {
            class: "orbit-plane",
            style: "width: {diameter}px; height: {diameter}px; margin: -{half}px 0 0 -{half}px; transform: scaleY({ORBIT_TILT});",
            div {
                class: "orbit-path",
                style: "animation-duration: {period}s; animation-delay: {delay}s;",
                div {
                    class: "planet",
                    style: "width: {body}px; height: {body}px; background: {color};",
                    div {
                        class: "planet-ring",
                        style: "width: {ring}px; height: {ring}px; border-color: {color};",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period() {
        let planet = SCENE_PLANETS[0];
        assert!((planet.period() - TAU / 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_start_delay_is_never_positive() {
        for planet in SCENE_PLANETS {
            let delay = planet.start_delay();
            assert!(delay <= 0.0);
            assert!(-delay < planet.period());
        }
    }

    #[test]
    fn test_scene_layout() {
        let radii: Vec<f32> = SCENE_PLANETS.iter().map(|p| p.radius).collect();
        let sizes: Vec<f32> = SCENE_PLANETS.iter().map(|p| p.size).collect();
        assert_eq!(radii, [4.0, 6.0, 8.0, 5.0]);
        assert_eq!(sizes, [0.15, 0.25, 0.1, 0.2]);
        assert_eq!(SCENE_PLANETS[1].offset, PI);
    }

    #[test]
    fn test_negative_offset_wraps() {
        let planet = SCENE_PLANETS[3];
        let expected = -((TAU - FRAC_PI_4) / planet.speed);
        assert!((planet.start_delay() - expected).abs() < 1e-4);
    }
}
