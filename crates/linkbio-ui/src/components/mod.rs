//! Reusable components for the profile page.
//!
//! Animation is pure CSS (keyframes live in the app's global stylesheet);
//! components only pick classes and per-instance timing.

mod bio_footer;
mod glitch_title;
mod glowing_avatar;
mod icons;
mod link_card;
mod orbiting_planet;
mod star_field;

pub use bio_footer::*;
pub use glitch_title::*;
pub use glowing_avatar::*;
pub use icons::*;
pub use link_card::*;
pub use orbiting_planet::*;
pub use star_field::*;
