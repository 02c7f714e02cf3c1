//! Link-in-bio UI Components
//!
//! Stateless Dioxus components for the profile page. Every component is a
//! pure function of its props; the page owns the only piece of state.
//!
//! ## Palette
//!
//! - **Cyan (#22d3ee)** and **Violet (#a855f7)**: the avatar's neon ring
//! - **White at low alpha**: link cards, orbit rings, footer
//! - **Black**: the void behind the starfield

pub mod components;

pub use components::*;
