//! Colour constants mirrored from the stylesheet's custom properties.
//!
//! Neon-on-void palette: cyan and violet for the avatar ring, white at low
//! alpha for everything else.

#![allow(dead_code)]

// === VOID (Backgrounds) ===
pub const VOID_BLACK: &str = "#000000";

// === NEON (Avatar ring) ===
pub const NEON_BLUE: &str = "#3b82f6";
pub const NEON_CYAN: &str = "#22d3ee";
pub const NEON_VIOLET: &str = "#a855f7";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "rgba(255, 255, 255, 0.9)";
pub const TEXT_MUTED: &str = "rgba(255, 255, 255, 0.3)";
pub const TEXT_FAINT: &str = "rgba(255, 255, 255, 0.2)";

// === GLASS (Cards) ===
pub const GLASS_FILL: &str = "rgba(255, 255, 255, 0.02)";
pub const GLASS_HOVER: &str = "rgba(255, 255, 255, 0.05)";
pub const GLASS_BORDER: &str = "rgba(255, 255, 255, 0.1)";

/// Planet colour used by the background scene
pub const PLANET: &str = "#ffffff";
