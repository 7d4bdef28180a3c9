//! Color constants for the café palette.
//!
//! Mirrors the custom properties declared at the top of the global stylesheet.

#![allow(dead_code)]

// === BACKGROUNDS ===
pub const NIGHT: &str = "#0d0d0e";
pub const ESPRESSO: &str = "#18130f";
pub const CREAM: &str = "#faf6ef";
pub const PAPER: &str = "#ffffff";

// === ACCENTS ===
pub const GOLD: &str = "#EDB95E";
pub const GOLD_DARK: &str = "#d9a441";
pub const CARAMEL: &str = "#c7a17a";
pub const CARAMEL_DARK: &str = "#a9825b";

// === TEXT ===
pub const INK: &str = "#1f1b16";
pub const INK_MUTED: &str = "#6b6258";
pub const TEXT_ON_DARK: &str = "#f5f1ea";
pub const TEXT_ON_DARK_MUTED: &str = "rgba(245, 241, 234, 0.7)";

// === SEMANTIC ===
pub const SUCCESS: &str = "#3c8d5a";
pub const DANGER: &str = "#c0392b";
