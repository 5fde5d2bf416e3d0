//! Color constants for inline styles
//!
//! Mirrors the custom properties declared in the global stylesheet.

// === TEXT ===
pub const COFFEE: &str = "#3E2723";

// === STATS ===
pub const ATTACK: &str = "#b91c1c";
pub const DEFENSE: &str = "#1d4ed8";
