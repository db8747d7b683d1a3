//! Color constants for the mdraft palette.
//!
//! Dark editorial look: near-black backgrounds, red accents.

#![allow(dead_code)]

// === BACKGROUNDS ===
pub const BG_BLACK: &str = "#0a0a0a";
pub const BG_PANEL: &str = "#111113";
pub const BG_INSET: &str = "rgba(0, 0, 0, 0.4)";

// === ACCENT (Red) ===
pub const ACCENT: &str = "#dc2626";
pub const ACCENT_SOFT: &str = "rgba(220, 38, 38, 0.4)";
pub const ACCENT_FAINT: &str = "rgba(220, 38, 38, 0.2)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f5f5f5";
pub const TEXT_SECONDARY: &str = "#9ca3af";
pub const TEXT_MUTED: &str = "#6b7280";

// === SEMANTIC ===
pub const DANGER: &str = "#ff3366";
pub const WARNING: &str = "#ff9f00";
