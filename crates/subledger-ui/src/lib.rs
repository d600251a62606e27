//! Subledger UI Components
//!
//! Small Dioxus building blocks shared by the dashboard: header toggles,
//! outbound links, glyph avatars and money formatting.
//!
//! ## Styling
//!
//! Components only emit class names (`btn-toggle`, `glyph-avatar`, ...).
//! The desktop shell ships the stylesheet, including the `light` / `dark`
//! variable sets, so every component follows the active theme for free.

pub mod components;

pub use components::*;
