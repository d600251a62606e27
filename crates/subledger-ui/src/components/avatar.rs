//! Glyph Avatar
//!
//! Round bubble holding a single letter or symbol, used as the service icon.
//! Purely decorative: the service name is always rendered next to it.

use dioxus::prelude::*;

#[component]
pub fn GlyphAvatar(glyph: char) -> Element {
    rsx! {
        div { class: "glyph-avatar", "aria-hidden": "true", "{glyph}" }
    }
}
