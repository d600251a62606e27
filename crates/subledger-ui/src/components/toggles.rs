//! Header Toggles
//!
//! Language and theme switches. Both are stateless: they render the current
//! value and report clicks, the owner decides what a click does.

use dioxus::prelude::*;
use subledger_core::{Locale, Theme};

use super::button::Button;

/// Language switch showing a globe and the locale a click switches to.
#[component]
pub fn LocaleToggle(
    /// Currently active locale
    locale: Locale,
    /// Accessible label, already localized
    label: String,
    on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        Button {
            class: "locale-toggle".to_string(),
            aria_label: label,
            onclick: move |_| on_toggle.call(()),
            span { class: "locale-toggle__globe", "aria-hidden": "true", "\u{1F310}" }
            span { class: "locale-toggle__label", "{locale.switch_label()}" }
        }
    }
}

/// Theme switch: moon while light (click for dark), sun while dark.
#[component]
pub fn ThemeToggle(
    /// Currently active theme
    theme: Theme,
    /// Accessible label, already localized
    label: String,
    on_toggle: EventHandler<()>,
) -> Element {
    let (glyph, modifier) = theme_glyph(theme);

    rsx! {
        Button {
            class: format!("theme-toggle {}", modifier),
            aria_label: label,
            onclick: move |_| on_toggle.call(()),
            span { "aria-hidden": "true", "{glyph}" }
        }
    }
}

fn theme_glyph(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Light => ("\u{263E}", "theme-toggle--moon"),
        Theme::Dark => ("\u{2600}", "theme-toggle--sun"),
    }
}
