//! Dashboard Header Component
//!
//! Title and subtitle on the left, language and theme toggles on the right.

use dioxus::prelude::*;
use subledger_core::{template, Action, MessageKey};
use subledger_ui::{LocaleToggle, ThemeToggle};

use crate::context::{use_app_state, use_dispatch};

#[component]
pub fn DashboardHeader() -> Element {
    let state = use_app_state();
    let dispatch = use_dispatch();

    let current = state();
    let locale = current.locale;
    let title = template(locale, MessageKey::Title);
    let subtitle = template(locale, MessageKey::Subtitle);

    rsx! {
        header { class: "dashboard-header",
            div { class: "dashboard-header__titles",
                h1 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }
            }

            div { class: "dashboard-header__controls",
                LocaleToggle {
                    locale: locale,
                    label: template(locale, MessageKey::ToggleLanguage).to_string(),
                    on_toggle: move |_| dispatch.send(Action::ToggleLocale),
                }
                ThemeToggle {
                    theme: current.theme,
                    label: template(locale, MessageKey::ToggleTheme).to_string(),
                    on_toggle: move |_| dispatch.send(Action::ToggleTheme),
                }
            }
        }
    }
}
