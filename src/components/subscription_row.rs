//! Subscription Row Component
//!
//! One line in the card detail: glyph avatar, name, price or trial badge,
//! and a manage link revealed on hover.

use dioxus::prelude::*;
use subledger_core::{template, Locale, MessageKey, Subscription};
use subledger_ui::{Amount, ExternalLink, GlyphAvatar};

#[component]
pub fn SubscriptionRow(locale: Locale, subscription: Subscription) -> Element {
    let manage = template(locale, MessageKey::GoToPlatform).to_string();

    // Trials show a badge instead of a price
    let billing = match (subscription.price(), subscription.cycle()) {
        (Some(price), Some(cycle)) => {
            let cycle_label = template(locale, cycle.into()).to_string();
            rsx! {
                Amount { value: price, suffix: cycle_label }
            }
        }
        _ => {
            let trial_label = template(locale, MessageKey::TrialLabel);
            rsx! {
                span { class: "trial-badge", "{trial_label}" }
            }
        }
    };

    rsx! {
        li { class: "subscription-row",
            div { class: "subscription-row__main",
                GlyphAvatar { glyph: subscription.icon }
                div {
                    div { class: "subscription-row__name", "{subscription.name}" }
                    div { class: "subscription-row__billing", {billing} }
                }
            }

            ExternalLink {
                href: subscription.platform_url.clone(),
                title: manage.clone(),
                class: "subscription-row__manage".to_string(),
                span { class: "sr-only", "{manage}" }
            }
        }
    }
}
