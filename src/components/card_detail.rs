//! Card Detail Panel
//!
//! Subscriptions of the active card followed by its monthly total.

use dioxus::prelude::*;
use subledger_core::{monthly_total, template, Card, Locale, MessageKey};
use subledger_ui::format_amount;

use super::SubscriptionRow;

#[component]
pub fn CardDetail(locale: Locale, card: Card) -> Element {
    let total = format_amount(monthly_total(&card));
    let masked = card.masked_number();
    let empty_text = template(locale, MessageKey::NoSubscriptions);
    let total_label = template(locale, MessageKey::MonthlyTotal);

    rsx! {
        section { class: "card-detail",
            header { class: "card-detail__header",
                h2 { class: "section-header", "{card.bank_name} {card.card_name}" }
                span { class: "card-detail__digits", "{masked}" }
            }

            if card.subscriptions.is_empty() {
                div { class: "card-detail__empty",
                    span { class: "card-detail__empty-icon", "aria-hidden": "true", "\u{2713}" }
                    "{empty_text}"
                }
            } else {
                ul { class: "subscription-list",
                    for sub in card.subscriptions.iter() {
                        SubscriptionRow {
                            key: "{sub.id}",
                            locale: locale,
                            subscription: sub.clone(),
                        }
                    }
                }
            }

            footer { class: "card-detail__total",
                span { "{total_label}" }
                span { class: "card-detail__total-value", "{total}" }
            }
        }
    }
}
