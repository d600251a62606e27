//! Card Face Component
//!
//! Visual credit card: bank name, masked number, product name on an accent
//! gradient. Clicking it makes the card active.

use dioxus::prelude::*;
use subledger_core::{Card, CardId};

use crate::theme::accent_gradient;

#[derive(Props, Clone, PartialEq)]
pub struct CardFaceProps {
    pub card: Card,
    /// Whether this card is shown in the detail panel
    #[props(default = false)]
    pub active: bool,
    /// Called with the card id on click
    pub on_select: EventHandler<CardId>,
}

#[component]
pub fn CardFace(props: CardFaceProps) -> Element {
    let card_id = props.card.id;
    let gradient = accent_gradient(props.card.accent);
    let class = if props.active {
        "card-face card-face--active"
    } else {
        "card-face"
    };
    let masked = props.card.masked_number();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            style: "background: {gradient};",
            "aria-pressed": if props.active { "true" } else { "false" },
            onclick: move |_| props.on_select.call(card_id),

            div { class: "card-face__top",
                span { class: "card-face__bank", "{props.card.bank_name}" }
                span { class: "card-face__chip", "aria-hidden": "true", "\u{1F4B3}" }
            }
            div { class: "card-face__number", "{masked}" }
            div { class: "card-face__name", "{props.card.card_name}" }
        }
    }
}
