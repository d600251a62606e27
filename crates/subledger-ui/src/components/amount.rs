//! Money formatting
//!
//! Prices are currency-agnostic; the dashboard shows them with a plain `$`
//! prefix, no separators and no trailing zeros.

use dioxus::prelude::*;
use subledger_core::Price;

/// Format a price for display, e.g. `$390` or `$0.99`.
pub fn format_amount(amount: Price) -> String {
    format!("${}", amount)
}

/// Inline price with optional suffix (cycle label).
#[component]
pub fn Amount(
    value: Price,
    /// Text after the amount, e.g. "/ mo"
    #[props(default = None)]
    suffix: Option<String>,
) -> Element {
    let text = format_amount(value);

    rsx! {
        span { class: "amount",
            span { class: "amount__value", "{text}" }
            if let Some(suffix) = suffix {
                span { class: "amount__suffix", " {suffix}" }
            }
        }
    }
}
