//! Card accent gradients.
//!
//! Accents are decorative only; the mapping lives here rather than in the
//! core types so the domain carries no CSS.

use subledger_core::CardAccent;

/// CSS background for a card face.
pub fn accent_gradient(accent: CardAccent) -> &'static str {
    match accent {
        CardAccent::Graphite => "linear-gradient(135deg, #374151 0%, #111827 100%)",
        CardAccent::Orchid => "linear-gradient(135deg, #9333ea 0%, #ec4899 100%)",
        CardAccent::Lagoon => "linear-gradient(135deg, #22c55e 0%, #2dd4bf 100%)",
        CardAccent::Ocean => "linear-gradient(135deg, #2563eb 0%, #06b6d4 100%)",
        CardAccent::Ember => "linear-gradient(135deg, #ea580c 0%, #f59e0b 100%)",
    }
}
