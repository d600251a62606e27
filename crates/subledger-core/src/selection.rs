//! Active card resolution for the master/detail view.

use crate::catalog::Catalog;
use crate::types::{Card, CardId};

/// Resolve the active card.
///
/// Returns the card with `requested` id, or the first card when nothing was
/// requested or the id is unknown. Never fails.
pub fn select_card(catalog: &Catalog, requested: Option<CardId>) -> &Card {
    match requested {
        Some(id) => catalog.get(id).unwrap_or_else(|| {
            let fallback = catalog.first();
            tracing::debug!(
                requested = %id,
                fallback = %fallback.id,
                "Card not in catalog, falling back to first card"
            );
            fallback
        }),
        None => catalog.first(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_existing_card() {
        let catalog = Catalog::demo();
        assert_eq!(select_card(&catalog, Some(CardId(2))).id, CardId(2));
        assert_eq!(select_card(&catalog, Some(CardId(3))).id, CardId(3));
    }

    #[test]
    fn test_select_unknown_falls_back_to_first() {
        let catalog = Catalog::demo();
        assert_eq!(select_card(&catalog, Some(CardId(9999))).id, CardId(1));
    }

    #[test]
    fn test_select_unset_is_first() {
        let catalog = Catalog::demo();
        assert_eq!(select_card(&catalog, None).id, CardId(1));
    }
}
