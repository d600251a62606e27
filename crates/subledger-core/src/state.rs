//! Dashboard UI state and its reducer.
//!
//! The three user-facing toggles (locale, theme, active card) are independent
//! fields of one `Copy` value. The presentation layer holds it in a signal and
//! only ever replaces it with `state.reduce(action)`.

use crate::catalog::Catalog;
use crate::locale::Locale;
use crate::selection::select_card;
use crate::theme::Theme;
use crate::types::{Card, CardId};

/// Everything the user can change on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppState {
    pub locale: Locale,
    pub theme: Theme,
    /// Requested active card; resolved against the catalog on read
    pub active_card: Option<CardId>,
}

/// A user action on the dashboard controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleLocale,
    ToggleTheme,
    SelectCard(CardId),
}

impl AppState {
    /// Initial state with a given locale and theme and no card selected.
    pub fn new(locale: Locale, theme: Theme) -> Self {
        Self {
            locale,
            theme,
            active_card: None,
        }
    }

    /// Apply `action`, returning the next state. Total; never fails.
    #[must_use]
    pub fn reduce(self, action: Action) -> Self {
        tracing::debug!(?action, "Applying dashboard action");
        match action {
            Action::ToggleLocale => Self {
                locale: self.locale.toggle(),
                ..self
            },
            Action::ToggleTheme => Self {
                theme: self.theme.toggle(),
                ..self
            },
            Action::SelectCard(id) => Self {
                active_card: Some(id),
                ..self
            },
        }
    }

    /// The card shown in the detail panel.
    pub fn active_card<'a>(&self, catalog: &'a Catalog) -> &'a Card {
        select_card(catalog, self.active_card)
    }
}
