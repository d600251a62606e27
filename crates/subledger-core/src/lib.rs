//! Subledger Core Library
//!
//! Credit cards, the subscriptions billed to them, and the handful of derived
//! figures the dashboard shows.
//!
//! ## Overview
//!
//! A [`Catalog`] is an immutable, non-empty list of [`Card`]s, each owning an
//! ordered list of [`Subscription`]s. Everything else is derived from it:
//!
//! - [`expiring_trials`]: every free trial across all cards, in display order
//! - [`monthly_total`]: what a card is charged per month right now
//! - [`select_card`]: the active card for the master/detail view
//! - [`translate`]: localized UI strings for the two supported locales
//!
//! UI toggles (locale, theme, active card) live in a single [`AppState`]
//! value that only changes through [`AppState::reduce`].
//!
//! ## Quick Start
//!
//! ```
//! use subledger_core::{alert_title, expiring_trials, monthly_total, Catalog, Locale};
//!
//! let catalog = Catalog::demo();
//! let trials = expiring_trials(&catalog);
//! println!("{}", alert_title(Locale::En, trials.len()));
//!
//! for card in catalog.cards() {
//!     println!("{} {}: ${}", card.bank_name, card.card_name, monthly_total(card));
//! }
//! ```

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod locale;
pub mod selection;
pub mod state;
pub mod theme;
pub mod types;

// Re-exports
pub use aggregate::{expiring_trials, expiring_trials_with_cards, monthly_total};
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use locale::{alert_title, template, translate, Locale, MessageArg, MessageKey, UnknownLocale};
pub use selection::select_card;
pub use state::{Action, AppState};
pub use theme::{Theme, UnknownTheme};
pub use types::*;

pub use rust_decimal::Decimal;
