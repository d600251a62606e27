//! The immutable set of cards known to the dashboard.
//!
//! A [`Catalog`] is built once at startup, either from the built-in demo data
//! or from a JSON fixture, and never changes afterwards. Construction is the
//! only place card data is validated:
//!
//! - at least one card is present
//! - card ids are unique
//! - subscription ids are unique across every card
//! - prices are not negative (checked while parsing)
//!
//! Everything downstream (totals, trial alerts, selection) relies on these
//! holding and therefore cannot fail.
//!
//! ## Fixture format
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "bank_name": "國泰世華",
//!     "card_name": "CUBE 卡",
//!     "last4": "8899",
//!     "accent": "graphite",
//!     "subscriptions": [
//!       {
//!         "id": 101,
//!         "name": "Netflix",
//!         "billing": { "status": "active", "price": 390, "cycle": "monthly" },
//!         "platform_url": "https://www.netflix.com",
//!         "icon": "N"
//!       },
//!       {
//!         "id": 102,
//!         "name": "iCloud+",
//!         "billing": { "status": "active", "price": 0.99, "cycle": "monthly" },
//!         "platform_url": "https://www.icloud.com",
//!         "icon": "i"
//!       }
//!     ]
//!   }
//! ]
//! ```

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::types::{BillingCycle, Card, CardAccent, CardId, Last4, Price, Subscription};

/// Ordered, non-empty list of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Build a catalog, validating emptiness and id uniqueness.
    pub fn new(cards: Vec<Card>) -> CatalogResult<Self> {
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut card_ids = HashSet::new();
        let mut subscription_ids = HashSet::new();
        for card in &cards {
            if !card_ids.insert(card.id) {
                return Err(CatalogError::DuplicateCard(card.id));
            }
            for sub in &card.subscriptions {
                if !subscription_ids.insert(sub.id) {
                    return Err(CatalogError::DuplicateSubscription(sub.id));
                }
            }
        }

        Ok(Self { cards })
    }

    /// Parse a catalog from a JSON array of cards.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// Read and parse a JSON catalog fixture.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            cards = catalog.len(),
            "Loaded catalog fixture"
        );
        Ok(catalog)
    }

    /// Built-in demo data shown when no fixture is supplied.
    pub fn demo() -> Self {
        let cathay = Card::new(1, "國泰世華", "CUBE 卡", demo_last4("8899"), CardAccent::Graphite)
            .with_subscription(Subscription::active(
                101,
                "Netflix",
                Price::whole(390),
                BillingCycle::Monthly,
                "https://www.netflix.com",
                'N',
            ))
            .with_subscription(Subscription::active(
                102,
                "Spotify",
                Price::whole(149),
                BillingCycle::Monthly,
                "https://spotify.com",
                'S',
            ));

        let esun = Card::new(2, "玉山銀行", "U Bear 卡", demo_last4("1234"), CardAccent::Orchid)
            .with_subscription(Subscription::trial(
                201,
                "Adobe CC",
                demo_date(2024, 1, 5),
                "https://adobe.com",
                'A',
            ))
            .with_subscription(Subscription::active(
                202,
                "Shopee",
                Price::ZERO,
                BillingCycle::Irregular,
                "https://shopee.tw",
                'S',
            ));

        let ctbc = Card::new(3, "中國信託", "LinePay 卡", demo_last4("5678"), CardAccent::Lagoon);

        Self {
            cards: vec![cathay, esun, ctbc],
        }
    }

    /// All cards in display order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The default card. Always present.
    pub fn first(&self) -> &Card {
        // Non-empty by construction
        &self.cards[0]
    }

    /// Look up a card by id.
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

impl TryFrom<Vec<Card>> for Catalog {
    type Error = CatalogError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl From<Catalog> for Vec<Card> {
    fn from(catalog: Catalog) -> Self {
        catalog.cards
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

fn demo_last4(digits: &'static str) -> Last4 {
    Last4::new(digits).unwrap_or_else(|_| unreachable!("demo digits are valid"))
}

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| unreachable!("demo dates are valid"))
}
