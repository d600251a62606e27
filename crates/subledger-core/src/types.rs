//! Core types for Subledger

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Identifier of a card, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card_{}", self.0)
    }
}

/// Identifier of a subscription, unique across the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(pub u32);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub_{}", self.0)
    }
}

/// How often a subscription charges the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    /// Fixed charge every month
    Monthly,
    /// Usage-based or ad-hoc charges
    Irregular,
}

/// Non-negative amount in a currency-agnostic unit.
///
/// Fixtures may give it as a JSON number (`390`, `0.99`) or a decimal
/// string (`"4.50"`). It serializes as a decimal string so no precision is
/// lost on the way back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Validate a decimal amount.
    pub fn new(amount: Decimal) -> Result<Self, CatalogError> {
        if amount < Decimal::ZERO {
            Err(CatalogError::NegativePrice(amount))
        } else {
            Ok(Self(amount))
        }
    }

    /// Whole units, e.g. `Price::whole(390)`.
    pub fn whole(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Sum that stops at the largest representable amount.
    #[must_use]
    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl TryFrom<Decimal> for Price {
    type Error = CatalogError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl fmt::Display for Price {
    /// Trailing zeros are dropped: `390`, `0.99`, `4.5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Billing state of a subscription.
///
/// A trial always carries its end date, and a charging subscription can
/// never be mistaken for a trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Billing {
    /// Currently charging `price` every `cycle`
    Active { price: Price, cycle: BillingCycle },
    /// Free evaluation period ending on `ends_on`
    Trial { ends_on: NaiveDate },
}

/// A service billed to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier
    pub id: SubscriptionId,
    /// Display name, e.g. "Netflix"
    pub name: String,
    /// Trial or charging state
    pub billing: Billing,
    /// Where the user manages or cancels the subscription
    pub platform_url: String,
    /// Single glyph shown in the avatar bubble
    pub icon: char,
}

impl Subscription {
    /// Create a charging subscription.
    pub fn active(
        id: u32,
        name: impl Into<String>,
        price: Price,
        cycle: BillingCycle,
        platform_url: impl Into<String>,
        icon: char,
    ) -> Self {
        Self {
            id: SubscriptionId(id),
            name: name.into(),
            billing: Billing::Active { price, cycle },
            platform_url: platform_url.into(),
            icon,
        }
    }

    /// Create a free-trial subscription.
    pub fn trial(
        id: u32,
        name: impl Into<String>,
        ends_on: NaiveDate,
        platform_url: impl Into<String>,
        icon: char,
    ) -> Self {
        Self {
            id: SubscriptionId(id),
            name: name.into(),
            billing: Billing::Trial { ends_on },
            platform_url: platform_url.into(),
            icon,
        }
    }

    pub fn is_trial(&self) -> bool {
        matches!(self.billing, Billing::Trial { .. })
    }

    /// End date of the trial, if this is one.
    pub fn trial_end(&self) -> Option<NaiveDate> {
        match self.billing {
            Billing::Trial { ends_on } => Some(ends_on),
            Billing::Active { .. } => None,
        }
    }

    /// Price currently being charged; `None` during a trial.
    pub fn price(&self) -> Option<Price> {
        match self.billing {
            Billing::Active { price, .. } => Some(price),
            Billing::Trial { .. } => None,
        }
    }

    /// Billing cycle of a charging subscription.
    pub fn cycle(&self) -> Option<BillingCycle> {
        match self.billing {
            Billing::Active { cycle, .. } => Some(cycle),
            Billing::Trial { .. } => None,
        }
    }
}

/// Last four digits of a card number, exactly four ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Last4(String);

impl Last4 {
    /// Parse and validate a last-4 string.
    pub fn new(digits: impl Into<String>) -> Result<Self, CatalogError> {
        let digits = digits.into();
        if digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(digits))
        } else {
            Err(CatalogError::InvalidLast4(digits))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Last4 {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Last4> for String {
    fn from(value: Last4) -> Self {
        value.0
    }
}

impl fmt::Display for Last4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decorative accent of a card face. Carries no meaning beyond looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAccent {
    #[default]
    Graphite,
    Orchid,
    Lagoon,
    Ocean,
    Ember,
}

/// A credit card and the subscriptions billed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier
    pub id: CardId,
    /// Issuing institution, e.g. "國泰世華"
    pub bank_name: String,
    /// Card product, e.g. "CUBE 卡"
    pub card_name: String,
    /// Last four digits shown on the card face
    pub last4: Last4,
    /// Card face styling
    #[serde(default)]
    pub accent: CardAccent,
    /// Subscriptions in display order
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

impl Card {
    /// Create a card with no subscriptions.
    pub fn new(
        id: u32,
        bank_name: impl Into<String>,
        card_name: impl Into<String>,
        last4: Last4,
        accent: CardAccent,
    ) -> Self {
        Self {
            id: CardId(id),
            bank_name: bank_name.into(),
            card_name: card_name.into(),
            last4,
            accent,
            subscriptions: Vec::new(),
        }
    }

    /// Append a subscription (builder style).
    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscriptions.push(subscription);
        self
    }

    /// Card number as printed on the face, e.g. `**** **** **** 8899`.
    pub fn masked_number(&self) -> String {
        format!("**** **** **** {}", self.last4)
    }
}
