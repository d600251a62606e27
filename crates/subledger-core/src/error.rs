//! Error types for Subledger

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::{CardId, SubscriptionId};

/// Errors raised while building or loading a [`Catalog`](crate::Catalog).
///
/// Every derived operation (totals, trials, selection) is total; only the
/// edges where card data enters the process can fail.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A catalog must hold at least one card
    #[error("Catalog has no cards")]
    Empty,

    /// Two cards share an identifier
    #[error("Duplicate card id: {0}")]
    DuplicateCard(CardId),

    /// Two subscriptions share an identifier (ids are catalog-wide)
    #[error("Duplicate subscription id: {0}")]
    DuplicateSubscription(SubscriptionId),

    /// Last-4 display string is not exactly four ASCII digits
    #[error("Invalid last 4 digits: {0:?}")]
    InvalidLast4(String),

    /// Prices cannot be negative
    #[error("Negative price: {0}")]
    NegativePrice(Decimal),

    /// Catalog fixture could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog fixture could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
