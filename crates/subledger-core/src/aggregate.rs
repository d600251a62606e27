//! Derived figures: trial alerts and monthly totals.
//!
//! Pure functions over borrowed catalog data. Nothing here allocates beyond
//! the returned vector, and nothing can fail.

use crate::catalog::Catalog;
use crate::types::{Billing, BillingCycle, Card, Price, Subscription};

/// Every free trial across all cards, in card order then subscription order.
///
/// No deduplication and no sorting by date. Every trial is flagged no matter
/// how far away its end date is.
pub fn expiring_trials(catalog: &Catalog) -> Vec<&Subscription> {
    catalog
        .iter()
        .flat_map(|card| card.subscriptions.iter())
        .filter(|sub| sub.is_trial())
        .collect()
}

/// Same sequence as [`expiring_trials`], paired with the owning card.
pub fn expiring_trials_with_cards(catalog: &Catalog) -> Vec<(&Card, &Subscription)> {
    catalog
        .iter()
        .flat_map(|card| card.subscriptions.iter().map(move |sub| (card, sub)))
        .filter(|(_, sub)| sub.is_trial())
        .collect()
}

/// Sum of monthly charges currently billed to `card`.
///
/// Trials are not charged yet and irregular charges are not recurring, so
/// both are left out. A card with nothing qualifying totals 0.
pub fn monthly_total(card: &Card) -> Price {
    card.subscriptions
        .iter()
        .filter_map(|sub| match sub.billing {
            Billing::Active {
                price,
                cycle: BillingCycle::Monthly,
            } => Some(price),
            _ => None,
        })
        .fold(Price::ZERO, Price::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CardAccent, CardId, Last4, SubscriptionId};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn card(id: u32) -> Card {
        Card::new(id, "Bank", "Card", Last4::new("4321").unwrap(), CardAccent::Graphite)
    }

    #[test]
    fn test_monthly_total_sums_active_monthly() {
        let card = card(1)
            .with_subscription(Subscription::active(1, "A", Price::whole(390), BillingCycle::Monthly, "https://a", 'A'))
            .with_subscription(Subscription::active(2, "B", Price::whole(149), BillingCycle::Monthly, "https://b", 'B'))
            .with_subscription(Subscription::active(3, "C", Price::whole(199), BillingCycle::Monthly, "https://c", 'C'));
        assert_eq!(monthly_total(&card), Price::whole(738));
    }

    #[test]
    fn test_monthly_total_excludes_trials_and_irregular() {
        let card = card(1)
            .with_subscription(Subscription::active(1, "A", Price::whole(390), BillingCycle::Monthly, "https://a", 'A'))
            .with_subscription(Subscription::active(2, "B", Price::whole(1000), BillingCycle::Irregular, "https://b", 'B'))
            .with_subscription(Subscription::trial(3, "C", date(2024, 1, 5), "https://c", 'C'));
        assert_eq!(monthly_total(&card), Price::whole(390));
    }

    #[test]
    fn test_monthly_total_empty_card() {
        assert_eq!(monthly_total(&card(1)), Price::ZERO);
    }

    #[test]
    fn test_monthly_total_saturates() {
        let max = Price::new(Decimal::MAX).unwrap();
        let card = card(1)
            .with_subscription(Subscription::active(1, "A", max, BillingCycle::Monthly, "https://a", 'A'))
            .with_subscription(Subscription::active(2, "B", Price::whole(1), BillingCycle::Monthly, "https://b", 'B'));
        assert_eq!(monthly_total(&card), max);
    }

    #[test]
    fn test_monthly_total_fractional() {
        let cents = |c| Price::new(Decimal::new(c, 2)).unwrap();
        let card = card(1)
            .with_subscription(Subscription::active(1, "A", cents(99), BillingCycle::Monthly, "https://a", 'A'))
            .with_subscription(Subscription::active(2, "B", cents(1001), BillingCycle::Monthly, "https://b", 'B'))
            .with_subscription(Subscription::active(3, "C", cents(250), BillingCycle::Irregular, "https://c", 'C'));
        assert_eq!(monthly_total(&card), cents(1100));
        assert_eq!(monthly_total(&card).to_string(), "11");
    }

    #[test]
    fn test_demo_totals() {
        let catalog = Catalog::demo();
        let totals: Vec<Price> = catalog.iter().map(monthly_total).collect();
        assert_eq!(totals, vec![Price::whole(539), Price::ZERO, Price::ZERO]);
    }

    #[test]
    fn test_expiring_trials_demo() {
        let catalog = Catalog::demo();
        let trials = expiring_trials(&catalog);
        assert_eq!(trials.len(), 1);
        assert_eq!(trials[0].name, "Adobe CC");
        assert_eq!(trials[0].trial_end(), Some(date(2024, 1, 5)));
    }

    #[test]
    fn test_expiring_trials_keeps_catalog_order_not_date_order() {
        let catalog = Catalog::new(vec![
            card(1).with_subscription(Subscription::trial(11, "Later", date(2024, 2, 5), "https://l", 'L')),
            card(2).with_subscription(Subscription::trial(21, "Sooner", date(2024, 1, 20), "https://s", 'S')),
        ])
        .unwrap();

        let ids: Vec<SubscriptionId> = expiring_trials(&catalog).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![SubscriptionId(11), SubscriptionId(21)]);
    }

    #[test]
    fn test_expiring_trials_with_cards_pairs_owner() {
        let catalog = Catalog::demo();
        let pairs = expiring_trials_with_cards(&catalog);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.id, CardId(2));
        assert_eq!(pairs[0].1.id, SubscriptionId(201));
    }

    #[test]
    fn test_no_trials() {
        let catalog = Catalog::new(vec![card(1)]).unwrap();
        assert!(expiring_trials(&catalog).is_empty());
        assert!(expiring_trials_with_cards(&catalog).is_empty());
    }
}
