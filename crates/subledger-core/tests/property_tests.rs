//! Property-based tests for catalog aggregation and dashboard state
//!
//! Uses proptest to check the aggregator, selection and reducer against
//! straightforward reference computations over random catalogs.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use subledger_core::{
    alert_title, expiring_trials, monthly_total, select_card, Action, AppState, Billing,
    BillingCycle, Card, CardAccent, CardId, Catalog, Decimal, Last4, Locale, Price,
    Subscription, Theme,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn cycle_strategy() -> impl Strategy<Value = BillingCycle> {
    prop_oneof![Just(BillingCycle::Monthly), Just(BillingCycle::Irregular)]
}

/// Non-negative prices with zero to two decimal places
fn price_strategy() -> impl Strategy<Value = Price> {
    (0i64..10_000_000, 0u32..=2).prop_map(|(units, scale)| Price::new(Decimal::new(units, scale)).unwrap())
}

fn billing_strategy() -> impl Strategy<Value = Billing> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    prop_oneof![
        3 => (price_strategy(), cycle_strategy()).prop_map(|(price, cycle)| Billing::Active { price, cycle }),
        1 => (0u64..730).prop_map(move |offset| Billing::Trial {
            ends_on: base.checked_add_days(Days::new(offset)).unwrap(),
        }),
    ]
}

/// Card shapes: one billing entry per subscription
fn card_shapes_strategy(max_cards: usize) -> impl Strategy<Value = Vec<Vec<Billing>>> {
    prop::collection::vec(prop::collection::vec(billing_strategy(), 0..6), 1..max_cards)
}

/// Build a valid catalog with sequential, unique ids from card shapes
fn build_catalog(shapes: &[Vec<Billing>]) -> Catalog {
    let mut next_sub = 1u32;
    let cards = shapes
        .iter()
        .enumerate()
        .map(|(i, billings)| {
            let mut card = Card::new(
                (i as u32 + 1) * 10,
                format!("Bank {i}"),
                format!("Card {i}"),
                Last4::new(format!("{:04}", i)).unwrap(),
                CardAccent::Ocean,
            );
            for billing in billings {
                card = card.with_subscription(Subscription {
                    id: subledger_core::SubscriptionId(next_sub),
                    name: format!("Service {next_sub}"),
                    billing: billing.clone(),
                    platform_url: format!("https://service{next_sub}.example"),
                    icon: 'X',
                });
                next_sub += 1;
            }
            card
        })
        .collect();
    Catalog::new(cards).unwrap()
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::ToggleLocale),
        Just(Action::ToggleTheme),
        (0u32..100).prop_map(|id| Action::SelectCard(CardId(id))),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// expiring_trials returns exactly the trials, in card-then-subscription order
    #[test]
    fn expiring_trials_matches_reference(shapes in card_shapes_strategy(8)) {
        let catalog = build_catalog(&shapes);

        let mut expected = Vec::new();
        for card in catalog.cards() {
            for sub in &card.subscriptions {
                if sub.trial_end().is_some() {
                    expected.push(sub.id);
                }
            }
        }

        let actual: Vec<_> = expiring_trials(&catalog).iter().map(|s| s.id).collect();
        prop_assert_eq!(actual, expected);
    }

    /// The alert heading reports the number of expiring trials
    #[test]
    fn alert_count_matches_trials(shapes in card_shapes_strategy(8)) {
        let catalog = build_catalog(&shapes);
        let count = expiring_trials(&catalog).len();
        let heading = alert_title(Locale::En, count);
        let expected = format!("Warning! {} free trials", count);
        prop_assert!(heading.starts_with(&expected));
    }

    /// monthly_total sums active monthly prices and nothing else
    #[test]
    fn monthly_total_matches_reference(shapes in card_shapes_strategy(4)) {
        let catalog = build_catalog(&shapes);
        for card in catalog.cards() {
            let expected: Decimal = card
                .subscriptions
                .iter()
                .filter(|s| !s.is_trial() && s.cycle() == Some(BillingCycle::Monthly))
                .filter_map(|s| s.price())
                .map(Price::amount)
                .sum();
            prop_assert_eq!(monthly_total(card).amount(), expected);
        }
    }

    /// Selecting a present id returns that card; anything else returns the first
    #[test]
    fn select_card_resolves_or_falls_back(shapes in card_shapes_strategy(8), requested in 0u32..120) {
        let catalog = build_catalog(&shapes);
        let selected = select_card(&catalog, Some(CardId(requested)));
        match catalog.get(CardId(requested)) {
            Some(card) => {
                prop_assert_eq!(selected.id, card.id);
            }
            None => {
                prop_assert_eq!(selected.id, catalog.cards()[0].id);
            }
        }
    }

    /// The active card always belongs to the catalog, whatever the user did
    #[test]
    fn active_card_always_in_catalog(
        shapes in card_shapes_strategy(8),
        actions in prop::collection::vec(action_strategy(), 0..30)
    ) {
        let catalog = build_catalog(&shapes);
        let state = actions.into_iter().fold(AppState::default(), AppState::reduce);
        let active = state.active_card(&catalog);
        prop_assert!(catalog.get(active.id).is_some());
    }

    /// Locale and theme only change through their own toggles
    #[test]
    fn toggle_counts_determine_locale_and_theme(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let locale_flips = actions.iter().filter(|a| **a == Action::ToggleLocale).count();
        let theme_flips = actions.iter().filter(|a| **a == Action::ToggleTheme).count();

        let state = actions.into_iter().fold(AppState::default(), AppState::reduce);

        let expected_locale = if locale_flips % 2 == 0 { Locale::Zh } else { Locale::En };
        let expected_theme = if theme_flips % 2 == 0 { Theme::Light } else { Theme::Dark };
        prop_assert_eq!(state.locale, expected_locale);
        prop_assert_eq!(state.theme, expected_theme);
    }

    /// JSON fixtures survive a serialize/parse cycle with order intact
    #[test]
    fn catalog_json_preserves_order(shapes in card_shapes_strategy(5)) {
        let catalog = build_catalog(&shapes);
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed = Catalog::from_json_str(&json).unwrap();
        prop_assert_eq!(parsed, catalog);
    }
}
