//! Dashboard page - the only view of Subledger.
//!
//! Header, trial alert, then a master/detail split: card faces on the left,
//! the active card's subscriptions and monthly total on the right.

use dioxus::prelude::*;
use subledger_core::{expiring_trials, Action, Subscription};

use crate::components::{CardDetail, CardFace, DashboardHeader, TrialAlert};
use crate::context::{use_app_state, use_catalog, use_dispatch};

#[component]
pub fn Dashboard() -> Element {
    let catalog = use_catalog();
    let state = use_app_state();
    let dispatch = use_dispatch();

    let current = state();
    let locale = current.locale;
    let theme_class = current.theme.as_str();

    // Derived on every render; the catalog is small and immutable
    let trials: Vec<Subscription> = expiring_trials(catalog).into_iter().cloned().collect();
    let active = current.active_card(catalog);
    let active_id = active.id;

    rsx! {
        div { class: "dashboard {theme_class}", lang: "{locale}",
            DashboardHeader {}

            TrialAlert { locale: locale, trials: trials }

            main { class: "dashboard__body",
                nav { class: "card-list",
                    for card in catalog.iter() {
                        CardFace {
                            key: "{card.id}",
                            card: card.clone(),
                            active: card.id == active_id,
                            on_select: move |id| dispatch.send(Action::SelectCard(id)),
                        }
                    }
                }

                CardDetail { locale: locale, card: active.clone() }
            }
        }
    }
}
