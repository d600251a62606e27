//! Plain-text rendering of the dashboard for `--summary`.
//!
//! Same content as the window, in the same order: title, trial alert (only
//! when there are trials), then every card with its subscriptions and
//! monthly total.

use std::fmt::{self, Write};

use subledger_core::{
    alert_title, expiring_trials_with_cards, monthly_total, template, Catalog, Locale, MessageKey,
    Subscription,
};
use subledger_ui::format_amount;

pub fn render(catalog: &Catalog, locale: Locale) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_summary(&mut out, catalog, locale)?;
    Ok(out)
}

fn write_summary(out: &mut impl Write, catalog: &Catalog, locale: Locale) -> fmt::Result {
    let t = |key| template(locale, key);

    writeln!(out, "{}", t(MessageKey::Title))?;

    let trials = expiring_trials_with_cards(catalog);
    if !trials.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", alert_title(locale, trials.len()))?;
        for (card, sub) in &trials {
            if let Some(ends_on) = sub.trial_end() {
                writeln!(
                    out,
                    "  ! {} ({} {}) {} {}",
                    sub.name,
                    card.bank_name,
                    card.card_name,
                    t(MessageKey::ExpiresOn),
                    ends_on
                )?;
            }
        }
    }

    for card in catalog {
        writeln!(out)?;
        writeln!(out, "{} {}  {}", card.bank_name, card.card_name, card.masked_number())?;

        if card.subscriptions.is_empty() {
            writeln!(out, "  {}", t(MessageKey::NoSubscriptions))?;
        } else {
            for sub in &card.subscriptions {
                writeln!(out, "  {} {}  {}", sub.icon, sub.name, billing_label(sub, locale))?;
            }
        }

        writeln!(
            out,
            "  {}: {}",
            t(MessageKey::MonthlyTotal),
            format_amount(monthly_total(card))
        )?;
    }

    Ok(())
}

/// "$390 / mo", "$0 Irregular" or the trial badge text.
pub fn billing_label(sub: &Subscription, locale: Locale) -> String {
    match (sub.price(), sub.cycle()) {
        (Some(price), Some(cycle)) => {
            format!("{} {}", format_amount(price), template(locale, cycle.into()))
        }
        _ => template(locale, MessageKey::TrialLabel).to_string(),
    }
}
