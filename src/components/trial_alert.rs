//! Trial Alert Banner
//!
//! Amber banner listing every free trial with its end date and a link to
//! cancel it. Rendered only when at least one trial exists.

use dioxus::prelude::*;
use subledger_core::{alert_title, template, Locale, MessageKey, Subscription};
use subledger_ui::ExternalLink;

#[derive(Props, Clone, PartialEq)]
pub struct TrialAlertProps {
    /// Active locale
    pub locale: Locale,
    /// Trials in catalog order
    pub trials: Vec<Subscription>,
}

#[component]
pub fn TrialAlert(props: TrialAlertProps) -> Element {
    if props.trials.is_empty() {
        return rsx! {};
    }

    let locale = props.locale;
    let heading = alert_title(locale, props.trials.len());

    rsx! {
        section { class: "trial-alert", role: "alert",
            span { class: "trial-alert__icon", "aria-hidden": "true", "\u{26A0}" }
            div { class: "trial-alert__body",
                h3 { class: "trial-alert__title", "{heading}" }
                div { class: "trial-alert__grid",
                    for trial in props.trials.iter() {
                        TrialAlertItem {
                            key: "{trial.id}",
                            locale: locale,
                            trial: trial.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TrialAlertItem(locale: Locale, trial: Subscription) -> Element {
    let ends_on = trial
        .trial_end()
        .map(|date| date.to_string())
        .unwrap_or_default();
    let expires_on = template(locale, MessageKey::ExpiresOn);
    let cancel = template(locale, MessageKey::CancelAction);

    rsx! {
        div { class: "trial-alert__item",
            div {
                span { class: "trial-alert__name", "{trial.name}" }
                div { class: "trial-alert__date",
                    "{expires_on} {ends_on}"
                }
            }
            ExternalLink {
                href: trial.platform_url.clone(),
                class: "trial-alert__cancel".to_string(),
                "{cancel}"
            }
        }
    }
}
