//! Localized UI strings.
//!
//! Two locales, one dictionary per locale, both keyed by [`MessageKey`]. The
//! dictionaries are exhaustive `match`es, so adding a key without translating
//! it for every locale does not compile.
//!
//! Templates may contain `{name}` placeholders, filled from [`MessageArg`]s:
//!
//! ```
//! use subledger_core::{translate, Locale, MessageArg, MessageKey};
//!
//! let text = translate(Locale::En, MessageKey::AlertTitle, &[MessageArg::new("count", 2)]);
//! assert_eq!(text, "Warning! 2 free trials are expiring soon");
//! ```

use std::fmt;
use std::str::FromStr;


use crate::types::BillingCycle;

/// Supported UI locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Traditional Chinese (default)
    #[default]
    Zh,
    /// English
    En,
}

impl Locale {
    /// All supported locales, in toggle order.
    pub const ALL: [Locale; 2] = [Locale::Zh, Locale::En];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// The other locale.
    pub fn toggle(self) -> Self {
        match self {
            Locale::Zh => Locale::En,
            Locale::En => Locale::Zh,
        }
    }

    /// Label on the language button: names the locale a click switches to.
    pub fn switch_label(self) -> &'static str {
        match self {
            Locale::Zh => "EN",
            Locale::En => "中",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unsupported locale tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0} (expected zh or en)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts bare and region-tagged forms, case-insensitively (`zh-TW`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "zh" => Ok(Locale::Zh),
            "en" => Ok(Locale::En),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Every message the dashboard displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Title,
    Subtitle,
    /// Takes `{count}`
    AlertTitle,
    ExpiresOn,
    CancelAction,
    NoSubscriptions,
    TrialLabel,
    Monthly,
    Irregular,
    GoToPlatform,
    MonthlyTotal,
    ToggleLanguage,
    ToggleTheme,
}

impl MessageKey {
    pub const ALL: [MessageKey; 13] = [
        MessageKey::Title,
        MessageKey::Subtitle,
        MessageKey::AlertTitle,
        MessageKey::ExpiresOn,
        MessageKey::CancelAction,
        MessageKey::NoSubscriptions,
        MessageKey::TrialLabel,
        MessageKey::Monthly,
        MessageKey::Irregular,
        MessageKey::GoToPlatform,
        MessageKey::MonthlyTotal,
        MessageKey::ToggleLanguage,
        MessageKey::ToggleTheme,
    ];
}

impl From<BillingCycle> for MessageKey {
    fn from(cycle: BillingCycle) -> Self {
        match cycle {
            BillingCycle::Monthly => MessageKey::Monthly,
            BillingCycle::Irregular => MessageKey::Irregular,
        }
    }
}

/// A named value substituted into a template placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageArg {
    /// Placeholder name without braces, e.g. `count`
    pub name: &'static str,
    /// Preformatted value
    pub value: String,
}

impl MessageArg {
    pub fn new(name: &'static str, value: impl fmt::Display) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// Raw template for `key` in `locale`.
pub fn template(locale: Locale, key: MessageKey) -> &'static str {
    match locale {
        Locale::Zh => zh(key),
        Locale::En => en(key),
    }
}

/// Look up `key` and fill in any `{name}` placeholders from `args`.
///
/// Placeholders without a matching arg are left as-is.
pub fn translate(locale: Locale, key: MessageKey, args: &[MessageArg]) -> String {
    let mut text = template(locale, key).to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.name);
        text = text.replace(&placeholder, &arg.value);
    }
    text
}

/// Alert banner heading for `count` expiring trials.
pub fn alert_title(locale: Locale, count: usize) -> String {
    translate(locale, MessageKey::AlertTitle, &[MessageArg::new("count", count)])
}

fn zh(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "信用卡及訂閱管理中心",
        MessageKey::Subtitle => "統整您的所有信用卡訂閱服務與試用期提醒",
        MessageKey::AlertTitle => "注意！有 {count} 個免費試用即將到期",
        MessageKey::ExpiresOn => "到期",
        MessageKey::CancelAction => "去取消",
        MessageKey::NoSubscriptions => "目前無綁定訂閱",
        MessageKey::TrialLabel => "試用期",
        MessageKey::Monthly => "月繳",
        MessageKey::Irregular => "不定期",
        MessageKey::GoToPlatform => "前往管理",
        MessageKey::MonthlyTotal => "每月合計",
        MessageKey::ToggleLanguage => "切換語言",
        MessageKey::ToggleTheme => "切換深色模式",
    }
}

fn en(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Subscription Manager",
        MessageKey::Subtitle => "Manage all your credit card subscriptions and trial alerts",
        MessageKey::AlertTitle => "Warning! {count} free trials are expiring soon",
        MessageKey::ExpiresOn => "Expires on",
        MessageKey::CancelAction => "Cancel Now",
        MessageKey::NoSubscriptions => "No subscriptions linked",
        MessageKey::TrialLabel => "Free Trial",
        MessageKey::Monthly => "/ mo",
        MessageKey::Irregular => "Irregular",
        MessageKey::GoToPlatform => "Manage",
        MessageKey::MonthlyTotal => "Monthly total",
        MessageKey::ToggleLanguage => "Switch language",
        MessageKey::ToggleTheme => "Toggle dark mode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_title_en() {
        assert_eq!(alert_title(Locale::En, 2), "Warning! 2 free trials are expiring soon");
    }

    #[test]
    fn test_alert_title_zh() {
        assert_eq!(alert_title(Locale::Zh, 1), "注意！有 1 個免費試用即將到期");
    }

    #[test]
    fn test_translate_without_args_returns_template() {
        assert_eq!(translate(Locale::En, MessageKey::AlertTitle, &[]), "Warning! {count} free trials are expiring soon");
        assert_eq!(translate(Locale::Zh, MessageKey::Monthly, &[]), "月繳");
    }

    #[test]
    fn test_unrelated_args_are_ignored() {
        let text = translate(Locale::En, MessageKey::Title, &[MessageArg::new("count", 5)]);
        assert_eq!(text, "Subscription Manager");
    }

    #[test]
    fn test_every_key_translated_in_every_locale() {
        for locale in Locale::ALL {
            for key in MessageKey::ALL {
                assert!(!template(locale, key).is_empty(), "{locale} {key:?}");
            }
        }
    }

    #[test]
    fn test_locales_differ() {
        for key in MessageKey::ALL {
            assert_ne!(template(Locale::Zh, key), template(Locale::En, key), "{key:?}");
        }
    }

    #[test]
    fn test_toggle_roundtrip() {
        for locale in Locale::ALL {
            assert_ne!(locale.toggle(), locale);
            assert_eq!(locale.toggle().toggle(), locale);
        }
    }

    #[test]
    fn test_switch_label() {
        assert_eq!(Locale::Zh.switch_label(), "EN");
        assert_eq!(Locale::En.switch_label(), "中");
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("zh".parse::<Locale>().unwrap(), Locale::Zh);
        assert_eq!("zh-TW".parse::<Locale>().unwrap(), Locale::Zh);
        assert_eq!("EN_us".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_cycle_keys() {
        assert_eq!(MessageKey::from(BillingCycle::Monthly), MessageKey::Monthly);
        assert_eq!(MessageKey::from(BillingCycle::Irregular), MessageKey::Irregular);
    }
}
