//! Button Component
//!
//! Bordered header control used by the language and theme switches.

use dioxus::prelude::*;

const BASE_CLASS: &str = "btn-toggle";

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Accessible label, for icon-only content
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         aria_label: "Switch language".to_string(),
///         onclick: move |_| dispatch.send(Action::ToggleLocale),
///         "EN"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(BASE_CLASS, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": props.aria_label.clone(),
            title: props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_classes_skips_empty_extra() {
        assert_eq!(join_classes(BASE_CLASS, None), "btn-toggle");
        assert_eq!(join_classes(BASE_CLASS, Some("")), "btn-toggle");
        assert_eq!(
            join_classes(BASE_CLASS, Some("theme-toggle theme-toggle--sun")),
            "btn-toggle theme-toggle theme-toggle--sun"
        );
    }
}
