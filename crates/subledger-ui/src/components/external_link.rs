//! External Link
//!
//! Outbound link to a service's management page. Always opens in a new,
//! unrelated navigation context.

use dioxus::prelude::*;

/// Properties for the ExternalLink component
#[derive(Clone, PartialEq, Props)]
pub struct ExternalLinkProps {
    /// Destination URL
    pub href: String,
    /// Link content
    pub children: Element,
    /// Tooltip / accessible title
    #[props(default)]
    pub title: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Anchor with `target="_blank"` and `rel="noreferrer"`.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ExternalLink {
///         href: sub.platform_url.clone(),
///         class: "trial-alert__cancel".to_string(),
///         "Cancel Now"
///     }
/// }
/// ```
#[component]
pub fn ExternalLink(props: ExternalLinkProps) -> Element {
    let class = match props.class.as_deref() {
        Some(extra) => format!("external-link {}", extra),
        None => "external-link".to_string(),
    };
    let href = props.href.clone();

    rsx! {
        a {
            class: "{class}",
            href: "{props.href}",
            target: "_blank",
            rel: "noreferrer",
            title: props.title.clone(),
            onclick: move |_| {
                tracing::info!(url = %href, "Opening external management page");
            },
            {props.children}
            span { class: "external-link__arrow", "aria-hidden": "true", "\u{2197}" }
        }
    }
}
