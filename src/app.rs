use dioxus::prelude::*;
use subledger_core::AppState;

use crate::context;
use crate::pages::Dashboard;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the catalog and the dashboard state.
#[component]
pub fn App() -> Element {
    let state: Signal<AppState> = use_signal(context::initial_state);

    use_context_provider(context::catalog);
    use_context_provider(|| state);

    rsx! {
        style { {GLOBAL_STYLES} }
        Dashboard {}
    }
}
