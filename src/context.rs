//! Dashboard context for Subledger.
//!
//! The catalog is fixed before launch and lives in a process-wide static.
//! The mutable UI state is a single `Signal<AppState>` provided by [`App`]
//! and only ever replaced through [`Dispatch::send`].
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let catalog = use_catalog();
//! let state = use_app_state();
//! let dispatch = use_dispatch();
//!
//! button { onclick: move |_| dispatch.send(Action::ToggleTheme), "..." }
//! ```
//!
//! [`App`]: crate::app::App

use std::sync::OnceLock;

use dioxus::prelude::*;
use subledger_core::{Action, AppState, Catalog};

/// Catalog chosen at startup
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Locale/theme chosen at startup
static INITIAL_STATE: OnceLock<AppState> = OnceLock::new();

/// Store the startup catalog and state. Later calls are ignored.
pub fn install(catalog: Catalog, initial: AppState) {
    let _ = CATALOG.set(catalog);
    let _ = INITIAL_STATE.set(initial);
}

/// The catalog for this process (demo data if nothing was installed).
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::demo)
}

/// State the dashboard opens with.
pub fn initial_state() -> AppState {
    INITIAL_STATE.get().copied().unwrap_or_default()
}

/// Hook to access the catalog.
pub fn use_catalog() -> &'static Catalog {
    use_context::<&'static Catalog>()
}

/// Hook to read the dashboard state.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Sends user actions through the state reducer.
#[derive(Clone, Copy, PartialEq)]
pub struct Dispatch(Signal<AppState>);

impl Dispatch {
    pub fn send(mut self, action: Action) {
        let next = self.0.peek().reduce(action);
        self.0.set(next);
    }
}

/// Hook to obtain a [`Dispatch`] handle.
pub fn use_dispatch() -> Dispatch {
    Dispatch(use_app_state())
}
