//! Dashboard State
//!
//! Reactive wrapper around the view controller. The controller owns the
//! browser history; `view` mirrors its state so components can track it.

use graduates_dashboard::state::{NavigationError, Tab, ViewController, ViewState};
use leptos::*;

use super::navigation::{BrowserHistory, NavigationListener};

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    controller: StoredValue<ViewController<BrowserHistory>>,
    /// Locale, tab and theme currently shown
    pub view: RwSignal<ViewState>,
}

/// Create the dashboard state from the current address, provide it as
/// context and keep it in step with back/forward navigation until the
/// owning scope is cleaned up.
pub fn provide_dashboard_state() -> Result<DashboardState, NavigationError> {
    let controller = ViewController::new(BrowserHistory::new()?);
    let state = DashboardState {
        view: create_rw_signal(controller.state()),
        controller: store_value(controller),
    };

    let listener = NavigationListener::attach(move || state.on_navigation())?;
    on_cleanup(move || drop(listener));

    provide_context(state);
    Ok(state)
}

impl DashboardState {
    /// Show `tab` and push `#tab`
    pub fn select_tab(&self, tab: Tab) {
        self.apply(|controller| controller.select_tab(tab));
    }

    /// Switch locale and push the new `lang` parameter
    pub fn toggle_locale(&self) {
        self.apply(|controller| controller.toggle_locale());
    }

    /// Switch theme; the address is left alone
    pub fn toggle_theme(&self) {
        self.apply(|controller| {
            controller.toggle_theme();
            Ok(())
        });
    }

    /// Re-derive locale and tab after the address changed under us
    pub fn on_navigation(&self) {
        let changed = self
            .controller
            .try_update_value(|controller| controller.on_navigation().then(|| controller.state()))
            .flatten();

        if let Some(view) = changed {
            self.view.set(view);
        }
    }

    fn apply(
        &self,
        action: impl FnOnce(&mut ViewController<BrowserHistory>) -> Result<(), NavigationError>,
    ) {
        let outcome = self.controller.try_update_value(|controller| {
            let result = action(controller);
            (controller.state(), result)
        });

        let Some((view, result)) = outcome else {
            return;
        };
        // The view follows the user's choice even if the address could not
        if let Err(e) = result {
            web_sys::console::warn_1(&format!("Navigation failed: {}", e).into());
        }
        self.view.set(view);
    }
}
