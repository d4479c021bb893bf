//! View State Controller
//!
//! Owns the `ViewState` and keeps locale and tab in step with the address
//! bar. User actions update the in-memory state first and then push exactly
//! one history entry. Navigation the controller did not cause (back/forward,
//! manual edits) is picked up by `on_navigation`, which re-derives the state
//! from the current location.
//!
//! Pushing never re-enters the controller: a push does not fire navigation
//! events, and `on_navigation` is idempotent for an unchanged location, so
//! there is no update loop between the two directions.

use tracing::{debug, warn};

use super::error::NavigationError;
use super::history::History;
use super::location::Location;
use super::types::{Locale, Tab, ViewState, LANG_PARAM};

/// Controller binding a `ViewState` to a `History`
#[derive(Debug)]
pub struct ViewController<H: History> {
    history: H,
    state: ViewState,
}

impl<H: History> ViewController<H> {
    /// Derive the initial state from the current location
    pub fn new(history: H) -> Self {
        let location = history.location();
        let state = ViewState::from_location(&location);
        debug!(url = %location, locale = %state.locale, tab = %state.tab, "Initial view state");

        Self { history, state }
    }

    /// Current state
    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access to the history, e.g. to simulate back/forward
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn into_history(self) -> H {
        self.history
    }

    /// Show `tab` and push `#tab`, keeping path and query
    pub fn select_tab(&mut self, tab: Tab) -> Result<(), NavigationError> {
        self.state.tab = tab;
        debug!(tab = %tab, "Tab selected");

        let next = self.history.location().with_fragment(tab.as_str());
        self.push(&next)
    }

    /// Switch to `locale` and push `lang=<locale>`, keeping path and fragment
    pub fn set_locale(&mut self, locale: Locale) -> Result<(), NavigationError> {
        self.state.locale = locale;
        debug!(locale = %locale, "Locale selected");

        let next = self
            .history
            .location()
            .with_query_param(LANG_PARAM, locale.as_str());
        self.push(&next)
    }

    /// Switch to the other locale
    pub fn toggle_locale(&mut self) -> Result<(), NavigationError> {
        self.set_locale(self.state.locale.toggled())
    }

    /// Flip the theme. Never touches the URL.
    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
        debug!(theme = ?self.state.theme, "Theme toggled");
    }

    /// React to a navigation event (popstate / hashchange).
    ///
    /// Returns `true` if the state changed.
    pub fn on_navigation(&mut self) -> bool {
        let location = self.history.location();
        let changed = self.state.sync_with(&location);
        if changed {
            debug!(url = %location, locale = %self.state.locale, tab = %self.state.tab, "View state restored from URL");
        }
        changed
    }

    fn push(&mut self, location: &Location) -> Result<(), NavigationError> {
        self.history.push(location).map_err(|e| {
            warn!(url = %location, error = %e, "Failed to push history entry");
            e
        })
    }
}
