//! Browser navigation
//!
//! `BrowserHistory` backs the view controller with `window.history`, and
//! `NavigationListener` reports back/forward and manual address edits.

use graduates_dashboard::state::{History, Location, NavigationError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Session history of the current window
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    window: web_sys::Window,
}

impl BrowserHistory {
    pub fn new() -> Result<Self, NavigationError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or_else(|| NavigationError::Unavailable("no global window".to_string()))
    }
}

impl History for BrowserHistory {
    fn location(&self) -> Location {
        let location = self.window.location();
        Location::from_parts(
            &location.pathname().unwrap_or_default(),
            &location.search().unwrap_or_default(),
            &location.hash().unwrap_or_default(),
        )
    }

    fn push(&mut self, location: &Location) -> Result<(), NavigationError> {
        let history = self
            .window
            .history()
            .map_err(|e| NavigationError::Unavailable(format!("{:?}", e)))?;

        history
            .push_state_with_url(&JsValue::NULL, "", Some(&location.to_string()))
            .map_err(|e| NavigationError::Rejected(format!("{:?}", e)))
    }
}

/// Events that change the address without going through the controller
const NAVIGATION_EVENTS: [&str; 2] = ["popstate", "hashchange"];

/// Window listeners for address changes, removed on drop
pub struct NavigationListener {
    window: web_sys::Window,
    _callback: Closure<dyn Fn()>,
}

impl NavigationListener {
    /// Call `on_change` on every back/forward step and fragment edit
    pub fn attach(on_change: impl Fn() + 'static) -> Result<Self, NavigationError> {
        let window = web_sys::window()
            .ok_or_else(|| NavigationError::Unavailable("no global window".to_string()))?;
        let callback = Closure::<dyn Fn()>::new(on_change);

        for event in NAVIGATION_EVENTS {
            window
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                .map_err(|e| NavigationError::Unavailable(format!("{:?}", e)))?;
        }

        Ok(Self {
            window,
            _callback: callback,
        })
    }
}

impl Drop for NavigationListener {
    fn drop(&mut self) {
        for event in NAVIGATION_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self._callback.as_ref().unchecked_ref());
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use graduates_dashboard::state::{Tab, ViewController};
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn push_updates_the_address_bar() {
        let mut history = BrowserHistory::new().unwrap();
        let target = history.location().with_query_param("lang", "en").with_fragment("future");

        history.push(&target).unwrap();

        let window = web_sys::window().unwrap();
        assert_eq!(window.location().hash().unwrap(), "#future");
        assert_eq!(history.location(), target);
    }

    #[wasm_bindgen_test]
    fn controller_keeps_the_query_when_selecting_a_tab() {
        let mut history = BrowserHistory::new().unwrap();
        let start = history.location().with_query_param("lang", "en");
        history.push(&start).unwrap();

        let mut controller = ViewController::new(history);
        controller.select_tab(Tab::Studies).unwrap();

        let location = controller.history().location();
        assert_eq!(location.query.get("lang"), Some("en"));
        assert_eq!(location.hash(), "#studies");
    }

    #[wasm_bindgen_test]
    fn dropped_listener_stops_firing() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let listener = NavigationListener::attach(move || counter.set(counter.get() + 1)).unwrap();

        let window = web_sys::window().unwrap();
        let event = web_sys::Event::new("hashchange").unwrap();
        window.dispatch_event(&event).unwrap();
        assert_eq!(hits.get(), 1);

        drop(listener);
        window.dispatch_event(&event).unwrap();
        assert_eq!(hits.get(), 1);
    }
}
