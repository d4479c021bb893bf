//! State Management
//!
//! Reactive dashboard state and its binding to the browser history.

pub mod dashboard;
pub mod navigation;

pub use dashboard::{provide_dashboard_state, DashboardState};
pub use navigation::{BrowserHistory, NavigationListener};
