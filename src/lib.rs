//! # Graduates Dashboard
//!
//! Single-page dashboard of the AlmaLaurea 2024 profile of Computer Science
//! graduates (class L-31), in Italian and English, with light and dark
//! themes and four tabs kept in step with the page URL.
//!
//! ## Modules
//!
//! - [`state`]: View state (locale, tab, theme) and its URL synchronization
//! - [`i18n`]: Italian and English string bundles
//! - [`dataset`]: The report figures
//! - [`dashboard`]: Presentation model built from state and dataset
//! - [`config`]: Host configuration (`server` feature)
//! - [`server`]: Static hosting with Axum (`server` feature)
//!
//! The first four build for `wasm32-unknown-unknown`; the browser frontend
//! lives in the `dashboard-ui` crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use graduates_dashboard::{Page, DATASET};
//! use graduates_dashboard::state::{History, MemoryHistory, Tab, ViewController};
//!
//! let mut controller = ViewController::new(MemoryHistory::new("/?lang=en"));
//! controller.select_tab(Tab::Future).unwrap();
//!
//! let page = Page::build(&controller.state(), &DATASET);
//! assert_eq!(page.cards.len(), 2);
//! assert_eq!(controller.history().location().to_string(), "/?lang=en#future");
//! ```

pub mod dashboard;
pub mod dataset;
pub mod i18n;
pub mod state;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

// Re-export top-level types for convenience
pub use state::{
    History, Locale, Location, MemoryHistory, NavigationError, Tab, Theme, ViewController,
    ViewState,
};

pub use dashboard::{Card, CardId, ChartSpec, Page, Palette};

pub use dataset::{StatDataset, DATASET};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig, ResolvedConfig, ServerConfig};

#[cfg(feature = "server")]
pub use server::{build_router, serve, AppState, ServerError};
