//! View state
//!
//! Owns the dashboard's `{locale, tab, theme}` and keeps locale and tab
//! consistent with the address bar:
//!
//! - **types**: `Locale`, `Tab`, `Theme`, `ViewState`
//! - **location**: URL model (`Location`, `QueryString`)
//! - **history**: `History` trait and the in-memory `MemoryHistory`
//! - **controller**: `ViewController`, the glue between the two
//! - **error**: Error types
//!
//! # URL mapping
//!
//! ```text
//! /base/?lang=en#studies
//!         │         └── tab     (overview | studies | experience | future)
//!         └──────────── locale  (it | en)
//! ```
//!
//! # Example
//!
//! ```rust
//! use graduates_dashboard::state::{History, Locale, MemoryHistory, Tab, ViewController};
//!
//! let mut controller = ViewController::new(MemoryHistory::new("/?lang=en#studies"));
//! assert_eq!(controller.state().locale, Locale::En);
//! assert_eq!(controller.state().tab, Tab::Studies);
//!
//! controller.select_tab(Tab::Future).unwrap();
//! assert_eq!(controller.history().location().to_string(), "/?lang=en#future");
//! ```

pub mod controller;
pub mod error;
pub mod history;
pub mod location;
pub mod types;

pub use controller::ViewController;
pub use error::{NavigationError, ParseLocaleError, ParseTabError};
pub use history::{History, MemoryHistory};
pub use location::{Location, QueryString};
pub use types::{Locale, Tab, Theme, ViewState, LANG_PARAM};
