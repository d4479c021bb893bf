//! UI Components
//!
//! Leptos components for the dashboard page.

pub mod card;
pub mod chart;
pub mod header;
pub mod tab_bar;

pub use card::CardView;
pub use chart::ChartCanvas;
pub use header::Header;
pub use tab_bar::TabBar;
