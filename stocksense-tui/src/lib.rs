//! StockSense TUI - terminal sales dashboard.
//!
//! Panels:
//! 1. Overview: product selector, sales totals, raw daily chart
//! 2. Forecast: window slider, trend overlay, weekly estimate, stock check
//! 3. Help: keyboard shortcuts

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::{AppState, Panel};
pub use input::handle_key;

#[cfg(test)]
mod test_helpers;
