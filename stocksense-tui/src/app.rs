//! Application state: single-owner, main-thread only.
//!
//! Every user input that changes the product, the window or the stock level
//! goes through a setter that calls `recompute()`, which rebuilds the series
//! and the analysis from the cached dataset.

use std::sync::Arc;

use stocksense_core::{analyze, Analysis, SalesSeries, SalesTable, Settings, TrendWindow};
use tracing::debug;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Overview,
    Forecast,
    Help,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Overview, Panel::Forecast, Panel::Help];

    pub fn index(self) -> usize {
        match self {
            Panel::Overview => 0,
            Panel::Forecast => 1,
            Panel::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Overview => "Overview",
            Panel::Forecast => "Forecast",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Panel {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    StockEntry,
}

/// Largest number of digits accepted in the stock entry box, the width of `u64::MAX`.
/// Values of that width above `u64::MAX` are rejected on commit.
pub const STOCK_INPUT_MAX_DIGITS: usize = 20;

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Data; `None` means the dataset file was missing at startup.
    pub dataset: Option<Arc<SalesTable>>,
    pub products: Vec<String>,
    pub product_idx: usize,

    // User inputs
    pub window: TrendWindow,
    pub stock: u64,

    // Derived, rebuilt by `recompute()`
    pub series: Option<SalesSeries>,
    pub analysis: Option<Analysis>,

    // Cross-cutting
    pub overlay: Overlay,
    pub stock_input: String,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(dataset: Option<Arc<SalesTable>>, settings: &Settings) -> Self {
        let products = dataset
            .as_ref()
            .map(|t| t.products().into_iter().map(String::from).collect())
            .unwrap_or_default();
        let mut app = Self {
            active_panel: Panel::Overview,
            running: true,
            dataset,
            products,
            product_idx: 0,
            window: settings.default_window,
            stock: settings.default_stock,
            series: None,
            analysis: None,
            overlay: Overlay::None,
            stock_input: String::new(),
            status_message: None,
        };
        app.recompute();
        app
    }

    pub fn dataset_missing(&self) -> bool {
        self.dataset.is_none()
    }

    pub fn selected_product(&self) -> Option<&str> {
        self.products.get(self.product_idx).map(String::as_str)
    }

    /// Rebuild the product series and its analysis from current inputs.
    pub fn recompute(&mut self) {
        let (Some(table), Some(product)) = (self.dataset.as_ref(), self.selected_product()) else {
            self.series = None;
            self.analysis = None;
            return;
        };
        let series = table.series_for(product);
        let analysis = analyze(&series, self.window, self.stock);
        debug!(
            product = %analysis.product,
            window = self.window.get(),
            stock = self.stock,
            "dashboard recomputed"
        );
        self.series = Some(series);
        self.analysis = Some(analysis);
    }

    pub fn select_next_product(&mut self) {
        if self.products.is_empty() {
            return;
        }
        self.product_idx = (self.product_idx + 1) % self.products.len();
        self.recompute();
    }

    pub fn select_prev_product(&mut self) {
        if self.products.is_empty() {
            return;
        }
        self.product_idx = (self.product_idx + self.products.len() - 1) % self.products.len();
        self.recompute();
    }

    pub fn set_window(&mut self, window: TrendWindow) {
        if window != self.window {
            self.window = window;
            self.recompute();
        }
    }

    pub fn widen_window(&mut self) {
        self.set_window(self.window.increment());
    }

    pub fn narrow_window(&mut self) {
        self.set_window(self.window.decrement());
    }

    pub fn set_stock(&mut self, stock: u64) {
        if stock != self.stock {
            self.stock = stock;
            self.recompute();
        }
    }

    /// Move the stock level by `delta`, stopping at zero.
    pub fn adjust_stock(&mut self, delta: i64) {
        let stock = if delta >= 0 {
            self.stock.saturating_add(delta.unsigned_abs())
        } else {
            self.stock.saturating_sub(delta.unsigned_abs())
        };
        self.set_stock(stock);
    }

    pub fn open_stock_entry(&mut self) {
        self.stock_input.clear();
        self.overlay = Overlay::StockEntry;
    }

    pub fn push_stock_digit(&mut self, c: char) {
        if c.is_ascii_digit() && self.stock_input.len() < STOCK_INPUT_MAX_DIGITS {
            self.stock_input.push(c);
        }
    }

    /// Apply the typed stock level. Empty input keeps the current value.
    pub fn commit_stock_entry(&mut self) {
        let input = std::mem::take(&mut self.stock_input);
        self.overlay = Overlay::None;
        if input.is_empty() {
            return;
        }
        match input.parse::<u64>() {
            Ok(stock) => {
                self.set_stock(stock);
                self.set_status(format!("Stock set to {stock} units"));
            }
            Err(e) => self.set_error(format!("Invalid stock '{input}': {e}")),
        }
    }

    pub fn cancel_stock_entry(&mut self) {
        self.stock_input.clear();
        self.overlay = Overlay::None;
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Set an error status message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_app;

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Overview.next(), Panel::Forecast);
        assert_eq!(Panel::Help.next(), Panel::Overview);
        assert_eq!(Panel::Overview.prev(), Panel::Help);
        assert_eq!(Panel::Forecast.prev(), Panel::Overview);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..3 {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(3).is_none());
    }

    #[test]
    fn new_app_analyzes_first_product() {
        let app = sample_app();
        assert_eq!(app.selected_product(), Some("Laptop"));
        let analysis = app.analysis.as_ref().unwrap();
        assert_eq!(analysis.product, "Laptop");
        assert_eq!(analysis.forecast.weekly_estimate(), Some(70.0));
        assert_eq!(analysis.advisory.unwrap().shortfall, 20);
    }

    #[test]
    fn missing_dataset_has_nothing_to_analyze() {
        let app = AppState::new(None, &Settings::default());
        assert!(app.dataset_missing());
        assert!(app.selected_product().is_none());
        assert!(app.analysis.is_none());
    }

    #[test]
    fn product_change_recomputes() {
        let mut app = sample_app();
        app.select_next_product();
        assert_eq!(app.selected_product(), Some("Mouse"));
        assert_eq!(app.series.as_ref().unwrap().product(), "Mouse");
        assert_eq!(app.analysis.as_ref().unwrap().product, "Mouse");

        app.select_prev_product();
        app.select_prev_product();
        assert_eq!(app.selected_product(), Some("Mouse"));
    }

    #[test]
    fn window_change_recomputes() {
        let mut app = sample_app();
        app.select_next_product(); // Mouse: 5 days of history
        assert!(!app.analysis.as_ref().unwrap().forecast.is_defined());

        for _ in 0..4 {
            app.narrow_window();
        }
        assert_eq!(app.window.get(), 3);
        assert!(app.analysis.as_ref().unwrap().forecast.is_defined());
    }

    #[test]
    fn stock_change_recomputes_advisory() {
        let mut app = sample_app();
        app.set_stock(70);
        assert!(app.analysis.as_ref().unwrap().advisory.unwrap().is_sufficient);
        app.adjust_stock(-100);
        assert_eq!(app.stock, 0);
        app.adjust_stock(5);
        assert_eq!(app.stock, 5);
    }

    #[test]
    fn stock_entry_commit_and_cancel() {
        let mut app = sample_app();
        app.open_stock_entry();
        for c in "12x0".chars() {
            app.push_stock_digit(c);
        }
        assert_eq!(app.stock_input, "120");
        app.commit_stock_entry();
        assert_eq!(app.stock, 120);
        assert_eq!(app.overlay, Overlay::None);

        app.open_stock_entry();
        app.push_stock_digit('9');
        app.cancel_stock_entry();
        assert_eq!(app.stock, 120);
    }

    #[test]
    fn stock_entry_caps_digits() {
        let mut app = sample_app();
        app.open_stock_entry();
        for c in "18446744073709551615999".chars() {
            app.push_stock_digit(c);
        }
        assert_eq!(app.stock_input.len(), STOCK_INPUT_MAX_DIGITS);
        app.commit_stock_entry();
        assert_eq!(app.stock, u64::MAX);
        assert!(app.analysis.as_ref().unwrap().advisory.unwrap().is_sufficient);
    }

    #[test]
    fn stock_entry_rejects_overflow() {
        let mut app = sample_app();
        app.open_stock_entry();
        for _ in 0..STOCK_INPUT_MAX_DIGITS {
            app.push_stock_digit('9');
        }
        app.commit_stock_entry();
        assert_eq!(app.stock, Settings::default().default_stock);
        assert_eq!(app.overlay, Overlay::None);
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Error);
        assert!(msg.starts_with("Invalid stock"));
    }

    #[test]
    fn empty_dataset_has_no_products() {
        let app = AppState::new(Some(Arc::new(SalesTable::default())), &Settings::default());
        assert!(!app.dataset_missing());
        assert!(app.products.is_empty());
        assert!(app.analysis.is_none());
    }
}
