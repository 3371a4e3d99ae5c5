//! Stock advisory: does current stock cover the weekly estimate?

use serde::{Deserialize, Serialize};

/// Stock check against a weekly demand estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdvisory {
    pub current_stock: u64,
    /// Extra units to order; 0 when stock is sufficient.
    pub shortfall: u64,
    pub is_sufficient: bool,
}

impl StockAdvisory {
    /// Compare stock against the unrounded estimate.
    ///
    /// Sufficiency is a direct float comparison with the full-precision
    /// estimate, never with the truncated display value. The shortfall is
    /// rounded up, so an insufficient stock always reports at least one unit.
    pub fn assess(weekly_estimate: f64, current_stock: u64) -> Self {
        let stock = current_stock as f64;
        let is_sufficient = stock >= weekly_estimate;
        let shortfall = if is_sufficient {
            0
        } else {
            (weekly_estimate - stock).ceil() as u64
        };
        Self {
            current_stock,
            shortfall,
            is_sufficient,
        }
    }

    /// User-facing advisory sentence.
    pub fn message(&self) -> String {
        if self.is_sufficient {
            "Stock level is safe. It should cover the coming week.".to_string()
        } else {
            format!(
                "Warning: stock may run out! Order {} more units to meet the estimated demand.",
                self.shortfall
            )
        }
    }
}
