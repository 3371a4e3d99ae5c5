//! The full (series, window, stock) → analysis pipeline.
//!
//! A pure function recomputed from scratch on every input change. Nothing is
//! carried over between calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::advisory::StockAdvisory;
use crate::config::TrendWindow;
use crate::domain::{SalesSeries, SeriesSummary, TrendSeries};
use crate::forecast::{forecast_weekly, trend_series, ForecastResult};

/// Everything the dashboard shows for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub product: String,
    pub summary: SeriesSummary,
    pub trend: TrendSeries,
    pub forecast: ForecastResult,
    /// `None` when the forecast is undefined.
    pub advisory: Option<StockAdvisory>,
}

pub fn analyze(series: &SalesSeries, window: TrendWindow, current_stock: u64) -> Analysis {
    let summary = series.summary();
    let trend = trend_series(series, window.get());
    let forecast = forecast_weekly(&trend);
    let advisory = forecast
        .weekly_estimate()
        .map(|estimate| StockAdvisory::assess(estimate, current_stock));

    debug!(
        product = series.product(),
        window = window.get(),
        points = series.len(),
        defined = forecast.is_defined(),
        "analysis recomputed"
    );

    Analysis {
        product: series.product().to_string(),
        summary,
        trend,
        forecast,
        advisory,
    }
}
