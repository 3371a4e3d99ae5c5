//! Trend engine: trailing moving average and the flat weekly forecast.
//!
//! The forecast treats the most recent smoothed daily rate as constant over
//! the next `FORECAST_HORIZON_DAYS` days. It ignores slope, seasonality and
//! weekday effects.

use serde::{Deserialize, Serialize};

use crate::config::FORECAST_HORIZON_DAYS;
use crate::domain::{SalesSeries, TrendPoint, TrendSeries};
use crate::indicators::sma;

/// Trailing moving average of units sold, one point per record.
///
/// The window contract (`MIN_WINDOW..=MAX_WINDOW`) is the caller's job; this
/// only needs `window >= 1`.
pub fn trend_series(series: &SalesSeries, window: usize) -> TrendSeries {
    let values = sma(series.records(), window);
    let points = series
        .records()
        .iter()
        .zip(values)
        .map(|(r, value)| TrendPoint { date: r.date, value })
        .collect();
    TrendSeries { window, points }
}

/// Outcome of the weekly demand estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ForecastResult {
    Defined {
        /// Last trend value, in units per day.
        daily_rate: f64,
        /// `daily_rate` times the horizon, unrounded.
        weekly_estimate: f64,
    },
    /// The series is shorter than the window, so the trend never became defined.
    InsufficientHistory { points: usize, window: usize },
}

impl ForecastResult {
    pub fn is_defined(&self) -> bool {
        matches!(self, ForecastResult::Defined { .. })
    }

    /// Full-precision estimate, used for the stock comparison.
    pub fn weekly_estimate(&self) -> Option<f64> {
        match self {
            ForecastResult::Defined { weekly_estimate, .. } => Some(*weekly_estimate),
            ForecastResult::InsufficientHistory { .. } => None,
        }
    }

    /// Estimate truncated to whole units, for display only.
    pub fn display_units(&self) -> Option<u64> {
        self.weekly_estimate().map(|e| e.trunc() as u64)
    }

    /// User-facing forecast sentence.
    pub fn message(&self, product: &str) -> String {
        match self {
            ForecastResult::Defined { .. } => format!(
                "Based on the latest trend, about {} units of {product} are expected to sell in the next {FORECAST_HORIZON_DAYS} days.",
                self.display_units().unwrap_or_default()
            ),
            ForecastResult::InsufficientHistory { points, window } => format!(
                "Not enough data to compute a trend ({points} days of history, window is {window}). Please reduce the window size."
            ),
        }
    }
}

/// Derive the weekly estimate from the final trend value.
pub fn forecast_weekly(trend: &TrendSeries) -> ForecastResult {
    match trend.last_value() {
        Some(daily_rate) => ForecastResult::Defined {
            daily_rate,
            weekly_estimate: daily_rate * f64::from(FORECAST_HORIZON_DAYS),
        },
        None => ForecastResult::InsufficientHistory {
            points: trend.len(),
            window: trend.window,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(units: &[u64]) -> SalesSeries {
        SalesSeries::from_units("Laptop", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), units)
    }

    #[test]
    fn trend_aligns_with_series_dates() {
        let s = series(&[1, 2, 3, 4]);
        let trend = trend_series(&s, 3);
        assert_eq!(trend.len(), 4);
        assert_eq!(trend.window, 3);
        for (p, r) in trend.points.iter().zip(s.records()) {
            assert_eq!(p.date, r.date);
        }
        assert_eq!(trend.points[1].value, None);
        assert_eq!(trend.points[2].value, Some(2.0));
        assert_eq!(trend.points[3].value, Some(3.0));
    }

    #[test]
    fn flat_week_forecast() {
        let trend = trend_series(&series(&[10; 7]), 7);
        let forecast = forecast_weekly(&trend);
        assert_eq!(
            forecast,
            ForecastResult::Defined {
                daily_rate: 10.0,
                weekly_estimate: 70.0
            }
        );
        assert_eq!(forecast.display_units(), Some(70));
    }

    #[test]
    fn step_change_forecast_uses_last_window() {
        let trend = trend_series(&series(&[0, 0, 0, 20, 20, 20, 20]), 3);
        assert_eq!(forecast_weekly(&trend).weekly_estimate(), Some(140.0));
    }

    #[test]
    fn short_series_is_insufficient() {
        let trend = trend_series(&series(&[5, 5, 5, 5, 5]), 7);
        let forecast = forecast_weekly(&trend);
        assert!(!forecast.is_defined());
        assert_eq!(forecast, ForecastResult::InsufficientHistory { points: 5, window: 7 });
        assert!(forecast.weekly_estimate().is_none());
        assert!(forecast.message("Laptop").contains("reduce the window size"));
    }

    #[test]
    fn empty_series_is_insufficient() {
        let trend = trend_series(&series(&[]), 3);
        assert!(!forecast_weekly(&trend).is_defined());
    }

    #[test]
    fn display_truncates_but_estimate_keeps_precision() {
        // mean(1,2,2) * 7 = 35/3 = 11.67
        let forecast = forecast_weekly(&trend_series(&series(&[1, 2, 2]), 3));
        assert_eq!(forecast.display_units(), Some(11));
        let estimate = forecast.weekly_estimate().unwrap();
        assert!(estimate > 11.6 && estimate < 11.7);
        assert!(forecast.message("Laptop").contains("about 11 units of Laptop"));
    }
}
