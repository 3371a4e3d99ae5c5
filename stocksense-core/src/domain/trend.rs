//! TrendSeries: moving-average values aligned with a sales series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trend observation. `value` is `None` while the window is still filling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// Trend values parallel to a `SalesSeries`, one point per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub window: usize,
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Trend value at the final position, if it is defined.
    pub fn last_value(&self) -> Option<f64> {
        self.points.last().and_then(|p| p.value)
    }

    /// Only the positions where the trend is defined.
    pub fn defined(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.points.iter().filter_map(|p| p.value.map(|v| (p.date, v)))
    }
}
