//! SalesSeries: the sales history of a single product.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::SalesRecord;

/// Immutable snapshot of one product's records, in source order.
///
/// Rebuilt from the dataset every time the selected product changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSeries {
    product: String,
    records: Vec<SalesRecord>,
}

impl SalesSeries {
    pub fn new(product: impl Into<String>, records: Vec<SalesRecord>) -> Self {
        Self {
            product: product.into(),
            records,
        }
    }

    /// Build a series from bare unit counts on consecutive days starting at `start`.
    pub fn from_units(product: &str, start: NaiveDate, units: &[u64]) -> Self {
        let records = units
            .iter()
            .zip(start.iter_days())
            .map(|(&u, date)| SalesRecord::new(date, product, u))
            .collect();
        Self::new(product, records)
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unit counts in series order.
    pub fn units(&self) -> impl Iterator<Item = u64> + '_ {
        self.records.iter().map(|r| r.units_sold)
    }

    /// First and last dates in series order.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary::of(self)
    }
}

/// Headline KPIs for a series: total units and mean daily units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub total_units: u64,
    /// `None` for an empty series.
    pub mean_daily: Option<f64>,
    pub days: usize,
}

impl SeriesSummary {
    pub fn of(series: &SalesSeries) -> Self {
        let total_units: u64 = series.units().sum();
        let days = series.len();
        let mean_daily = (days > 0).then(|| total_units as f64 / days as f64);
        Self {
            total_units,
            mean_daily,
            days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn from_units_assigns_consecutive_dates() {
        let series = SalesSeries::from_units("Mouse", start(), &[1, 2, 3]);
        assert_eq!(series.len(), 3);
        assert_eq!(series.records()[2].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(
            series.date_span(),
            Some((start(), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()))
        );
    }

    #[test]
    fn summary_totals_and_mean() {
        let series = SalesSeries::from_units("Mouse", start(), &[4, 6, 11]);
        let summary = series.summary();
        assert_eq!(summary.total_units, 21);
        assert_eq!(summary.days, 3);
        assert_eq!(summary.mean_daily, Some(7.0));
    }

    #[test]
    fn summary_of_empty_series_has_no_mean() {
        let series = SalesSeries::new("Mouse", Vec::new());
        let summary = series.summary();
        assert_eq!(summary.total_units, 0);
        assert!(summary.mean_daily.is_none());
        assert!(series.date_span().is_none());
    }
}
