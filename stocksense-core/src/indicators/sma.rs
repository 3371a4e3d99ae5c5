//! Simple Moving Average (SMA) of units sold.
//!
//! Trailing mean over a lookback window, using only past and current records.
//! Lookback: period - 1 (first valid value at index period-1).

use crate::domain::SalesRecord;

/// Trailing mean of `units_sold` over `period` records.
///
/// The first `period - 1` positions are `None`. Panics if `period` is zero.
pub fn sma(records: &[SalesRecord], period: usize) -> Vec<Option<f64>> {
    assert!(period >= 1, "SMA period must be >= 1");
    let n = records.len();
    let mut result = vec![None; n];

    if n < period {
        return result;
    }

    // Unit counts are integers, so the window sum is exact and every
    // mean is a single rounding of sum / period.
    let mut sum: u128 = records
        .iter()
        .take(period)
        .map(|r| u128::from(r.units_sold))
        .sum();
    result[period - 1] = Some(sum as f64 / period as f64);

    // Roll the window forward
    for i in period..n {
        sum += u128::from(records[i].units_sold);
        sum -= u128::from(records[i - period].units_sold);
        result[i] = Some(sum as f64 / period as f64);
    }

    result
}
