//! Indicators computed over a product's sales history.
//!
//! An indicator maps a slice of records to one optional value per record.
//! `None` marks positions inside the warm-up lookback where the indicator is
//! not yet defined.

pub mod sma;

pub use sma::sma;

/// Create records on consecutive days from unit counts for testing.
#[cfg(test)]
pub fn make_records(units: &[u64]) -> Vec<crate::domain::SalesRecord> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    units
        .iter()
        .enumerate()
        .map(|(i, &u)| {
            crate::domain::SalesRecord::new(base_date + chrono::Duration::days(i as i64), "TEST", u)
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
