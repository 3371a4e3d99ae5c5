//! Test helpers for building dashboard state from a small in-memory dataset.

use std::sync::Arc;

use chrono::NaiveDate;
use stocksense_core::{SalesRecord, SalesTable, Settings};

use crate::app::AppState;

/// Laptop: 7 days of 10 units. Mouse: 5 days around 30 units.
pub fn sample_table() -> SalesTable {
    let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
    let mut records = Vec::new();
    for day in 1..=7 {
        records.push(SalesRecord::new(d(day), "Laptop", 10));
        if day <= 5 {
            records.push(SalesRecord::new(d(day), "Mouse", 28 + u64::from(day)));
        }
    }
    SalesTable::new(records)
}

pub fn sample_app() -> AppState {
    AppState::new(Some(Arc::new(sample_table())), &Settings::default())
}
