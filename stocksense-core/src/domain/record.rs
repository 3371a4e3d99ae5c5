//! SalesRecord: one row of the sales history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Units of one product sold on one day.
///
/// One record per (product, date) is expected but duplicates are not rejected;
/// they simply appear twice in the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub product_name: String,
    pub units_sold: u64,
}

impl SalesRecord {
    pub fn new(date: NaiveDate, product_name: impl Into<String>, units_sold: u64) -> Self {
        Self {
            date,
            product_name: product_name.into(),
            units_sold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serialization_roundtrip() {
        let record = SalesRecord::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), "Laptop", 12);
        let json = serde_json::to_string(&record).unwrap();
        let deser: SalesRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deser);
    }
}
