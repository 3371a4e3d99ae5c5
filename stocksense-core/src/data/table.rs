//! SalesTable: the full loaded dataset and the product filter.

use std::collections::HashSet;

use crate::domain::{SalesRecord, SalesSeries};

/// All loaded sales records in source order. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

impl SalesTable {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
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

    /// Distinct product names in order of first appearance.
    pub fn products(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.product_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn contains_product(&self, product: &str) -> bool {
        self.records.iter().any(|r| r.product_name == product)
    }

    /// Rows for one product, keeping source order.
    ///
    /// Product keys come from `products()`, so an unknown key only arises from
    /// outside input; it yields an empty series.
    pub fn series_for(&self, product: &str) -> SalesSeries {
        let records = self
            .records
            .iter()
            .filter(|r| r.product_name == product)
            .cloned()
            .collect();
        SalesSeries::new(product, records)
    }
}
