//! Synthetic sales history for demos and first runs.
//!
//! Daily units per product follow a base demand scaled by a weekday factor
//! (weekends sell more), a slow yearly wave and multiplicative noise. Output
//! is deterministic for a given seed.

use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::domain::SalesRecord;

/// A product and its average units sold per weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProfile {
    pub name: String,
    pub base_daily: f64,
}

impl ProductProfile {
    pub fn new(name: impl Into<String>, base_daily: f64) -> Self {
        Self {
            name: name.into(),
            base_daily,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub start: NaiveDate,
    pub days: u32,
    pub products: Vec<ProductProfile>,
    pub seed: u64,
    /// Relative noise amplitude, e.g. 0.2 for ±20%.
    pub noise: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            days: 366,
            products: vec![
                ProductProfile::new("Laptop", 12.0),
                ProductProfile::new("Mouse", 35.0),
                ProductProfile::new("Klavye", 20.0),
                ProductProfile::new("Monitor", 8.0),
                ProductProfile::new("Kulaklik", 25.0),
            ],
            seed: 42,
            noise: 0.2,
        }
    }
}

fn weekday_factor(day: Weekday) -> f64 {
    match day {
        Weekday::Sat | Weekday::Sun => 1.3,
        Weekday::Fri => 1.1,
        _ => 1.0,
    }
}

fn seasonal_factor(date: NaiveDate) -> f64 {
    1.0 + 0.25 * (2.0 * PI * f64::from(date.ordinal()) / 365.0).sin()
}

/// Longest history the CLI will generate, about a century of days.
pub const MAX_DAYS: u32 = 36_600;

/// Up-front allocation for `config`. Capped, since `days` is caller input.
fn capacity_hint(config: &GeneratorConfig) -> usize {
    (config.days.min(MAX_DAYS) as usize).saturating_mul(config.products.len())
}

/// Generate records ordered by date, then by product in profile order.
pub fn generate(config: &GeneratorConfig) -> Vec<SalesRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let noise = config.noise.abs();
    let mut records = Vec::with_capacity(capacity_hint(config));

    for date in config.start.iter_days().take(config.days as usize) {
        let factor = weekday_factor(date.weekday()) * seasonal_factor(date);
        for product in &config.products {
            let jitter = if noise > 0.0 {
                1.0 + rng.gen_range(-noise..noise)
            } else {
                1.0
            };
            let units = (product.base_daily * factor * jitter).round().max(0.0);
            records.push(SalesRecord::new(date, product.name.as_str(), units as u64));
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_hint_is_capped() {
        let huge = GeneratorConfig {
            days: u32::MAX,
            ..GeneratorConfig::default()
        };
        assert_eq!(capacity_hint(&huge), MAX_DAYS as usize * huge.products.len());

        let small = GeneratorConfig {
            days: 10,
            ..GeneratorConfig::default()
        };
        assert_eq!(capacity_hint(&small), 10 * small.products.len());
    }

    #[test]
    fn runs_out_of_calendar_without_overflow() {
        let config = GeneratorConfig {
            start: NaiveDate::MAX - chrono::Duration::days(2),
            days: u32::MAX,
            noise: 0.0,
            ..GeneratorConfig::default()
        };
        let records = generate(&config);
        assert!(!records.is_empty());
        assert!(records.len() <= 3 * config.products.len());
        assert_eq!(records.len() % config.products.len(), 0);
    }

    #[test]
    fn generates_every_product_every_day() {
        let config = GeneratorConfig {
            days: 10,
            ..GeneratorConfig::default()
        };
        let records = generate(&config);
        assert_eq!(records.len(), 10 * config.products.len());
        assert_eq!(records[0].date, config.start);
        assert_eq!(records[0].product_name, "Laptop");
        assert_eq!(records[1].product_name, "Mouse");
        assert_eq!(
            records.last().unwrap().date,
            config.start + chrono::Duration::days(9)
        );
    }

    #[test]
    fn same_seed_same_output() {
        let config = GeneratorConfig::default();
        assert_eq!(generate(&config), generate(&config));

        let other = GeneratorConfig {
            seed: 7,
            ..GeneratorConfig::default()
        };
        assert_ne!(generate(&config), generate(&other));
    }

    #[test]
    fn zero_noise_follows_profile() {
        let config = GeneratorConfig {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), // Monday
            days: 7,
            products: vec![ProductProfile::new("Laptop", 10.0)],
            seed: 1,
            noise: 0.0,
        };
        let records = generate(&config);
        let expected: Vec<u64> = records
            .iter()
            .map(|r| {
                (10.0 * weekday_factor(r.date.weekday()) * seasonal_factor(r.date)).round() as u64
            })
            .collect();
        assert_eq!(records.iter().map(|r| r.units_sold).collect::<Vec<_>>(), expected);
        // Saturday outsells Monday.
        assert!(records[5].units_sold > records[0].units_sold);
    }

    #[test]
    fn zero_days_is_empty() {
        let config = GeneratorConfig {
            days: 0,
            ..GeneratorConfig::default()
        };
        assert!(generate(&config).is_empty());
    }
}
