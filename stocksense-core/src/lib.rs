//! StockSense Core: sales history, moving-average trend, weekly forecast, stock advisory.
//!
//! Data flows leaf-first:
//! - Dataset loader with a load-once cache (`data`)
//! - Product filter (`data::SalesTable::series_for`)
//! - Trend engine: trailing SMA and flat weekly extrapolation (`indicators`, `forecast`)
//! - Stock advisory (`advisory`)
//!
//! `pipeline::analyze` ties the last three together as a pure function that
//! presentation layers call on every input change.

pub mod advisory;
pub mod config;
pub mod data;
pub mod domain;
pub mod forecast;
pub mod indicators;
pub mod pipeline;

pub use advisory::StockAdvisory;
pub use config::{ConfigError, Settings, TrendWindow};
pub use data::{DataError, DatasetCache, SalesTable};
pub use domain::{SalesRecord, SalesSeries, SeriesSummary, TrendPoint, TrendSeries};
pub use forecast::{forecast_weekly, trend_series, ForecastResult};
pub use pipeline::{analyze, Analysis};
