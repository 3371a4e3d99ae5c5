//! Domain types for StockSense

pub mod record;
pub mod series;
pub mod trend;

pub use record::SalesRecord;
pub use series::{SalesSeries, SeriesSummary};
pub use trend::{TrendPoint, TrendSeries};
